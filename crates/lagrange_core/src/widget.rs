//! The smash-or-pass rating widget.
//!
//! A [`RatingWidget`] is the state behind one interactive message: the item on
//! display, who voted which way, who may cycle to the next item, and whether the
//! message still accepts input. Every voter appears in at most one of the two
//! vote sets.

use crate::{Item, ItemSource, UserId};
use lagrange_error::LagrangeResult;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// The two ways a user can vote on the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Choice {
    /// Affirmative vote.
    #[display("smash")]
    Smash,
    /// Negative vote.
    #[display("pass")]
    Pass,
}

impl Choice {
    /// The other vote.
    pub fn opposite(self) -> Self {
        match self {
            Self::Smash => Self::Pass,
            Self::Pass => Self::Smash,
        }
    }
}

/// Lifecycle of a widget. `Expired` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum WidgetState {
    /// Controls are attached and accept input.
    #[default]
    #[display("active")]
    Active,
    /// Controls were detached after inactivity.
    #[display("expired")]
    Expired,
}

/// Result of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// The vote changed the sets; the display needs a refresh.
    Recorded,
    /// The user already held that vote.
    Unchanged,
    /// The widget has expired.
    Inactive,
}

/// Result of a cycle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new item is on display and the votes were cleared.
    Cycled,
    /// The caller is not the owner.
    Denied,
    /// The widget has expired.
    Inactive,
}

/// Vote state of one interactive message.
///
/// # Examples
///
/// ```
/// use lagrange_core::{Choice, ChooseOutcome, Item, RatingWidget, UserId};
///
/// let item = Item::new(1, "https://x/1.png", None, "#000000");
/// let mut widget = RatingWidget::new(item, Some(UserId::new(7)));
///
/// assert_eq!(widget.choose(UserId::new(9), Choice::Smash), ChooseOutcome::Recorded);
/// assert_eq!(widget.choose(UserId::new(9), Choice::Smash), ChooseOutcome::Unchanged);
/// assert!(widget.smashers().contains(&UserId::new(9)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct RatingWidget {
    /// Item currently on display.
    current: Item,
    /// Users who voted smash.
    smashers: BTreeSet<UserId>,
    /// Users who voted pass.
    passers: BTreeSet<UserId>,
    /// User allowed to cycle; anyone may cycle when unset.
    owner: Option<UserId>,
    /// Lifecycle state.
    state: WidgetState,
}

impl RatingWidget {
    /// Creates an active widget showing `current` with no votes.
    pub fn new(current: Item, owner: Option<UserId>) -> Self {
        Self {
            current,
            smashers: BTreeSet::new(),
            passers: BTreeSet::new(),
            owner,
            state: WidgetState::Active,
        }
    }

    /// Whether the widget stopped accepting input.
    pub fn is_expired(&self) -> bool {
        self.state == WidgetState::Expired
    }

    /// The vote `user` currently holds, if any.
    pub fn choice_of(&self, user: UserId) -> Option<Choice> {
        if self.smashers.contains(&user) {
            Some(Choice::Smash)
        } else if self.passers.contains(&user) {
            Some(Choice::Pass)
        } else {
            None
        }
    }

    fn set_mut(&mut self, choice: Choice) -> &mut BTreeSet<UserId> {
        match choice {
            Choice::Smash => &mut self.smashers,
            Choice::Pass => &mut self.passers,
        }
    }

    /// Records `choice` for `user`, moving them out of the opposite set.
    #[instrument(skip(self, user), fields(user_id = %user))]
    pub fn choose(&mut self, user: UserId, choice: Choice) -> ChooseOutcome {
        if self.is_expired() {
            return ChooseOutcome::Inactive;
        }

        if self.choice_of(user) == Some(choice) {
            debug!("Vote already recorded");
            return ChooseOutcome::Unchanged;
        }

        self.set_mut(choice.opposite()).remove(&user);
        self.set_mut(choice).insert(user);
        debug!(
            smashers = self.smashers.len(),
            passers = self.passers.len(),
            "Vote recorded"
        );
        ChooseOutcome::Recorded
    }

    /// Whether `user` may cycle to the next item.
    pub fn may_cycle(&self, user: UserId) -> bool {
        self.owner.is_none_or(|owner| owner == user)
    }

    /// Fetches the next item from `source` and clears all votes.
    ///
    /// Nothing changes when the caller is not allowed to cycle or the widget
    /// has expired.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged; the widget keeps its current item
    /// and votes in that case.
    #[instrument(skip_all, fields(user_id = %user))]
    pub async fn cycle<S>(&mut self, user: UserId, source: &S) -> LagrangeResult<CycleOutcome>
    where
        S: ItemSource + ?Sized,
    {
        if self.is_expired() {
            return Ok(CycleOutcome::Inactive);
        }

        if !self.may_cycle(user) {
            debug!(owner = ?self.owner, "Cycle denied for non-owner");
            return Ok(CycleOutcome::Denied);
        }

        let next = source.fetch().await?;
        self.replace(next);
        Ok(CycleOutcome::Cycled)
    }

    /// Puts `item` on display and clears both vote sets.
    pub fn replace(&mut self, item: Item) {
        debug!(item_id = *item.id(), "Replacing displayed item");
        self.smashers.clear();
        self.passers.clear();
        self.current = item;
    }

    /// Marks the widget expired. Returns `false` if it already was.
    pub fn expire(&mut self) -> bool {
        if self.is_expired() {
            return false;
        }
        self.state = WidgetState::Expired;
        true
    }
}
