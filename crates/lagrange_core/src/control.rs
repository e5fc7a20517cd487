//! Widget controls and the dispatch table behind them.
//!
//! Each button on a widget message carries a custom id. [`Control`] maps those
//! ids to the three operations, and [`dispatch`] runs the operation against a
//! widget and tells the caller how to answer the interaction.

use crate::{
    Choice, ChooseOutcome, CycleOutcome, DisplayPayload, ItemSource, RatingWidget, UserId,
};
use lagrange_error::{LagrangeResult, WidgetError, WidgetErrorKind};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Notice shown to a non-owner who presses the cycle button.
pub const CYCLE_DENIED_NOTICE: &str =
    "Only the command initiator can cycle through waifus in this message.";

/// Notice shown when a control is pressed after the widget expired.
pub const EXPIRED_NOTICE: &str = "This message no longer accepts votes.";

/// The buttons attached to a widget message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Control {
    /// Vote smash.
    #[display("smash")]
    Smash,
    /// Vote pass.
    #[display("pass")]
    Pass,
    /// Fetch the next item.
    #[display("cycle")]
    Cycle,
}

impl Control {
    /// All controls, in button order.
    pub const ALL: [Control; 3] = [Control::Smash, Control::Pass, Control::Cycle];

    /// Component custom id carried by the button.
    pub const fn custom_id(self) -> &'static str {
        match self {
            Self::Smash => "lagrange:smash",
            Self::Pass => "lagrange:pass",
            Self::Cycle => "lagrange:cycle",
        }
    }
}

impl FromStr for Control {
    type Err = WidgetError;

    fn from_str(custom_id: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|control| control.custom_id() == custom_id)
            .ok_or_else(|| WidgetError::new(WidgetErrorKind::UnknownControl(custom_id.to_string())))
    }
}

/// How to answer the interaction that triggered a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Edit the widget message with a fresh render.
    Update(DisplayPayload),
    /// Acknowledge without visible change.
    Acknowledge,
    /// Tell only the clicking user.
    Ephemeral(String),
}

/// Runs `control` for `user` against `widget`.
///
/// # Errors
///
/// Only the cycle control can fail, when fetching the next item fails. The
/// widget is left as it was.
///
/// # Example
///
/// ```rust,ignore
/// let control: Control = interaction.data.custom_id.parse()?;
/// match dispatch(control, &mut widget, user, &source).await? {
///     Reply::Update(payload) => { /* edit message */ }
///     Reply::Acknowledge => { /* defer */ }
///     Reply::Ephemeral(text) => { /* private notice */ }
/// }
/// ```
#[instrument(skip(widget, source), fields(user_id = %user))]
pub async fn dispatch<S>(
    control: Control,
    widget: &mut RatingWidget,
    user: UserId,
    source: &S,
) -> LagrangeResult<Reply>
where
    S: ItemSource + ?Sized,
{
    let reply = match control {
        Control::Smash => vote(widget, user, Choice::Smash, source),
        Control::Pass => vote(widget, user, Choice::Pass, source),
        Control::Cycle => match widget.cycle(user, source).await? {
            CycleOutcome::Cycled => Reply::Update(source.render(widget)),
            CycleOutcome::Denied => Reply::Ephemeral(CYCLE_DENIED_NOTICE.to_string()),
            CycleOutcome::Inactive => Reply::Ephemeral(EXPIRED_NOTICE.to_string()),
        },
    };
    debug!(?reply, "Control dispatched");
    Ok(reply)
}

fn vote<S>(widget: &mut RatingWidget, user: UserId, choice: Choice, source: &S) -> Reply
where
    S: ItemSource + ?Sized,
{
    match widget.choose(user, choice) {
        ChooseOutcome::Recorded => Reply::Update(source.render(widget)),
        ChooseOutcome::Unchanged => Reply::Acknowledge,
        ChooseOutcome::Inactive => Reply::Ephemeral(EXPIRED_NOTICE.to_string()),
    }
}
