use async_trait::async_trait;
use lagrange_core::{
    CYCLE_DENIED_NOTICE, Choice, ChooseOutcome, Control, CycleOutcome, DisplayPayload,
    EXPIRED_NOTICE, Item, ItemSource, RatingWidget, Reply, UserId, WidgetState, dispatch,
    render_widget,
};
use lagrange_error::{LagrangeResult, WaifuError, WaifuErrorKind};
use std::sync::Mutex;

/// Hands out queued items in order, failing once the queue is empty.
struct QueueSource {
    items: Mutex<Vec<Item>>,
}

impl QueueSource {
    fn new(mut items: Vec<Item>) -> Self {
        items.reverse();
        Self {
            items: Mutex::new(items),
        }
    }
}

#[async_trait]
impl ItemSource for QueueSource {
    async fn fetch(&self) -> LagrangeResult<Item> {
        let next = self.items.lock().unwrap().pop();
        next.ok_or_else(|| WaifuError::new(WaifuErrorKind::EmptyResult).into())
    }

    fn render(&self, widget: &RatingWidget) -> DisplayPayload {
        render_widget(widget)
    }
}

fn item(id: u64) -> Item {
    Item::new(
        id,
        format!("https://x/{id}.png"),
        Some(format!("https://src/{id}")),
        "#336699",
    )
}

const OWNER: UserId = UserId::new(1);
const ALICE: UserId = UserId::new(10);
const BOB: UserId = UserId::new(20);

fn assert_disjoint(widget: &RatingWidget) {
    assert!(widget.smashers().is_disjoint(widget.passers()));
}

#[test]
fn switching_votes_keeps_sets_disjoint() {
    let mut widget = RatingWidget::new(item(1), Some(OWNER));

    assert_eq!(widget.choose(ALICE, Choice::Smash), ChooseOutcome::Recorded);
    assert!(widget.smashers().contains(&ALICE));
    assert!(!widget.passers().contains(&ALICE));
    assert_disjoint(&widget);

    assert_eq!(widget.choose(ALICE, Choice::Pass), ChooseOutcome::Recorded);
    assert!(widget.passers().contains(&ALICE));
    assert!(!widget.smashers().contains(&ALICE));
    assert_disjoint(&widget);

    assert_eq!(widget.choose(ALICE, Choice::Smash), ChooseOutcome::Recorded);
    assert_eq!(widget.choice_of(ALICE), Some(Choice::Smash));
    assert_disjoint(&widget);
}

#[test]
fn redundant_vote_is_a_no_op() {
    let mut widget = RatingWidget::new(item(1), Some(OWNER));
    widget.choose(ALICE, Choice::Smash);
    widget.choose(BOB, Choice::Pass);
    let before = widget.clone();

    assert_eq!(widget.choose(ALICE, Choice::Smash), ChooseOutcome::Unchanged);
    assert_eq!(widget, before);
}

#[tokio::test]
async fn owner_cycle_clears_votes_and_swaps_item() {
    let source = QueueSource::new(vec![item(2)]);
    let mut widget = RatingWidget::new(item(1), Some(OWNER));
    widget.choose(ALICE, Choice::Smash);
    widget.choose(BOB, Choice::Pass);

    let outcome = widget.cycle(OWNER, &source).await.unwrap();

    assert_eq!(outcome, CycleOutcome::Cycled);
    assert!(widget.smashers().is_empty());
    assert!(widget.passers().is_empty());
    assert_eq!(*widget.current().id(), 2);
}

#[tokio::test]
async fn non_owner_cycle_is_denied_without_changes() {
    let source = QueueSource::new(vec![item(2)]);
    let mut widget = RatingWidget::new(item(1), Some(OWNER));
    widget.choose(ALICE, Choice::Smash);
    let before = widget.clone();

    let reply = dispatch(Control::Cycle, &mut widget, BOB, &source)
        .await
        .unwrap();

    assert_eq!(reply, Reply::Ephemeral(CYCLE_DENIED_NOTICE.to_string()));
    assert_eq!(widget, before);
}

#[tokio::test]
async fn ownerless_widget_lets_anyone_cycle() {
    let source = QueueSource::new(vec![item(2)]);
    let mut widget = RatingWidget::new(item(1), None);

    assert!(widget.may_cycle(BOB));
    let outcome = widget.cycle(BOB, &source).await.unwrap();
    assert_eq!(outcome, CycleOutcome::Cycled);
}

#[tokio::test]
async fn failed_fetch_leaves_widget_untouched() {
    let source = QueueSource::new(vec![]);
    let mut widget = RatingWidget::new(item(1), Some(OWNER));
    widget.choose(ALICE, Choice::Smash);
    let before = widget.clone();

    assert!(widget.cycle(OWNER, &source).await.is_err());
    assert_eq!(widget, before);
}

#[tokio::test]
async fn expired_widget_ignores_controls() {
    let source = QueueSource::new(vec![item(2)]);
    let mut widget = RatingWidget::new(item(1), Some(OWNER));

    assert!(widget.expire());
    assert!(!widget.expire());
    assert_eq!(*widget.state(), WidgetState::Expired);

    assert_eq!(widget.choose(ALICE, Choice::Smash), ChooseOutcome::Inactive);
    assert_eq!(
        widget.cycle(OWNER, &source).await.unwrap(),
        CycleOutcome::Inactive
    );
    let reply = dispatch(Control::Pass, &mut widget, BOB, &source)
        .await
        .unwrap();
    assert_eq!(reply, Reply::Ephemeral(EXPIRED_NOTICE.to_string()));
    assert!(widget.smashers().is_empty());
    assert!(widget.passers().is_empty());
    assert_eq!(*widget.current().id(), 1);
}

#[tokio::test]
async fn dispatch_updates_then_acknowledges() {
    let source = QueueSource::new(vec![]);
    let mut widget = RatingWidget::new(item(1), Some(OWNER));

    let first = dispatch(Control::Smash, &mut widget, ALICE, &source)
        .await
        .unwrap();
    assert!(matches!(first, Reply::Update(_)));

    let second = dispatch(Control::Smash, &mut widget, ALICE, &source)
        .await
        .unwrap();
    assert_eq!(second, Reply::Acknowledge);
}

#[tokio::test]
async fn dispatch_pass_moves_voter_out_of_smashers() {
    let source = QueueSource::new(vec![]);
    let mut widget = RatingWidget::new(item(1), Some(OWNER));
    widget.choose(ALICE, Choice::Smash);

    let reply = dispatch(Control::Pass, &mut widget, ALICE, &source)
        .await
        .unwrap();

    let Reply::Update(payload) = reply else {
        panic!("expected an update, got {reply:?}");
    };
    assert!(widget.passers().contains(&ALICE));
    assert!(widget.smashers().is_empty());
    assert!(payload.description().contains("**Passers:** <@10>"));
}

#[tokio::test]
async fn dispatch_owner_cycle_shows_next_item() {
    let source = QueueSource::new(vec![item(2)]);
    let mut widget = RatingWidget::new(item(1), Some(OWNER));
    widget.choose(BOB, Choice::Pass);

    let reply = dispatch(Control::Cycle, &mut widget, OWNER, &source)
        .await
        .unwrap();

    let Reply::Update(payload) = reply else {
        panic!("expected an update, got {reply:?}");
    };
    assert_eq!(*widget.current().id(), 2);
    assert!(widget.passers().is_empty());
    assert_eq!(payload.image_url(), "https://x/2.png");
    assert!(payload.description().contains("[#2](https://src/2)"));
}

#[test]
fn render_lists_one_smasher_and_one_passer() {
    let mut widget = RatingWidget::new(
        Item::new(42, "https://x/42.png", Some("https://src/42".into()), "#336699"),
        Some(OWNER),
    );
    widget.choose(ALICE, Choice::Smash);
    widget.choose(BOB, Choice::Pass);

    let payload = render_widget(&widget);
    let lines: Vec<&str> = payload.description().lines().collect();

    assert_eq!(payload.title(), "Smash or Pass");
    assert_eq!(lines[0], "> [#42](https://src/42)");
    assert!(lines[1].ends_with("**Smashers:** <@10>"));
    assert!(lines[2].ends_with("**Passers:** <@20>"));
    assert_eq!(*payload.accent(), Some(0x336699));
    assert_eq!(payload.image_url(), "https://x/42.png");
}

#[test]
fn render_with_no_votes_leaves_lists_empty() {
    let widget = RatingWidget::new(Item::new(7, "https://x/7.png", None, "nope"), None);

    let payload = render_widget(&widget);
    let lines: Vec<&str> = payload.description().lines().collect();

    assert_eq!(lines[0], "> [#7](https://x/7.png)");
    assert!(lines[1].ends_with("**Smashers:** "));
    assert!(lines[2].ends_with("**Passers:** "));
    assert_eq!(*payload.accent(), None);
}
