//! Live widgets keyed by their message, plus the inactivity timer.

use lagrange_core::RatingWidget;
use parking_lot::Mutex;
use serenity::model::id::MessageId;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info};

/// Inactivity period after which a widget detaches its controls.
pub const DEFAULT_WIDGET_TIMEOUT: Duration = Duration::from_secs(500);

/// A widget plus the time it was last interacted with.
#[derive(Debug)]
pub struct WidgetEntry {
    widget: RatingWidget,
    last_activity: Instant,
}

impl WidgetEntry {
    fn new(widget: RatingWidget) -> Self {
        Self {
            widget,
            last_activity: Instant::now(),
        }
    }

    /// The widget.
    pub fn widget(&self) -> &RatingWidget {
        &self.widget
    }

    /// The widget, mutably.
    pub fn widget_mut(&mut self) -> &mut RatingWidget {
        &mut self.widget
    }

    /// Restarts the inactivity period.
    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    /// When the last interaction happened.
    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }
}

/// A widget shared between its interaction handlers and its timer.
///
/// Handlers hold the lock for the whole interaction, so events on one widget
/// run one after another.
pub type SharedWidget = Arc<tokio::sync::Mutex<WidgetEntry>>;

/// All widgets that still have controls attached.
#[derive(Debug, Clone)]
pub struct WidgetRegistry {
    widgets: Arc<Mutex<HashMap<MessageId, SharedWidget>>>,
    timeout: Duration,
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_WIDGET_TIMEOUT)
    }
}

impl WidgetRegistry {
    /// Creates an empty registry whose widgets expire after `timeout` of inactivity.
    pub fn new(timeout: Duration) -> Self {
        Self {
            widgets: Arc::new(Mutex::new(HashMap::new())),
            timeout,
        }
    }

    /// Inactivity period.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Registers `widget` for `message_id`, replacing any previous one.
    pub fn insert(&self, message_id: MessageId, widget: RatingWidget) -> SharedWidget {
        let entry = Arc::new(tokio::sync::Mutex::new(WidgetEntry::new(widget)));
        self.widgets.lock().insert(message_id, Arc::clone(&entry));
        debug!(message_id = %message_id, "Widget registered");
        entry
    }

    /// The widget for `message_id`, if it is still live.
    pub fn get(&self, message_id: MessageId) -> Option<SharedWidget> {
        self.widgets.lock().get(&message_id).cloned()
    }

    /// Drops the widget for `message_id`.
    pub fn remove(&self, message_id: MessageId) -> Option<SharedWidget> {
        self.widgets.lock().remove(&message_id)
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.widgets.lock().len()
    }

    /// Whether no widget is live.
    pub fn is_empty(&self) -> bool {
        self.widgets.lock().is_empty()
    }

    /// Spawns the inactivity timer for `message_id`.
    ///
    /// Once the widget has gone `timeout` without a [`touch`](WidgetEntry::touch),
    /// it is marked expired, removed from the registry and `on_expire` runs
    /// once. The timer waits for the widget lock, so an in-flight interaction
    /// finishes first and restarts the period.
    pub fn watch<F, Fut>(&self, message_id: MessageId, on_expire: F) -> JoinHandle<()>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let registry = self.clone();
        tokio::spawn(async move {
            loop {
                let Some(entry) = registry.get(message_id) else {
                    debug!(message_id = %message_id, "Widget gone before timeout");
                    return;
                };

                let mut guard = entry.lock().await;
                let deadline = guard.last_activity() + registry.timeout;
                if Instant::now() < deadline {
                    drop(guard);
                    sleep_until(deadline).await;
                    continue;
                }

                let expired = guard.widget_mut().expire();
                drop(guard);
                registry.remove(message_id);

                if expired {
                    info!(message_id = %message_id, "Widget timed out");
                    on_expire().await;
                }
                return;
            }
        })
    }
}
