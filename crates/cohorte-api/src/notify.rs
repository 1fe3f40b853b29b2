//! User-facing notifications and catalog change events.
//!
//! The store never reaches for a global toast or event bus; it publishes
//! through whatever [`Notifier`] it was built with.

use cohorte_core::models::question::QuestionId;
use serde::Serialize;
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient message for the user (rendered as a toast by the frontend).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub at: jiff::Timestamp,
}

impl Notification {
    pub fn success(message: &str) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.to_string(),
            at: jiff::Timestamp::now(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.to_string(),
            at: jiff::Timestamp::now(),
        }
    }
}

/// The merged catalog changed; views listing themes should refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEvent {
    Loaded { question_count: usize },
    QuestionAdded { id: QuestionId },
    QuestionDeleted { id: QuestionId },
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum StoreEvent {
    Notification(Notification),
    CatalogChanged(CatalogEvent),
}

pub trait Notifier: Send + Sync {
    fn publish(&self, event: StoreEvent);

    fn notify(&self, notification: Notification) {
        self.publish(StoreEvent::Notification(notification));
    }

    fn catalog_changed(&self, event: CatalogEvent) {
        self.publish(StoreEvent::CatalogChanged(event));
    }
}

/// Fans events out to any number of subscribers. Events published while
/// nobody is subscribed are dropped.
#[derive(Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<StoreEvent>,
}

impl BroadcastNotifier {
    /// `capacity` is the number of events a slow subscriber may lag behind;
    /// it is at least 1.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Notifier for BroadcastNotifier {
    fn publish(&self, event: StoreEvent) {
        let _ = self.sender.send(event);
    }
}

/// Writes events to the log. Used where there is no UI to show toasts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn publish(&self, event: StoreEvent) {
        match event {
            StoreEvent::Notification(n) => match n.level {
                NotificationLevel::Success => tracing::info!(text = %n.message, "notification"),
                NotificationLevel::Error => tracing::warn!(text = %n.message, "notification"),
            },
            StoreEvent::CatalogChanged(e) => tracing::debug!(event = ?e, "catalog changed"),
        }
    }
}
