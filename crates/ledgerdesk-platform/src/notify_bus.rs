use anyhow::Result;
use ledgerdesk_core::{Notification, NotificationLevel};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

pub const DEFAULT_CAPACITY: usize = 64;

/// In-process pub/sub for user-facing notifications. Hand a clone to whatever
/// needs to publish or listen.
#[derive(Clone)]
pub struct NotificationBus {
    sender: broadcast::Sender<Notification>,
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl NotificationBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Publishes and returns how many subscribers received it. Zero listeners
    /// is fine.
    pub fn publish(&self, notification: Notification) -> usize {
        match notification.level {
            NotificationLevel::Error => error!(
                topic = %notification.topic,
                "{}", notification.message
            ),
            NotificationLevel::Warning => warn!(
                topic = %notification.topic,
                "{}", notification.message
            ),
            NotificationLevel::Info | NotificationLevel::Success => info!(
                topic = %notification.topic,
                "{}", notification.message
            ),
        }

        self.sender.send(notification).unwrap_or(0)
    }

    pub fn publish_json<T: Serialize>(
        &self,
        topic: &str,
        level: NotificationLevel,
        message: impl Into<String>,
        payload: &T,
    ) -> Result<usize> {
        let payload = serde_json::to_value(payload)?;
        Ok(self.publish(Notification::new(topic, level, message).with_payload(payload)))
    }

    pub fn success(&self, topic: &str, message: impl Into<String>) -> usize {
        self.publish(Notification::new(topic, NotificationLevel::Success, message))
    }

    pub fn failure(&self, topic: &str, message: impl Into<String>) -> usize {
        self.publish(Notification::new(topic, NotificationLevel::Error, message))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn publishing_without_listeners_is_not_an_error() {
        let bus = NotificationBus::default();
        assert_eq!(bus.success("receivables.saved", "saved"), 0);
    }

    #[tokio::test]
    async fn subscribers_receive_payloads() {
        let bus = NotificationBus::new(8);
        let mut first = bus.subscribe();
        let mut second = bus.clone().subscribe();

        let delivered = bus
            .publish_json(
                "safes.transfer",
                NotificationLevel::Success,
                "transfer completed",
                &json!({ "amount": "250.00" }),
            )
            .unwrap();
        assert_eq!(delivered, 2);

        let got = first.recv().await.unwrap();
        assert_eq!(got.topic, "safes.transfer");
        assert_eq!(got.level, NotificationLevel::Success);
        assert_eq!(got.payload["amount"], "250.00");
        assert_eq!(second.recv().await.unwrap().id, got.id);
    }
}
