//! AlertBus - in-process alert distribution
//!
//! ## Responsibilities
//!
//! - Subscriber registration for the SSE gateway
//! - Fan-out of newly persisted alerts to all connected subscribers
//!
//! The bus holds no history: a subscriber registered after a publish never
//! sees that alert. Catch-up is done by polling `GET /api/alertas`.

use crate::alerta::Alerta;
use tokio::sync::mpsc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Subscriber entry
///
/// Kept in a Vec so delivery follows registration order.
struct Subscriber {
    id: Uuid,
    tx: mpsc::UnboundedSender<Alerta>,
}

/// AlertBus instance
pub struct AlertBus {
    subscribers: RwLock<Vec<Subscriber>>,
}

impl AlertBus {
    /// Create new AlertBus
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Register a new subscriber
    pub async fn subscribe(&self) -> (Uuid, mpsc::UnboundedReceiver<Alerta>) {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();

        {
            let mut subscribers = self.subscribers.write().await;
            subscribers.push(Subscriber { id, tx });
        }

        tracing::info!(subscriber_id = %id, "Alert subscriber connected");

        (id, rx)
    }

    /// Deregister a subscriber
    pub async fn unsubscribe(&self, id: &Uuid) {
        let mut subscribers = self.subscribers.write().await;
        let before = subscribers.len();
        subscribers.retain(|s| s.id != *id);
        if subscribers.len() < before {
            tracing::info!(subscriber_id = %id, "Alert subscriber disconnected");
        }
    }

    /// Publish an alert to all current subscribers, in registration order.
    ///
    /// A subscriber whose channel is gone is skipped and pruned afterwards;
    /// it never blocks delivery to the others.
    pub async fn publish(&self, alerta: &Alerta) {
        let mut dead = Vec::new();

        {
            let subscribers = self.subscribers.read().await;
            tracing::debug!(
                alerta_id = alerta.id,
                subscriber_count = subscribers.len(),
                "Publishing alert"
            );

            for sub in subscribers.iter() {
                if sub.tx.send(alerta.clone()).is_err() {
                    tracing::warn!(subscriber_id = %sub.id, "Failed to deliver alert, dropping subscriber");
                    dead.push(sub.id);
                }
            }
        }

        if !dead.is_empty() {
            let mut subscribers = self.subscribers.write().await;
            subscribers.retain(|s| !dead.contains(&s.id));
        }
    }

    /// Get subscriber count
    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.read().await.len()
    }
}

impl Default for AlertBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_alerta(id: u64) -> Alerta {
        Alerta {
            id,
            colmeia: Some(1),
            nivel: "danger".to_string(),
            mensagem: "Possível predador detectado na entrada da colmeia".to_string(),
            origem: "camera".to_string(),
            reconhecido: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_subscriber_receives_published_alert() {
        let bus = AlertBus::new();
        let (_id, mut rx) = bus.subscribe().await;

        bus.publish(&sample_alerta(1)).await;

        let received = rx.recv().await.unwrap();
        assert_eq!(received.id, 1);
        assert_eq!(received.nivel, "danger");

        // exactly one delivery
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_late_subscriber_sees_nothing() {
        let bus = AlertBus::new();
        bus.publish(&sample_alerta(1)).await;

        let (_id, mut rx) = bus.subscribe().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_delivery() {
        let bus = AlertBus::new();
        let (id, mut rx) = bus.subscribe().await;

        bus.unsubscribe(&id).await;
        assert_eq!(bus.subscriber_count().await, 0);

        bus.publish(&sample_alerta(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_dead_subscriber_does_not_block_others() {
        let bus = AlertBus::new();
        let (_dead_id, dead_rx) = bus.subscribe().await;
        let (_live_id, mut live_rx) = bus.subscribe().await;

        drop(dead_rx);
        bus.publish(&sample_alerta(7)).await;

        assert_eq!(live_rx.recv().await.unwrap().id, 7);
        // the dead entry was pruned during publish
        assert_eq!(bus.subscriber_count().await, 1);
    }

    #[tokio::test]
    async fn test_delivery_in_publish_order() {
        let bus = AlertBus::new();
        let (_id, mut rx) = bus.subscribe().await;

        bus.publish(&sample_alerta(1)).await;
        bus.publish(&sample_alerta(2)).await;
        bus.publish(&sample_alerta(3)).await;

        assert_eq!(rx.recv().await.unwrap().id, 1);
        assert_eq!(rx.recv().await.unwrap().id, 2);
        assert_eq!(rx.recv().await.unwrap().id, 3);
    }
}
