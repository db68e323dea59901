//! Per-subscriber delivery of share events.
//!
//! Each subscriber owns an unbounded queue, so a slow reader never loses
//! the outcome of an operation that completed. Queues whose receiver was
//! dropped are pruned on the next publish.

use std::sync::Mutex;

use tokio::sync::mpsc;

use super::event::ShareEvent;

/// Fans every published event out to all live subscribers.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<ShareEvent>>>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. It receives every event published from now on.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<ShareEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        rx
    }

    /// Deliver `event` to every live subscriber and return how many got it.
    pub fn publish(&self, event: ShareEvent) -> usize {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        subscribers.len()
    }

    /// Number of subscribers still registered.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}
