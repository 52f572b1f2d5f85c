//! One-shot navigation events.
//!
//! A controller raises an event when its flow completes; the hosting screen
//! takes the single receiver and reacts. Each event is delivered once and
//! never replayed, so a state refresh can't trigger a second transition.

use parking_lot::Mutex;
use tokio::sync::mpsc;

pub struct NavigationSignal<T> {
    tx: mpsc::UnboundedSender<T>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<T>>>,
}

impl<T: Send + 'static> NavigationSignal<T> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(Some(rx)),
        }
    }

    /// Raise an event. Never blocks.
    ///
    /// Events raised before the listener subscribes are buffered. Returns
    /// `false` if the listener is gone and the event was dropped.
    pub fn emit(&self, event: T) -> bool {
        if self.tx.send(event).is_err() {
            tracing::debug!("navigation listener dropped, discarding event");
            return false;
        }
        true
    }

    /// Take the receiving end. Only the first caller gets it.
    pub fn take_receiver(&self) -> Option<mpsc::UnboundedReceiver<T>> {
        self.rx.lock().take()
    }
}

impl<T: Send + 'static> Default for NavigationSignal<T> {
    fn default() -> Self {
        Self::new()
    }
}
