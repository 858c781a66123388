//! Publish step for external observers.
//!
//! Internal guards read `TrackerState` synchronously; observers that render or
//! react later subscribe here and drain their receiver at their own pace.
//!
//! Publishing always happens under `&mut DragSquareTracker`. The sender list
//! sits behind a lock only so `subscribe` can take `&self`.

use crate::types::{CursorSample, DragEndEvent, DragSquareInfo};
use parking_lot::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerNotification<E> {
    /// A press was registered
    Pressed { press: CursorSample<E> },
    /// The drag square was recomputed
    SquareChanged(DragSquareInfo),
    /// The drag finished; the square has been cleared
    DragEnded(DragEndEvent<E>),
}

pub struct Notifier<E> {
    subscribers: Mutex<Vec<Sender<TrackerNotification<E>>>>,
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<E: Clone> Notifier<E> {
    pub fn subscribe(&self) -> Receiver<TrackerNotification<E>> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Send to every live subscriber, dropping those whose receiver is gone.
    pub fn publish(&self, notification: TrackerNotification<E>) {
        self.subscribers
            .lock()
            .retain(|tx| tx.send(notification.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}
