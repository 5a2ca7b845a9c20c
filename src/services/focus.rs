//! Shared focus-distance cell.
//!
//! The table, chart, and map all highlight the row under the cursor. The
//! hovered distance lives in one observable cell owned by the view
//! composition: hover handlers are the single writer, the three views read
//! or subscribe. Cloning the handle shares the underlying cell.

use parking_lot::RwLock;
use std::sync::Arc;

type Subscriber = Box<dyn Fn(Option<u32>) + Send + Sync>;

/// Observable cell holding the currently hovered distance, if any.
#[derive(Clone, Default)]
pub struct FocusCell {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    distance: RwLock<Option<u32>>,
    subscribers: RwLock<Vec<Subscriber>>,
}

impl FocusCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently focused distance.
    pub fn get(&self) -> Option<u32> {
        *self.inner.distance.read()
    }

    /// Set the focused distance, notifying subscribers when it changes.
    pub fn set(&self, distance: Option<u32>) {
        {
            let mut current = self.inner.distance.write();
            if *current == distance {
                return;
            }
            *current = distance;
        }
        for subscriber in self.inner.subscribers.read().iter() {
            subscriber(distance);
        }
    }

    /// Clear the focus, e.g. when the cursor leaves all three views.
    pub fn clear(&self) {
        self.set(None);
    }

    /// Register a callback invoked with the new value on every change.
    pub fn subscribe(&self, callback: impl Fn(Option<u32>) + Send + Sync + 'static) {
        self.inner.subscribers.write().push(Box::new(callback));
    }
}
