use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use indexmap::IndexMap;

use super::{ObserverConnection, ResizeCallback, ViewportResizeSource};

type ListenerTable = RefCell<IndexMap<u64, ResizeCallback>>;

/// In-process viewport resize source for headless hosts and tests.
///
/// Clones share the same listener table, so a host keeps one clone to
/// [`trigger`](Self::trigger) while the adapter owns another.
#[derive(Clone, Default)]
pub struct ManualResizeSource {
    listeners: Rc<ListenerTable>,
    next_id: Rc<Cell<u64>>,
}

impl ManualResizeSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Delivers one resize event to every listener attached right now.
    pub fn trigger(&self) {
        // Listeners may detach or attach while being notified.
        let callbacks: Vec<ResizeCallback> = self.listeners.borrow().values().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl ViewportResizeSource for ManualResizeSource {
    fn listen(&self, on_resize: ResizeCallback) -> Box<dyn ObserverConnection> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().insert(id, on_resize);
        Box::new(ManualConnection {
            listeners: Rc::downgrade(&self.listeners),
            id: Some(id),
        })
    }
}

struct ManualConnection {
    listeners: Weak<ListenerTable>,
    id: Option<u64>,
}

impl ObserverConnection for ManualConnection {
    fn disconnect(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().shift_remove(&id);
        }
    }
}
