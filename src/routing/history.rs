//! In-memory navigation history with change notifications.
//!
//! [`History`] is a cheap-to-clone handle onto a single history stack. Any
//! component can observe location changes through [`History::listen`]; the
//! returned [`Subscription`] keeps the listener registered until it is
//! dropped.

use super::location::Location;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use thiserror::Error;

type ListenerFn = Rc<RefCell<dyn FnMut(&Location)>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("no earlier history entry")]
    AtStart,

    #[error("no later history entry")]
    AtEnd,
}

struct Listener {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: ListenerFn,
}

struct HistoryInner {
    entries: Vec<Location>,
    index: usize,
    listeners: Vec<Listener>,
    next_listener_id: u64,
}

/// Navigation stack shared by the app shell and its components
#[derive(Clone)]
pub struct History {
    inner: Rc<RefCell<HistoryInner>>,
}

/// Registration handle returned by [`History::listen`].
///
/// Dropping it (or calling [`Subscription::unsubscribe`]) removes the
/// listener. Once released the listener never runs again, even for a
/// notification that was already being delivered.
pub struct Subscription {
    id: u64,
    active: Rc<Cell<bool>>,
    history: Weak<RefCell<HistoryInner>>,
}

impl History {
    pub fn new(initial: impl Into<Location>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HistoryInner {
                entries: vec![initial.into()],
                index: 0,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    /// Current location
    pub fn location(&self) -> Location {
        let inner = self.inner.borrow();
        inner.entries[inner.index].clone()
    }

    /// Navigate to `target`, discarding any forward entries
    pub fn push(&self, target: impl Into<Location>) {
        let location = target.into();
        {
            let mut inner = self.inner.borrow_mut();
            let keep = inner.index + 1;
            inner.entries.truncate(keep);
            inner.entries.push(location.clone());
            inner.index += 1;
        }
        log::debug!("history: push {}", location);
        self.notify(&location);
    }

    /// Replace the current entry with `target`
    pub fn replace(&self, target: impl Into<Location>) {
        let location = target.into();
        {
            let mut inner = self.inner.borrow_mut();
            let index = inner.index;
            inner.entries[index] = location.clone();
        }
        log::debug!("history: replace {}", location);
        self.notify(&location);
    }

    pub fn back(&self) -> Result<(), HistoryError> {
        let location = {
            let mut inner = self.inner.borrow_mut();
            if inner.index == 0 {
                return Err(HistoryError::AtStart);
            }
            inner.index -= 1;
            inner.entries[inner.index].clone()
        };
        log::debug!("history: back to {}", location);
        self.notify(&location);
        Ok(())
    }

    pub fn forward(&self) -> Result<(), HistoryError> {
        let location = {
            let mut inner = self.inner.borrow_mut();
            if inner.index + 1 >= inner.entries.len() {
                return Err(HistoryError::AtEnd);
            }
            inner.index += 1;
            inner.entries[inner.index].clone()
        };
        log::debug!("history: forward to {}", location);
        self.notify(&location);
        Ok(())
    }

    pub fn can_go_back(&self) -> bool {
        self.inner.borrow().index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        let inner = self.inner.borrow();
        inner.index + 1 < inner.entries.len()
    }

    /// Register `callback` for every future location change
    pub fn listen<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&Location) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        inner.listeners.retain(|listener| listener.active.get());
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;

        let active = Rc::new(Cell::new(true));
        inner.listeners.push(Listener {
            id,
            active: Rc::clone(&active),
            callback: Rc::new(RefCell::new(callback)),
        });

        Subscription {
            id,
            active,
            history: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|listener| listener.active.get())
            .count()
    }

    fn notify(&self, location: &Location) {
        // Snapshot first so listeners may navigate or unsubscribe while running
        let targets: Vec<(Rc<Cell<bool>>, ListenerFn)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|listener| (Rc::clone(&listener.active), Rc::clone(&listener.callback)))
            .collect();

        for (active, callback) in targets {
            if !active.get() {
                continue;
            }
            match callback.try_borrow_mut() {
                Ok(mut callback) => (*callback)(location),
                Err(_) => log::warn!("history: dropped nested notification for {}", location),
            }
        }
    }
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Release the listener now rather than at end of scope
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.set(false);
        if let Some(inner) = self.history.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.listeners.retain(|listener| listener.id != self.id);
            }
        }
    }
}
