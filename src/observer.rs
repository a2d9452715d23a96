//! Observer pattern: a subject broadcasting to non-owning listener handles.
//!
//! The subject stores weak references only. Observers stay owned by their
//! callers, and an observer whose last owner drops it simply stops receiving
//! updates; the subject forgets the dead handle on the next attach or detach.

use std::cell::Cell;
use std::rc::{Rc, Weak};

/// A listener reacting to subject notifications.
pub trait Observer {
    /// Called once per [`Subject::notify`] while attached.
    fn update(&self);
}

/// Prints a console acknowledgment on every update.
pub struct ConsoleAck;

impl Observer for ConsoleAck {
    fn update(&self) {
        println!("Operation acknowledged.");
    }
}

/// Counts the updates it receives.
#[derive(Default)]
pub struct UpdateCounter {
    hits: Cell<usize>,
}

impl UpdateCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of updates received so far.
    pub fn count(&self) -> usize {
        self.hits.get()
    }
}

impl Observer for UpdateCounter {
    fn update(&self) {
        self.hits.set(self.hits.get() + 1);
    }
}

/// Broadcasts updates to a duplicate-free set of attached observers.
#[derive(Default)]
pub struct Subject {
    observers: Vec<Weak<dyn Observer>>,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an observer without taking ownership of it.
    ///
    /// Observers are identified by pointer, so attaching one that is already
    /// attached is a no-op.
    pub fn attach(&mut self, observer: &Rc<dyn Observer>) {
        self.observers.retain(|handle| handle.strong_count() > 0);
        if !self.holds(observer) {
            self.observers.push(Rc::downgrade(observer));
        }
    }

    /// Detaches an observer. Detaching one that is not attached is a no-op.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        self.observers.retain(|handle| match handle.upgrade() {
            Some(live) => !Rc::ptr_eq(&live, observer),
            None => false,
        });
    }

    /// Notifies every attached observer exactly once, in attach order.
    ///
    /// The live observers are snapshotted before the first `update` call;
    /// attaching and detaching need `&mut self`, so the set cannot change
    /// underneath a running notification.
    pub fn notify(&self) {
        let snapshot: Vec<Rc<dyn Observer>> =
            self.observers.iter().filter_map(Weak::upgrade).collect();
        for observer in snapshot {
            observer.update();
        }
    }

    /// Number of attached observers that are still alive.
    pub fn observer_count(&self) -> usize {
        self.observers
            .iter()
            .filter(|handle| handle.strong_count() > 0)
            .count()
    }

    fn holds(&self, observer: &Rc<dyn Observer>) -> bool {
        self.observers
            .iter()
            .filter_map(Weak::upgrade)
            .any(|live| Rc::ptr_eq(&live, observer))
    }
}

// ============================================================================
// Tests
// ============================================================================
