//! # Listener Registry
//!
//! Minimal single-threaded observer plumbing shared by the session store and
//! the in-memory navigator.
//!
//! Registering a listener returns a [`Subscription`]; dropping it unregisters
//! the listener. Emission never holds a borrow of the registry while a
//! listener runs, so listeners may subscribe, unsubscribe or trigger further
//! emissions from inside the callback. [`OrderedEmitter`] additionally queues
//! such nested emissions so every listener sees values in publish order.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T: ?Sized> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

/// Ordered set of listeners for values of type `T`.
pub struct Listeners<T: ?Sized> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: ?Sized> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T: ?Sized + 'static> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> Listeners<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register `listener`. It stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn add(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.push((id, Rc::new(listener)));
            id
        };

        let registry = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().entries.retain(|(entry, _)| *entry != id);
            }
        })
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `value` to every listener registered when the call starts.
    ///
    /// A listener unregistered by an earlier listener during the same pass
    /// is skipped. Listeners added during the pass are not called.
    pub fn emit(&self, value: &T) {
        let ids: Vec<u64> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(id, _)| *id)
            .collect();

        for id in ids {
            let listener = self
                .registry
                .borrow()
                .entries
                .iter()
                .find(|(entry, _)| *entry == id)
                .map(|(_, listener)| Rc::clone(listener));

            if let Some(listener) = listener {
                listener(value);
            }
        }
    }
}

/// [`Listeners`] plus a queue: values published from inside a listener are
/// delivered after the current value has reached every listener.
pub struct OrderedEmitter<T> {
    listeners: Listeners<T>,
    queue: RefCell<VecDeque<T>>,
    draining: Cell<bool>,
}

impl<T: 'static> Default for OrderedEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> OrderedEmitter<T> {
    pub fn new() -> Self {
        Self {
            listeners: Listeners::new(),
            queue: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
        }
    }

    pub fn add(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        self.listeners.add(listener)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn publish(&self, value: T) {
        self.queue.borrow_mut().push_back(value);
        if self.draining.replace(true) {
            return;
        }

        loop {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(value) => self.listeners.emit(&value),
                None => break,
            }
        }
        self.draining.set(false);
    }
}

/// Scoped registration handle. Dropping it unregisters the listener.
#[must_use = "dropping a Subscription unregisters its listener immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a cancellation callback run exactly once on drop.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unregister now. Same as dropping the handle.
    pub fn unsubscribe(self) {}

    /// Keep the listener registered for the lifetime of its source.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
