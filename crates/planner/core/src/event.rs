//! Synchronous change notification.
//!
//! A [`ChangeEvent`] is owned by the object whose state it describes and is
//! shared by reference with every observer. Emission runs each registered
//! listener once, on the caller's turn, before `emit` returns.
//!
//! # Failure policy
//!
//! Listener failures are isolated: a failing listener is logged, the remaining
//! listeners still run, and `emit` reports every failure at the end as
//! [`EmitError::ListenerFailure`].
//!
//! # Reentrancy
//!
//! The listener list is snapshotted when an emission starts. Listeners added
//! during an emission are first called on the next one; listeners removed
//! during an emission are skipped if they have not run yet.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::error::{EmitError, ListenerResult};

/// Handle returned by [`ChangeEvent::subscribe`]; pass it to
/// [`ChangeEvent::unsubscribe`] to deregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Rc<dyn Fn(&T) -> ListenerResult>;

/// A typed publish/subscribe channel. The payload defaults to `()` because
/// most observers only need to know that something changed.
///
/// Not thread-safe; owners are single-threaded configuration objects.
pub struct ChangeEvent<T = ()> {
    name: &'static str,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Listener<T>)>>,
}

impl<T> ChangeEvent<T> {
    /// Creates an event with no listeners. `name` only appears in logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registers an infallible listener.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        self.subscribe_fallible(move |payload| {
            listener(payload);
            Ok(())
        })
    }

    /// Registers a listener whose failure is reported by [`ChangeEvent::emit`].
    pub fn subscribe_fallible<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) -> ListenerResult + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|(existing, _)| *existing == id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Invokes every registered listener once with `payload`.
    pub fn emit(&self, payload: &T) -> Result<(), EmitError> {
        let snapshot: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        tracing::trace!(event = self.name, listeners = snapshot.len(), "emit");

        let mut failures = Vec::new();
        for (id, listener) in snapshot {
            if !self.is_subscribed(id) {
                continue;
            }
            if let Err(error) = listener(payload) {
                tracing::warn!(event = self.name, ?id, %error, "listener failed");
                failures.push(error.to_string());
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(EmitError::ListenerFailure { failures })
        }
    }
}

impl ChangeEvent<()> {
    /// Emits a payload-less change notification.
    pub fn notify(&self) -> Result<(), EmitError> {
        self.emit(&())
    }
}

impl<T> fmt::Debug for ChangeEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeEvent")
            .field("name", &self.name)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listener_fires_once_per_emission() {
        let event = ChangeEvent::new("test");
        let count = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let count = Rc::clone(&count);
            event.subscribe(move |_: &()| count.set(count.get() + 1));
        }

        event.notify().unwrap();
        assert_eq!(count.get(), 3);
        event.notify().unwrap();
        assert_eq!(count.get(), 6);
    }

    #[test]
    fn payload_reaches_listeners() {
        let event = ChangeEvent::<u32>::new("payload");
        let seen = Rc::new(Cell::new(0));

        let sink = Rc::clone(&seen);
        event.subscribe(move |value| sink.set(*value));

        event.emit(&42).unwrap();
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let event = ChangeEvent::new("test");
        let count = Rc::new(Cell::new(0));

        let sink = Rc::clone(&count);
        let id = event.subscribe(move |_: &()| sink.set(sink.get() + 1));

        assert!(event.unsubscribe(id));
        assert!(!event.unsubscribe(id));
        event.notify().unwrap();
        assert_eq!(count.get(), 0);
        assert_eq!(event.listener_count(), 0);
    }

    #[test]
    fn late_subscriber_misses_in_progress_emission() {
        let event = Rc::new(ChangeEvent::new("test"));
        let late_calls = Rc::new(Cell::new(0));

        let weak = Rc::downgrade(&event);
        let sink = Rc::clone(&late_calls);
        let added = Rc::new(Cell::new(false));
        event.subscribe(move |_: &()| {
            if added.replace(true) {
                return;
            }
            if let Some(event) = weak.upgrade() {
                let sink = Rc::clone(&sink);
                event.subscribe(move |_: &()| sink.set(sink.get() + 1));
            }
        });

        event.notify().unwrap();
        assert_eq!(late_calls.get(), 0);
        event.notify().unwrap();
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn failing_listener_does_not_block_the_rest() {
        let event = ChangeEvent::new("test");
        let reached = Rc::new(Cell::new(false));

        event.subscribe_fallible(|_: &()| Err("first broke".into()));
        let sink = Rc::clone(&reached);
        event.subscribe(move |_: &()| sink.set(true));
        event.subscribe_fallible(|_: &()| Err("third broke".into()));

        let result = event.notify();

        assert!(reached.get());
        assert_eq!(
            result,
            Err(EmitError::ListenerFailure {
                failures: vec!["first broke".into(), "third broke".into()],
            })
        );
    }

    #[test]
    fn listener_removed_mid_emission_is_skipped() {
        let event = Rc::new(ChangeEvent::new("test"));
        let second_calls = Rc::new(Cell::new(0));
        let second_id = Rc::new(Cell::new(None));

        let weak = Rc::downgrade(&event);
        let target = Rc::clone(&second_id);
        event.subscribe(move |_: &()| {
            if let (Some(event), Some(id)) = (weak.upgrade(), target.get()) {
                event.unsubscribe(id);
            }
        });
        let sink = Rc::clone(&second_calls);
        second_id.set(Some(event.subscribe(move |_: &()| sink.set(sink.get() + 1))));

        event.notify().unwrap();
        assert_eq!(second_calls.get(), 0);
    }
}
