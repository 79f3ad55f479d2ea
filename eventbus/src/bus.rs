//! Synchronous in-process event dispatch.
//!
//! [`EventBus`] owns a registry mapping event names to ordered sequences of
//! callbacks. Subscribing appends to the sequence for a name, creating it on
//! first use; publishing invokes every callback registered for that name, in
//! registration order, on the calling thread.
//!
//! The bus is a single-threaded structure. It is not `Sync`, and callers
//! that need concurrent access must wrap it in their own synchronization.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::types::EventName;

/// A registered callback: one input by reference, no return value.
type Callback<T> = Box<dyn FnMut(&T)>;

/// A synchronous publish/subscribe dispatcher for payloads of type `T`.
///
/// The registry only grows: there is no unsubscribe operation, and entries
/// live as long as the bus does.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use eventbus::{EventBus, EventName};
///
/// let mut bus = EventBus::new();
/// let event = EventName::try_new("event").unwrap();
///
/// let counter = Rc::new(Cell::new(0_u64));
/// let seen = Rc::clone(&counter);
/// bus.subscribe(event.clone(), move |data: &u64| {
///     seen.set(seen.get() + data);
/// });
///
/// bus.publish(&event, &1);
/// assert_eq!(counter.get(), 1);
/// ```
pub struct EventBus<T> {
    subscribers: HashMap<EventName, Vec<Callback<T>>>,
}

impl<T> EventBus<T> {
    /// Creates an empty bus with no registered subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
        }
    }

    /// Registers `callback` for `event`, creating the event's callback
    /// sequence if this is the first subscription under that name.
    ///
    /// Subscribing never fails. Registering the same closure twice creates
    /// two independent entries, and both fire on every publish.
    pub fn subscribe<F>(&mut self, event: EventName, callback: F)
    where
        F: FnMut(&T) + 'static,
    {
        let callbacks = self.subscribers.entry(event.clone()).or_default();
        callbacks.push(Box::new(callback));
        debug!(event = %event, subscribers = callbacks.len(), "subscriber registered");
    }

    /// Publishes `data` to every callback registered for `event`.
    ///
    /// Callbacks run synchronously on the calling thread, in registration
    /// order, each receiving a reference to `data`. An event with no
    /// subscribers is a no-op, not an error.
    ///
    /// # Panics
    ///
    /// Does not panic itself, but a panic raised by a callback propagates to
    /// the caller and the remaining callbacks of this publish call do not
    /// run.
    pub fn publish(&mut self, event: &EventName, data: &T) {
        let Some(callbacks) = self.subscribers.get_mut(event) else {
            return;
        };
        for callback in &mut *callbacks {
            callback(data);
        }
    }

    /// Returns the number of callbacks registered for `event`.
    #[must_use]
    pub fn subscriber_count(&self, event: &EventName) -> usize {
        self.subscribers.get(event).map_or(0, Vec::len)
    }

    /// Returns the number of distinct event names with at least one
    /// subscription.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` if no subscription has ever been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Callbacks are opaque, so show the registry shape rather than its contents.
impl<T> fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (event, callbacks) in &self.subscribers {
            map.entry(&event.as_ref(), &callbacks.len());
        }
        map.finish()
    }
}
