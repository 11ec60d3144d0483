use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
};

use tracing::trace;

use crate::{DefaultTag, Event, Handler, HandlerId, Tag, internal::HandlerSet};

/// Routes events to registered handlers under two delivery disciplines.
///
/// - [`fire`](Dispatcher::fire) delivers an event synchronously, before the
///   call returns.
/// - [`queue`](Dispatcher::queue) defers an event until the next call to
///   [`process_events`](Dispatcher::process_events), which the host loop
///   makes exactly once per cycle (e.g., once per frame).
///
/// `process_events` drains only the events that were pending when it was
/// called: events queued by handlers *during* the drain wait for the next
/// cycle. A chain of N events each queuing a follow-up therefore takes N
/// cycles to resolve, and a single cycle's event volume is always bounded
/// by what was queued before it began.
///
/// All operations take `&self` and run to completion synchronously, so
/// handlers may re-enter the dispatcher (register, remove, queue, or fire)
/// from inside a delivery. Delivery iterates a snapshot of the tag's handler
/// list, so registry changes made by a handler only affect subsequent
/// deliveries. The dispatcher is single-threaded by construction (`Rc`,
/// `RefCell`); share it within one thread as `Rc<Dispatcher<..>>`.
///
/// Every operation is infallible: firing or queuing an event whose tag has
/// no handlers is a silent no-op, as is removing a handler that was never
/// registered. Handler panics are not caught and propagate to the caller of
/// `fire`/`process_events`.
///
/// Prefer passing a dispatcher explicitly to the subsystems that need it
/// over ambient global state; independent subsystems can own independent
/// dispatchers.
pub struct Dispatcher<E: Event, T: Tag<E> = DefaultTag> {
    registry: RefCell<HashMap<T, HandlerSet<E>>>,
    pending: RefCell<VecDeque<E>>,
}

impl<E: Event, T: Tag<E>> Dispatcher<E, T> {
    /// Create a dispatcher with an empty registry and an empty queue.
    pub fn new() -> Self {
        Self {
            registry: RefCell::new(HashMap::new()),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    /// Add `handler` to the handler set for `tag`.
    ///
    /// Registration order is delivery order. If a handler with the same
    /// identity is already registered for this tag it is replaced: the old
    /// entry is removed and the new one appended. A handler is invoked
    /// at most once per delivered event. Re-registration is not an error.
    pub fn register(&self, tag: T, handler: Handler<E>) {
        trace!(handler = %handler.id(), "registering handler");
        self.registry
            .borrow_mut()
            .entry(tag)
            .or_default()
            .insert(handler);
    }

    /// Remove the handler with identity `id` from `tag`'s handler set.
    ///
    /// A no-op when the tag has no handlers or the id was never registered.
    /// Removal from within a handler takes effect from the next delivery;
    /// it never disturbs an in-flight one.
    pub fn remove(&self, tag: &T, id: &HandlerId) {
        let mut registry = self.registry.borrow_mut();
        let now_empty = match registry.get_mut(tag) {
            Some(set) => {
                if set.remove(id) {
                    trace!(handler = %id, "removed handler");
                }
                set.is_empty()
            }
            None => return,
        };
        if now_empty {
            registry.remove(tag);
        }
    }

    /// Append `event` to the pending queue for deferred delivery.
    ///
    /// Always returns immediately; handlers run no earlier than the next
    /// call to [`process_events`](Dispatcher::process_events).
    pub fn queue(&self, event: E) {
        trace!(event = %event.name(), "queued event");
        self.pending.borrow_mut().push_back(event);
    }

    /// Deliver `event` synchronously to every handler registered for its
    /// tag, in registration order.
    ///
    /// Zero registered handlers is a silent no-op. Events queued by handlers
    /// during this call are deferred, not delivered within it.
    pub fn fire(&self, event: E) {
        trace!(event = %event.name(), "firing event");
        self.deliver(&event);
    }

    /// Drain the events queued before this call, delivering each in FIFO
    /// order via the same path as [`fire`](Dispatcher::fire).
    ///
    /// The pending queue is swapped for an empty one up front, so `queue`
    /// calls made by handlers land in the new queue and wait for the next
    /// cycle. The host loop calls this exactly once per cycle; cadence is
    /// the host's responsibility.
    pub fn process_events(&self) {
        let batch = self.pending.take();
        if batch.is_empty() {
            return;
        }
        trace!(batch_size = batch.len(), "processing deferred events");
        for event in batch {
            self.deliver(&event);
        }
    }

    /// Number of events currently awaiting the next cycle.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    fn deliver(&self, event: &E) {
        // Snapshot before invoking: the registry borrow must not be held
        // while handlers run, and reentrant register/remove must not affect
        // this delivery.
        let handlers = match self.registry.borrow().get(&T::from_event(event)) {
            Some(set) => set.snapshot(),
            None => return,
        };
        for handler in &handlers {
            trace!(event = %event.name(), handler = %handler.id(), "delivering");
            handler.call(event);
        }
    }
}

impl<E: Event, T: Tag<E>> Default for Dispatcher<E, T> {
    fn default() -> Self {
        Self::new()
    }
}
