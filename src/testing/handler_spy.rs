use std::{cell::RefCell, rc::Rc};

use crate::{Event, Handler, HandlerId};

/// A spy that records every event delivered to it.
///
/// Register its [`handler`](HandlerSpy::handler) with a dispatcher and
/// assert on what arrived afterwards. The spy and its handler share the
/// recorded events, so the spy observes deliveries made after registration.
///
/// Requires `E: Clone` to keep copies of the delivered events.
pub struct HandlerSpy<E> {
    id: HandlerId,
    records: Rc<RefCell<Vec<E>>>,
}

impl<E: Event + Clone> HandlerSpy<E> {
    pub fn new(id: impl Into<HandlerId>) -> Self {
        Self {
            id: id.into(),
            records: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A handler that records delivered events into this spy.
    ///
    /// Can be called repeatedly; every returned handler has the spy's
    /// identity and feeds the same record.
    pub fn handler(&self) -> Handler<E> {
        let records = self.records.clone();
        Handler::new(self.id.clone(), move |event: &E| {
            records.borrow_mut().push(event.clone())
        })
    }

    /// The identity the spy's handlers are registered under.
    pub fn id(&self) -> &HandlerId {
        &self.id
    }

    /// Number of events delivered so far.
    pub fn count(&self) -> usize {
        self.records.borrow().len()
    }

    /// All delivered events, in delivery order.
    pub fn events(&self) -> Vec<E> {
        self.records.borrow().clone()
    }

    /// The most recently delivered event, if any.
    pub fn last(&self) -> Option<E> {
        self.records.borrow().last().cloned()
    }

    /// Forget everything recorded so far.
    pub fn reset(&self) {
        self.records.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Ping(u32);
    impl Event for Ping {}

    #[test]
    fn test_spy_records_calls() {
        let spy = HandlerSpy::new("spy");
        let handler = spy.handler();
        assert_eq!(spy.count(), 0);
        assert_eq!(spy.last(), None);

        handler.call(&Ping(1));
        handler.call(&Ping(2));
        assert_eq!(spy.count(), 2);
        assert_eq!(spy.events(), [Ping(1), Ping(2)]);
        assert_eq!(spy.last(), Some(Ping(2)));

        spy.reset();
        assert_eq!(spy.count(), 0);
    }

    #[test]
    fn test_handlers_share_the_record() {
        let spy = HandlerSpy::new("spy");
        spy.handler().call(&Ping(1));
        spy.handler().call(&Ping(2));
        assert_eq!(spy.count(), 2);
    }
}
