use std::{ops::Deref, rc::Rc, sync::Arc};

/// A lightweight identity token for a registered handler.
///
/// Handlers have no intrinsic equality in Rust (two closures never compare
/// equal), so registration and removal are keyed by an explicit id instead.
/// Two ids constructed from the same string are the same identity, so a
/// subsystem can remove its handler without holding on to the original
/// [`Handler`] value:
///
/// ```ignore
/// bus.register(GameTag::Combat, Handler::new("hud", |e| { /* ... */ }));
/// // later, possibly elsewhere:
/// bus.remove(&GameTag::Combat, &HandlerId::from("hud"));
/// ```
///
/// Ids are cheap to clone and can be stored for later use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerId(Arc<str>);

impl HandlerId {
    /// Returns the handler's name as given at registration.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HandlerId {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for HandlerId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl std::fmt::Display for HandlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for HandlerId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A subscriber callback with an identity.
///
/// The callback takes the delivered event by shared reference and returns
/// nothing; handlers exist for their side effects. Mutable state lives in
/// the closure's captures (typically behind `Rc<RefCell<_>>`, since the
/// callback is shared between the registry and in-flight delivery
/// snapshots).
///
/// Cloning a `Handler` shares the callback; the clone has the same
/// identity.
pub struct Handler<E> {
    id: HandlerId,
    callback: Rc<dyn Fn(&E)>,
}

impl<E> Handler<E> {
    pub fn new(id: impl Into<HandlerId>, callback: impl Fn(&E) + 'static) -> Self {
        Self {
            id: id.into(),
            callback: Rc::new(callback),
        }
    }

    /// The identity this handler was registered under.
    #[inline]
    pub fn id(&self) -> &HandlerId {
        &self.id
    }

    pub(crate) fn call(&self, event: &E) {
        (self.callback)(event)
    }
}

impl<E> Clone for Handler<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            callback: self.callback.clone(),
        }
    }
}

impl<E> PartialEq for Handler<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E> Eq for Handler<E> {}

impl<E> std::fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::Event;

    #[derive(Debug)]
    struct TestEvent(u32);
    impl Event for TestEvent {}

    #[test]
    fn test_id_equality_is_by_value() {
        assert_eq!(HandlerId::from("hud"), HandlerId::from("hud"));
        assert_ne!(HandlerId::from("hud"), HandlerId::from("audio"));
        assert_eq!(HandlerId::from("hud").name(), "hud");
    }

    #[test]
    fn test_handler_identity_ignores_callback() {
        let a = Handler::<TestEvent>::new("same", |_| {});
        let b = Handler::<TestEvent>::new("same", |_| panic!("never called"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_id_needs_no_event_bound() {
        // HandlerSet<E> is unbounded and keys its entries by id
        fn id_name<E>(handler: &Handler<E>) -> String {
            handler.id().to_string()
        }
        let handler = Handler::<TestEvent>::new("hud", |_| {});
        assert_eq!(id_name(&handler), "hud");
    }

    #[test]
    fn test_clone_shares_callback() {
        let count = Rc::new(Cell::new(0));
        let handler = Handler::new("counter", {
            let count = count.clone();
            move |e: &TestEvent| count.set(count.get() + e.0)
        });
        let clone = handler.clone();
        handler.call(&TestEvent(1));
        clone.call(&TestEvent(2));
        assert_eq!(count.get(), 3);
        assert_eq!(handler, clone);
    }
}
