use crate::{Handler, HandlerId};

/// Ordered collection of handlers registered under one tag.
///
/// Invariant: no id appears more than once. Insertion of an already-present
/// id removes the old entry first, so de-duplication takes precedence over
/// the old entry's slot in the order.
#[derive(Debug)]
pub(crate) struct HandlerSet<E> {
    entries: Vec<Handler<E>>,
}

impl<E> HandlerSet<E> {
    pub fn insert(&mut self, handler: Handler<E>) {
        self.entries.retain(|h| h.id() != handler.id());
        self.entries.push(handler);
    }

    /// Returns true if an entry with the given id was present.
    pub fn remove(&mut self, id: &HandlerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|h| h.id() != id);
        self.entries.len() != before
    }

    /// Stable copy of the current entries, in registration order.
    ///
    /// Delivery iterates a snapshot so that handlers may register or remove
    /// entries for the same tag without disturbing the in-flight iteration.
    pub fn snapshot(&self) -> Vec<Handler<E>> {
        self.entries.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<E> Default for HandlerSet<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Event;

    struct TestEvent;
    impl Event for TestEvent {}

    fn handler(id: &str) -> Handler<TestEvent> {
        Handler::new(id, |_| {})
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut set = HandlerSet::default();
        set.insert(handler("a"));
        set.insert(handler("b"));
        set.insert(handler("c"));
        let ids: Vec<_> = set.snapshot().iter().map(|h| h.id().to_string()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_insert_deduplicates_by_id() {
        let mut set = HandlerSet::default();
        set.insert(handler("a"));
        set.insert(handler("b"));
        set.insert(handler("a"));
        assert_eq!(set.len(), 2);
        // re-registration takes the newest slot
        let ids: Vec<_> = set.snapshot().iter().map(|h| h.id().to_string()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_remove() {
        let mut set = HandlerSet::default();
        set.insert(handler("a"));
        assert!(set.remove(&"a".into()));
        assert!(set.is_empty());
        assert!(!set.remove(&"a".into()));
        assert!(!set.remove(&"never-registered".into()));
    }

    #[test]
    fn test_snapshot_is_stable_under_mutation() {
        let mut set = HandlerSet::default();
        set.insert(handler("a"));
        set.insert(handler("b"));
        let snapshot = set.snapshot();
        set.remove(&"a".into());
        set.insert(handler("c"));
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id().name(), "a");
    }
}
