use std::hash::Hash;

use crate::event::Event;

/// Maps events to routing tags.
///
/// Implement this for your own tag type (usually an enum) to classify
/// events for the dispatcher. Handlers register under one tag, and the
/// dispatcher delivers each event to the handler set of its tag.
///
/// Any equality-comparable, hashable value is a valid tag: enums, strings,
/// structs. Tags must be `Clone` because the dispatcher derives a fresh tag
/// from every delivered event.
///
/// Common patterns:
/// - Enum tags for simple classification.
/// - Struct tags when you need richer keys (e.g., names or IDs).
pub trait Tag<E: Event>: Hash + PartialEq + Eq + Clone + 'static {
    fn from_event(event: &E) -> Self
    where
        Self: Sized;
}

/// Default tag for simple systems that don't need tag-based routing.
///
/// Use `DefaultTag` when you don't need per-category filtering and want
/// every handler to receive every event. This is the simplest routing
/// strategy, acting as an identity/unit key for the tag system.
///
/// # Examples
///
/// ```rust, ignore
/// use framebus::{Dispatcher, DefaultTag, Handler};
/// let bus = Dispatcher::<MyEvent>::new();
/// bus.register(DefaultTag, Handler::new("logger", |e| println!("{e:?}")));
/// ```
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct DefaultTag;

impl<E: Event> Tag<E> for DefaultTag {
    fn from_event(_event: &E) -> DefaultTag {
        DefaultTag
    }
}

impl std::fmt::Display for DefaultTag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "default")
    }
}

/// Marker for event types that act as their own tag.
///
/// Useful for fieldless enum events where every variant is its own
/// category: derive `Hash`/`Eq`/`Clone` on the event and it can be used
/// directly as the registration key.
pub trait IdentityTag {}

impl<E: Event + IdentityTag + Eq + Hash + Clone> Tag<E> for E {
    fn from_event(event: &E) -> Self {
        event.clone()
    }
}
