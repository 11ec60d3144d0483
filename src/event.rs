use std::borrow::Cow;

/// Marker trait for events routed by Framebus.
///
/// Implement this for your event type (often an enum). The dispatcher
/// treats events as opaque records: their payload, if any, is whatever the
/// type carries. Events are immutable once submitted; the dispatcher takes
/// ownership on `queue`/`fire` and hands them to handlers as shared
/// references during delivery.
///
/// No `Send`/`Sync`/`Clone` bounds are required because the dispatcher is
/// strictly single-threaded and delivers by reference.
///
/// # Event Names
///
/// The `name()` method returns a human-readable name for the event, used
/// only for logging. The default implementation returns the full type name
/// via `std::any::type_name`; enum events usually override it to return the
/// variant name.
pub trait Event: 'static {
    /// Returns a human-readable name for this event.
    ///
    /// For enum events, this is typically the variant name (e.g., "Damage").
    /// The default implementation returns the type name via `std::any::type_name`.
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name_is_the_type_path() {
        struct WindowResized;
        impl Event for WindowResized {}

        let name = WindowResized.name();
        assert!(name.ends_with("WindowResized"));
        assert!(name.contains("::"), "default name keeps the module path");
    }

    #[test]
    fn test_name_override_may_compute_per_value() {
        struct KeyPress(char);
        impl Event for KeyPress {
            fn name(&self) -> Cow<'static, str> {
                Cow::Owned(format!("KeyPress({})", self.0))
            }
        }

        assert_eq!(KeyPress('w').name(), "KeyPress(w)");
        assert_eq!(KeyPress('q').name(), "KeyPress(q)");
    }
}
