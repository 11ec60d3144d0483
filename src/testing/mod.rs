//! Test doubles for asserting on event flow.
//!
//! Enabled by the default `testing` feature; disable default features in
//! production builds that don't want the extra surface:
//!
//! ```toml
//! [dependencies]
//! framebus = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```ignore
//! let bus = Dispatcher::<GameEvent, GameTag>::new();
//! let spy = HandlerSpy::new("hud");
//! bus.register(GameTag::Combat, spy.handler());
//!
//! bus.queue(GameEvent::Damage(10));
//! bus.process_events();
//!
//! assert_eq!(spy.count(), 1);
//! assert_eq!(spy.last(), Some(GameEvent::Damage(10)));
//! ```

mod handler_spy;

pub use handler_spy::HandlerSpy;
