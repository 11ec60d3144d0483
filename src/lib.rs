//! Framebus - Synchronous per-cycle event dispatch
//!
//! A tiny event dispatcher for tick-driven hosts (game loops, simulation
//! steps), designed for loosely-coupled communication between subsystems
//! that all run on one logical thread.
//!
//! Producers hand events to a [`Dispatcher`] either for *immediate*
//! delivery ([`Dispatcher::fire`]) or *deferred* delivery
//! ([`Dispatcher::queue`]); the host drains deferred events exactly once
//! per cycle with [`Dispatcher::process_events`]. Events queued by handlers
//! during a cycle always wait for the next one, so an event cascade can
//! never starve the host loop.
//!
//! See `demos/game_loop.rs` and `demos/cascade.rs`.

mod dispatcher;
mod event;
mod handler;
mod tag;

mod internal;

#[cfg(feature = "testing")]
pub mod testing;

pub use dispatcher::Dispatcher;
pub use event::Event;
pub use handler::{Handler, HandlerId};
pub use tag::{DefaultTag, IdentityTag, Tag};
