//! Actor+Relay dataflow primitives.
//!
//! All domain state lives in Actors; UI emits events through Relays.
//! `Atom` wraps both for simple local UI state.

mod actor;
mod atom;
mod relay;

pub use actor::Actor;
pub use atom::Atom;
pub use relay::{Relay, RelayError, relay};
