//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod message_role;

pub use message_role::*;
