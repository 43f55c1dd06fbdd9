//! Service Ports
//!
//! Abstract interfaces for external services.

mod completion_provider;

pub use completion_provider::*;
