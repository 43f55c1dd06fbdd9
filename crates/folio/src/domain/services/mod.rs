//! Domain Services
//!
//! Stateless domain logic.

mod prompt_assembler;

pub use prompt_assembler::*;
