//! Application Layer
//!
//! Orchestrates the domain stages into a single compile.
//! This layer:
//! - Depends on the Domain layer (entities, services, policies)
//! - Does NOT contain business rules (those are in Domain)
//! - Does no I/O; loading and rendering live in `parser` and `presentation`

pub mod compiler;

pub use compiler::compile_inventory;
