//! Domain Layer
//!
//! Pure inventory compilation logic, no I/O.
//!
//! ## Structure
//!
//! - `entities/` - Group, Registry, Inventory
//! - `value_objects/` - HostSpec, ParsedHost, HostVars
//! - `services/` - HostNamer and the compile stages
//! - `policies/` - Variable merge law

pub mod entities;
pub mod policies;
pub mod services;
pub mod value_objects;
