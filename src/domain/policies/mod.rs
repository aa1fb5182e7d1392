//! Domain Policies
//!
//! Business rules shared by several services.
//! - `merge` - How group vars combine when written more than once

pub mod merge;

pub use merge::{deep_merge, merged};
