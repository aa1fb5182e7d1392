//! Domain Services
//!
//! The compile stages, in pipeline order:
//! - `ProjectCompiler` - projects → hosts and standard groups (uses `HostNamer`)
//! - `augment_groups` - the supplementary `groups` section
//! - `finalize_aggregate` - the `all-projects` group

mod aggregate;
mod group_augmenter;
mod host_namer;
mod project_compiler;

pub use aggregate::{finalize_aggregate, AGGREGATE_GROUP};
pub use group_augmenter::{augment_group, augment_groups};
pub use host_namer::HostNamer;
pub use project_compiler::{ProjectCompiler, PROJECT_VAR};
