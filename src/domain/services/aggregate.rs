//! Aggregate group
//!
//! `all-projects` always has exactly the top-level projects as children. User
//! vars and extra attributes declared for it survive; user children do not.

use crate::domain::entities::Registry;

/// Name of the synthesized group spanning every project
pub const AGGREGATE_GROUP: &str = "all-projects";

pub fn finalize_aggregate(project_names: &[String], registry: &mut Registry) {
    registry.set_children(AGGREGATE_GROUP, project_names.iter().cloned());
}
