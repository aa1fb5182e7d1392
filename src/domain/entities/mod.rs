//! Domain Entities
//!
//! - `Group` - A named collection of hosts, children, vars and extra attributes
//! - `Registry` - The group graph being built, with duplicate-host bookkeeping
//! - `Inventory` - The compiled graph plus the host variable table

mod group;
mod inventory;
mod registry;

pub use group::{Group, CHILDREN_ATTR, HOSTS_ATTR, STANDARD_ATTRS, VARS_ATTR};
pub use inventory::{Inventory, META_KEY};
pub use registry::{DuplicateHost, Registry};
