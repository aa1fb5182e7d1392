//! Value Objects
//!
//! Immutable types with no identity of their own.
//! - `HostSpec` - One entry of an environment's host list
//! - `ParsedHost` - A host spec plus its naming context
//! - `HostVars` - The global host variable table

mod host_spec;

use indexmap::IndexMap;
use serde_yaml_ng::Mapping;

pub use host_spec::{HostRecord, HostSpec, ParsedHost, ANSIBLE_HOST_KEY, GROUPS_KEY, NAME_KEY};

/// Host name → host vars, in registration order
pub type HostVars = IndexMap<String, Mapping>;
