//! Group entity

use indexmap::{IndexMap, IndexSet};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml_ng::{Mapping, Value};

/// Standard group attribute: member hosts
pub const HOSTS_ATTR: &str = "hosts";
/// Standard group attribute: child groups
pub const CHILDREN_ATTR: &str = "children";
/// Standard group attribute: group vars
pub const VARS_ATTR: &str = "vars";

/// Attributes with merge semantics; anything else is a pass-through extra
pub const STANDARD_ATTRS: [&str; 3] = [HOSTS_ATTR, CHILDREN_ATTR, VARS_ATTR];

/// A named, addressable collection of hosts, child groups and vars.
///
/// Hosts and children are sets; insertion order is kept only so output is reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub hosts: IndexSet<String>,
    pub children: IndexSet<String>,
    pub vars: Mapping,
    /// Opaque attributes for downstream tooling, copied verbatim
    pub extra: IndexMap<String, Value>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_host(&self, host: &str) -> bool {
        self.hosts.contains(host)
    }

    pub fn has_child(&self, child: &str) -> bool {
        self.children.contains(child)
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
            && self.children.is_empty()
            && self.vars.is_empty()
            && self.extra.is_empty()
    }
}

impl Serialize for Group {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if !self.hosts.is_empty() {
            map.serialize_entry(HOSTS_ATTR, &self.hosts)?;
        }
        if !self.children.is_empty() {
            map.serialize_entry(CHILDREN_ATTR, &self.children)?;
        }
        if !self.vars.is_empty() {
            map.serialize_entry(VARS_ATTR, &self.vars)?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
