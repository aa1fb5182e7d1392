//! Inventory entity - the compiled output graph
//!
//! Serializes to the dynamic-inventory document: one key per group plus a
//! `_meta.hostvars` block holding every host's vars.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_yaml_ng::Mapping;

use crate::domain::value_objects::HostVars;

use super::{Group, Registry};

/// Reserved top-level key of the output document
pub const META_KEY: &str = "_meta";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    groups: IndexMap<String, Group>,
    hostvars: HostVars,
}

#[derive(Serialize)]
struct Meta<'a> {
    hostvars: &'a HostVars,
}

impl Inventory {
    pub fn new(registry: Registry, hostvars: HostVars) -> Self {
        Self {
            groups: registry.into_groups(),
            hostvars,
        }
    }

    /// An inventory with no groups and no hosts
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&String, &Group)> {
        self.groups.iter()
    }

    pub fn host_vars(&self, host: &str) -> Option<&Mapping> {
        self.hostvars.get(host)
    }

    pub fn hostvars(&self) -> &HostVars {
        &self.hostvars
    }

    pub fn host_count(&self) -> usize {
        self.hostvars.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len() + 1))?;
        for (name, group) in &self.groups {
            map.serialize_entry(name, group)?;
        }
        map.serialize_entry(
            META_KEY,
            &Meta {
                hostvars: &self.hostvars,
            },
        )?;
        map.end()
    }
}
