//! Registry entity
//!
//! The group graph under construction for one compile. Groups are created lazily
//! on first reference. Adding a host to a group that already holds it is recorded
//! as a duplicate; duplicates are reported together by `finalize`.

use indexmap::{IndexMap, IndexSet};
use serde_yaml_ng::{Mapping, Value};

use crate::domain::policies::deep_merge;
use crate::error::{ArborError, ArborResult};

use super::Group;

/// A host added twice to the same group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateHost {
    pub group: String,
    pub host: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    groups: IndexMap<String, Group>,
    duplicates: Vec<DuplicateHost>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a group, creating it empty if it does not exist yet
    pub fn ensure_group(&mut self, name: &str) -> &mut Group {
        self.groups.entry(name.to_string()).or_default()
    }

    /// Add a host to a group, recording a duplicate if it is already a member
    pub fn add_host(&mut self, group: &str, host: &str) {
        let inserted = self.ensure_group(group).hosts.insert(host.to_string());
        if !inserted {
            self.duplicates.push(DuplicateHost {
                group: group.to_string(),
                host: host.to_string(),
            });
        }
    }

    /// Set-union hosts into a group; re-adding an existing member is not a duplicate
    pub fn union_hosts_explicit<I, S>(&mut self, group: &str, hosts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = self.ensure_group(group);
        for host in hosts {
            target.hosts.insert(host.into());
        }
    }

    /// Set-union child group names into a group
    pub fn union_children<I, S>(&mut self, group: &str, children: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = self.ensure_group(group);
        for child in children {
            target.children.insert(child.into());
        }
    }

    /// Replace a group's children outright
    pub fn set_children<I, S>(&mut self, group: &str, children: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ensure_group(group).children = children.into_iter().map(Into::into).collect();
    }

    /// Deep-merge a mapping into a group's vars
    pub fn merge_vars(&mut self, group: &str, vars: &Mapping) {
        deep_merge(&mut self.ensure_group(group).vars, vars);
    }

    /// Set a single group var, replacing any previous value
    pub fn set_var(&mut self, group: &str, key: &str, value: Value) {
        self.ensure_group(group)
            .vars
            .insert(Value::String(key.to_string()), value);
    }

    /// Store a pass-through attribute on a group, replacing any previous value
    pub fn set_extra(&mut self, group: &str, key: &str, value: Value) {
        self.ensure_group(group).extra.insert(key.to_string(), value);
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Groups in first-reference order
    pub fn groups(&self) -> impl Iterator<Item = (&String, &Group)> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn duplicates(&self) -> &[DuplicateHost] {
        &self.duplicates
    }

    /// De-duplicated names of every host that was registered twice, in detection order
    pub fn duplicate_host_names(&self) -> Vec<String> {
        self.duplicates
            .iter()
            .map(|d| d.host.clone())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Fail if any duplicate was recorded
    pub fn finalize(&self) -> ArborResult<()> {
        if self.duplicates.is_empty() {
            Ok(())
        } else {
            Err(ArborError::DuplicateHosts {
                hosts: self.duplicate_host_names(),
            })
        }
    }

    pub fn into_groups(self) -> IndexMap<String, Group> {
        self.groups
    }
}
