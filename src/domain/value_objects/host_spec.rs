//! Host specifications
//!
//! An environment lists its hosts either as bare addresses or as records
//! carrying an optional explicit name, extra group memberships, and host vars.

use serde_yaml_ng::{Mapping, Value};

/// Host variable holding the connection address
pub const ANSIBLE_HOST_KEY: &str = "ansible_host";
/// Record key holding an explicit host name
pub const NAME_KEY: &str = "name";
/// Record key listing additional groups for the host
pub const GROUPS_KEY: &str = "groups";

/// A host record: everything a list entry may say about one host
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostRecord {
    /// Explicit host name; overrides the computed default entirely
    pub name: Option<String>,
    /// Connection address, when given as a string
    pub ansible_host: Option<String>,
    /// Additional groups the host joins
    pub groups: Vec<String>,
    /// Host vars: every record key except `name` and `groups`
    pub vars: Mapping,
}

/// One entry of an environment's host list
#[derive(Debug, Clone, PartialEq)]
pub enum HostSpec {
    /// Bare address, used verbatim as `ansible_host`
    Address(String),
    Record(HostRecord),
}

impl HostSpec {
    /// The explicit name, if this is a record that carries one
    pub fn explicit_name(&self) -> Option<&str> {
        match self {
            HostSpec::Address(_) => None,
            HostSpec::Record(record) => record.name.as_deref(),
        }
    }

    /// Address used for the disambiguating name suffix
    pub fn address(&self) -> Option<&str> {
        match self {
            HostSpec::Address(address) => Some(address),
            HostSpec::Record(record) => record.ansible_host.as_deref(),
        }
    }

    /// Extra groups the host joins beyond its project, host-type and environment
    pub fn extra_groups(&self) -> &[String] {
        match self {
            HostSpec::Address(_) => &[],
            HostSpec::Record(record) => &record.groups,
        }
    }

    /// Consume the spec into its host vars
    pub fn into_vars(self) -> Mapping {
        match self {
            HostSpec::Address(address) => {
                let mut vars = Mapping::new();
                vars.insert(
                    Value::String(ANSIBLE_HOST_KEY.to_string()),
                    Value::String(address),
                );
                vars
            }
            HostSpec::Record(record) => record.vars,
        }
    }
}

/// A host spec plus whether its default name needs an address suffix
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedHost {
    pub spec: HostSpec,
    /// True exactly when the environment listed more than one host
    pub suffix_required: bool,
}

impl ParsedHost {
    pub fn new(spec: HostSpec, suffix_required: bool) -> Self {
        Self {
            spec,
            suffix_required,
        }
    }
}
