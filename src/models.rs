//! Input document model
//!
//! The inventory source is a YAML document with a required `projects` mapping and
//! an optional `groups` mapping. Both are kept as ordered YAML mappings so that
//! traversal follows declaration order.

use serde_yaml_ng::{Mapping, Value};

use crate::error::{ArborError, ArborResult};

/// Top-level key holding project declarations
pub const PROJECTS_KEY: &str = "projects";
/// Top-level key holding supplementary group declarations
pub const GROUPS_KEY: &str = "groups";

/// Project sub-key merged into the project's group vars
pub const PROJECT_VARS_KEY: &str = "vars";
/// Project sub-key listing groups the project becomes a child of
pub const PROJECT_PARENTS_KEY: &str = "parents";

/// A parsed inventory source document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryDocument {
    pub projects: Mapping,
    pub groups: Mapping,
}

impl InventoryDocument {
    pub fn new(projects: Mapping, groups: Mapping) -> Self {
        Self { projects, groups }
    }

    /// Validate the top-level shape of a raw YAML value
    pub fn from_value(value: Value) -> ArborResult<Self> {
        let Value::Mapping(root) = value else {
            return Err(ArborError::schema(
                "<root>",
                "expected a mapping with a 'projects' key",
            ));
        };

        let projects = match lookup(&root, PROJECTS_KEY) {
            Some(Value::Mapping(m)) => m,
            Some(Value::Null) => Mapping::new(),
            Some(_) => {
                return Err(ArborError::schema(PROJECTS_KEY, "expected a mapping of projects"))
            }
            None => {
                return Err(ArborError::schema(
                    PROJECTS_KEY,
                    "required key 'projects' is missing",
                ))
            }
        };

        let groups = match lookup(&root, GROUPS_KEY) {
            Some(Value::Mapping(m)) => m,
            None | Some(Value::Null) => Mapping::new(),
            Some(_) => return Err(ArborError::schema(GROUPS_KEY, "expected a mapping of groups")),
        };

        check_mapping_keys(&projects, PROJECTS_KEY)?;
        check_mapping_keys(&groups, GROUPS_KEY)?;

        Ok(Self { projects, groups })
    }

    /// Names of all top-level projects, in declaration order
    pub fn project_names(&self) -> ArborResult<Vec<String>> {
        self.projects
            .keys()
            .map(|key| key_name(key, PROJECTS_KEY))
            .collect()
    }
}

fn lookup(root: &Mapping, key: &str) -> Option<Value> {
    root.get(key).cloned()
}

/// Mapping keys name groups and hosts, so they have to be plain strings
pub(crate) fn key_name(key: &Value, path: &str) -> ArborResult<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        other => Err(ArborError::schema(
            path,
            format!("expected a string key, found {}", describe(other)),
        )),
    }
}

/// Every nested mapping key must be a scalar so it can become a JSON object key
fn check_mapping_keys(mapping: &Mapping, path: &str) -> ArborResult<()> {
    for (key, value) in mapping {
        let segment = match key {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(ArborError::schema(
                    path,
                    format!("mapping keys must be scalars, found {}", describe(other)),
                ))
            }
        };
        check_keys(value, &format!("{}.{}", path, segment))?;
    }
    Ok(())
}

fn check_keys(value: &Value, path: &str) -> ArborResult<()> {
    match value {
        Value::Mapping(mapping) => check_mapping_keys(mapping, path),
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| check_keys(item, &format!("{}[{}]", path, i))),
        Value::Tagged(tagged) => check_keys(&tagged.value, path),
        _ => Ok(()),
    }
}

/// Short human name of a YAML value's type, for schema messages
pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
