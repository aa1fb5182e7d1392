//! Shared proptest strategies.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use serde_yaml_ng::{Mapping, Value};

/// Arbitrary YAML values with string keys, a few levels deep
pub fn yaml_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| Value::Number(n.into())),
        "[a-z0-9._-]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Sequence),
            prop::collection::btree_map("[a-e]{1,2}", inner, 0..5)
                .prop_map(|m| Value::Mapping(to_mapping(m))),
        ]
    })
}

/// Arbitrary mappings over a small key alphabet so merges collide often
pub fn yaml_mapping() -> impl Strategy<Value = Mapping> {
    prop::collection::btree_map("[a-d]", yaml_value(), 0..6).prop_map(to_mapping)
}

pub fn to_mapping(m: BTreeMap<String, Value>) -> Mapping {
    m.into_iter().map(|(k, v)| (Value::String(k), v)).collect()
}

/// A well-formed project: host type → environment → distinct addresses
pub type ProjectShape = BTreeMap<String, BTreeMap<String, BTreeSet<String>>>;

pub fn project_shape() -> impl Strategy<Value = ProjectShape> {
    prop::collection::btree_map(
        "(web|db|cache|worker)",
        prop::collection::btree_map(
            "(production|staging|development)",
            prop::collection::btree_set("10\\.0\\.[0-9]{1,3}\\.[0-9]{1,3}", 1..4),
            1..3,
        ),
        1..4,
    )
}

/// Project names never contain `_`, so no default host name can prefix-collide
pub fn projects() -> impl Strategy<Value = BTreeMap<String, ProjectShape>> {
    prop::collection::btree_map("p[a-z]{1,6}", project_shape(), 1..4)
}

/// Render a project shape as the input tree; single addresses use the scalar form
pub fn project_value(shape: &ProjectShape, scalar_singletons: bool) -> Value {
    let mut project = Mapping::new();
    for (host_type, envs) in shape {
        let mut env_map = Mapping::new();
        for (env, addresses) in envs {
            let value = if scalar_singletons && addresses.len() == 1 {
                Value::String(addresses.iter().next().cloned().unwrap_or_default())
            } else {
                Value::Sequence(addresses.iter().cloned().map(Value::String).collect())
            };
            env_map.insert(Value::String(env.clone()), value);
        }
        project.insert(Value::String(host_type.clone()), Value::Mapping(env_map));
    }
    Value::Mapping(project)
}

pub fn projects_mapping(projects: &BTreeMap<String, ProjectShape>, scalar_singletons: bool) -> Mapping {
    projects
        .iter()
        .map(|(name, shape)| (Value::String(name.clone()), project_value(shape, scalar_singletons)))
        .collect()
}

/// The default name the compiler must produce for one generated host
pub fn expected_name(
    project: &str,
    host_type_count: usize,
    host_type: &str,
    env: &str,
    address: &str,
    list_len: usize,
) -> String {
    let mut name = project.to_string();
    if host_type_count > 1 {
        name.push('_');
        name.push_str(host_type);
    }
    name.push('_');
    name.push_str(env);
    if list_len > 1 {
        name.push('_');
        name.push_str(address);
    }
    name
}
