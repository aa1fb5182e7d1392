//! Group augmentation
//!
//! Layers the top-level `groups` section onto the registry. `hosts` and
//! `children` are set-unioned, `vars` deep-merged, and every other attribute is
//! copied verbatim as a pass-through extra.

use serde_yaml_ng::{Mapping, Value};
use tracing::debug;

use crate::domain::entities::{Registry, CHILDREN_ATTR, HOSTS_ATTR, VARS_ATTR};
use crate::error::{ArborError, ArborResult};
use crate::models::{describe, key_name, GROUPS_KEY};
use crate::parser::string_list;

/// Apply every declared group, in declaration order
pub fn augment_groups(groups: &Mapping, registry: &mut Registry) -> ArborResult<()> {
    for (key, body) in groups {
        let group = key_name(key, GROUPS_KEY)?;
        augment_group(&group, body, registry)?;
    }
    Ok(())
}

pub fn augment_group(group: &str, body: &Value, registry: &mut Registry) -> ArborResult<()> {
    let path = format!("{}.{}", GROUPS_KEY, group);
    registry.ensure_group(group);

    let body = match body {
        Value::Mapping(m) => m,
        Value::Null => return Ok(()),
        other => {
            return Err(ArborError::schema(
                path,
                format!("expected a mapping of group attributes, found {}", describe(other)),
            ))
        }
    };

    debug!(group, "augmenting group");

    for (key, value) in body {
        let attr = key_name(key, &path)?;
        let attr_path = format!("{}.{}", path, attr);
        match attr.as_str() {
            HOSTS_ATTR => {
                registry.union_hosts_explicit(group, string_list(value, &attr_path)?);
            }
            CHILDREN_ATTR => {
                let children = string_list(value, &attr_path)?;
                for child in &children {
                    registry.ensure_group(child);
                }
                registry.union_children(group, children);
            }
            VARS_ATTR => match value {
                Value::Mapping(vars) => registry.merge_vars(group, vars),
                Value::Null => {}
                other => {
                    return Err(ArborError::schema(
                        attr_path,
                        format!("expected a mapping, found {}", describe(other)),
                    ))
                }
            },
            _ => registry.set_extra(group, &attr, value.clone()),
        }
    }

    Ok(())
}
