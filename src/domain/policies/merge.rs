//! Variable merge law
//!
//! Group vars are combined recursively:
//! - mapping into mapping: merge key by key
//! - anything else (scalars, lists, mismatched kinds): the later value replaces the earlier
//!
//! Lists are never concatenated.

use serde_yaml_ng::{Mapping, Value};

/// Merge `overlay` into `base` in place
pub fn deep_merge(base: &mut Mapping, overlay: &Mapping) {
    for (key, incoming) in overlay {
        if let Value::Mapping(incoming_map) = incoming {
            if let Some(Value::Mapping(existing)) = base.get_mut(key) {
                deep_merge(existing, incoming_map);
                continue;
            }
        }
        base.insert(key.clone(), incoming.clone());
    }
}

/// Merge two mappings into a new one; `overlay` wins on conflicts
pub fn merged(base: &Mapping, overlay: &Mapping) -> Mapping {
    let mut out = base.clone();
    deep_merge(&mut out, overlay);
    out
}
