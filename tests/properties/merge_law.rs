//! Property tests for the group vars merge law.

use proptest::prelude::*;
use serde_yaml_ng::Value;

use arbor::domain::policies::{deep_merge, merged};

use crate::strategies::yaml_mapping;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merging the same overlay twice changes nothing.
    #[test]
    fn property_merge_idempotent(base in yaml_mapping(), overlay in yaml_mapping()) {
        let once = merged(&base, &overlay);
        let twice = merged(&once, &overlay);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: keys only in the base survive untouched.
    #[test]
    fn property_merge_preserves_base_only_keys(base in yaml_mapping(), overlay in yaml_mapping()) {
        let out = merged(&base, &overlay);
        for (key, value) in &base {
            if !overlay.contains_key(key) {
                prop_assert_eq!(out.get(key), Some(value));
            }
        }
    }

    /// PROPERTY: non-mapping overlay values always win verbatim.
    #[test]
    fn property_merge_scalar_and_list_overlay_wins(base in yaml_mapping(), overlay in yaml_mapping()) {
        let mut out = base.clone();
        deep_merge(&mut out, &overlay);
        for (key, value) in &overlay {
            match value {
                Value::Mapping(_) => prop_assert!(matches!(out.get(key), Some(Value::Mapping(_)))),
                other => prop_assert_eq!(out.get(key), Some(other)),
            }
        }
    }
}
