//! Property tests for the whole compile pipeline.

use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_yaml_ng::{Mapping, Value};

use arbor::{compile_inventory, InventoryDocument, AGGREGATE_GROUP};

use crate::strategies::{projects, projects_mapping, yaml_mapping, yaml_value};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary documents compile or fail cleanly, never panic.
    #[test]
    fn property_compile_never_panics(projects in yaml_value(), groups in yaml_value()) {
        let mut root = Mapping::new();
        root.insert(Value::String("projects".into()), projects);
        root.insert(Value::String("groups".into()), groups);

        if let Ok(document) = InventoryDocument::from_value(Value::Mapping(root)) {
            let _ = compile_inventory(&document);
        }
    }

    /// PROPERTY: the aggregate group's children are exactly the projects,
    /// whatever the user declared for it.
    #[test]
    fn property_aggregate_children_are_projects(
        projects in projects(),
        user_aggregate in yaml_mapping(),
    ) {
        let mut groups = Mapping::new();
        groups.insert(Value::String(AGGREGATE_GROUP.into()), Value::Mapping(user_aggregate));
        let document = InventoryDocument::new(projects_mapping(&projects, false), groups);

        // User-supplied attributes may be malformed; only successful compiles are checked.
        if let Ok(inventory) = compile_inventory(&document) {
            let children: BTreeSet<String> =
                inventory.group(AGGREGATE_GROUP).unwrap().children.iter().cloned().collect();
            let expected: BTreeSet<String> = projects.keys().cloned().collect();
            prop_assert_eq!(children, expected);
        }
    }

    /// PROPERTY: compiling the same document twice yields identical inventories.
    #[test]
    fn property_compile_is_deterministic(projects in projects(), groups in yaml_mapping()) {
        let mut wrapped = Mapping::new();
        for (key, value) in groups {
            wrapped.insert(key, value);
        }
        let document = InventoryDocument::new(projects_mapping(&projects, true), wrapped);

        let first = compile_inventory(&document);
        let second = compile_inventory(&document);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "compile outcome differed between runs"),
        }
    }
}
