//! Property tests for default host naming.

use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_yaml_ng::Mapping;

use arbor::{compile_inventory, InventoryDocument};

use crate::strategies::{expected_name, projects, projects_mapping};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every generated host gets exactly the documented default name.
    #[test]
    fn property_default_names_follow_segment_rules(
        projects in projects(),
        scalar_singletons in any::<bool>(),
    ) {
        let document = InventoryDocument::new(projects_mapping(&projects, scalar_singletons), Mapping::new());
        let inventory = compile_inventory(&document).unwrap();

        let mut expected = BTreeSet::new();
        for (project, shape) in &projects {
            for (host_type, envs) in shape {
                for (env, addresses) in envs {
                    for address in addresses {
                        let name = expected_name(project, shape.len(), host_type, env, address, addresses.len());
                        prop_assert!(inventory.group(project).unwrap().has_host(&name), "{name} not in {project}");
                        prop_assert!(inventory.group(host_type).unwrap().has_host(&name));
                        prop_assert!(inventory.group(env).unwrap().has_host(&name));
                        prop_assert_eq!(
                            inventory.host_vars(&name).and_then(|v| v.get("ansible_host")).and_then(|v| v.as_str()),
                            Some(address.as_str())
                        );
                        expected.insert(name);
                    }
                }
            }
        }

        let actual: BTreeSet<String> = inventory.hostvars().keys().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: a single host type never contributes a segment; several always do.
    #[test]
    fn property_host_type_segment_iff_multiple_types(projects in projects()) {
        let document = InventoryDocument::new(projects_mapping(&projects, true), Mapping::new());
        let inventory = compile_inventory(&document).unwrap();

        for (project, shape) in &projects {
            let group = inventory.group(project).unwrap();
            for host in &group.hosts {
                let has_segment = shape.keys().any(|ht| host.starts_with(&format!("{project}_{ht}_")));
                prop_assert_eq!(has_segment, shape.len() > 1, "host {}", host);
            }
        }
    }
}
