//! Scenario: compiling the fully annotated example inventory.

use serde_json::json;

use crate::assert_group;
use crate::common::*;

fn compile() -> serde_json::Value {
    let env = TestEnv::with_hosts(DOCUMENTED_HOSTS);
    let result = env.run(&["--list"]);
    assert!(result.success, "stderr: {}", result.stderr);
    result.json()
}

#[test]
fn scenario_every_host_is_named() {
    let document = compile();

    assert_eq!(
        host_names(&document),
        vec![
            "complex_project_development",
            "complex_project_production_22.22.22.22",
            "complex_project_staging",
            "myhost",
            "simple_project_development",
            "simple_project_production",
            "simple_project_staging",
        ]
    );
}

#[test]
fn scenario_standard_groups() {
    let document = compile();

    assert_eq!(
        hosts_of(&document, "production"),
        vec![
            "complex_project_production_22.22.22.22",
            "myhost",
            "simple_project_production",
        ]
    );
    assert_eq!(hosts_of(&document, "web").len(), 7);
    assert_eq!(hosts_of(&document, "nyc1"), vec!["myhost"]);
    assert_eq!(document["simple_project"]["vars"], json!({"project": "simple_project"}));
    assert_eq!(
        document["complex_project"]["vars"],
        json!({
            "project": "complex_project",
            "group_var_for_project": "foo",
            "vagrant_private_key_file": "path",
        })
    );
}

#[test]
fn scenario_record_vars_reach_hostvars() {
    let document = compile();

    assert_eq!(
        hostvars_of(&document, "myhost"),
        &json!({"ansible_host": "33.33.33.33", "foo": "bar"})
    );
    assert_eq!(
        hostvars_of(&document, "complex_project_development"),
        &json!({
            "ansible_host": "192.168.50.6",
            "vagrant_primary": true,
            "vagrant_autostart": true,
        })
    );
    assert_eq!(
        hostvars_of(&document, "simple_project_staging"),
        &json!({"ansible_host": "22.22.22.22"})
    );
}

#[test]
fn scenario_parents_and_declared_groups() {
    let document = compile();

    assert_eq!(children_of(&document, "some_meta_group"), vec!["complex_project"]);

    assert_eq!(
        hosts_of(&document, "multisite"),
        vec!["myhost", "simple_project_production"]
    );
    assert_eq!(children_of(&document, "multisite"), vec!["project_a", "project_b"]);
    assert_eq!(document["multisite"]["vars"], json!({"bar": "baz"}));
    assert_group!(document, "project_a");
    assert_group!(document, "project_b");

    assert_eq!(hosts_of(&document, "az_west"), vec!["westhost1", "westhost2"]);
    assert_eq!(children_of(&document, "cloud_provider_a"), vec!["az_west"]);

    // Non-standard attributes are copied verbatim
    assert_eq!(
        document["ecommerce"]["web"],
        json!({"development": "192.168.50.10"})
    );
    assert_eq!(
        document["active"]["web"]["development"][0]["base_project"],
        json!("project2")
    );
}

#[test]
fn scenario_aggregate_group() {
    let document = compile();

    assert_eq!(
        children_of(&document, "all-projects"),
        vec!["complex_project", "simple_project"]
    );
    assert_eq!(
        document["all-projects"]["web"],
        json!({"development": "192.168.50.11"})
    );
    assert!(document["all-projects"].get("hosts").is_none());
}

#[test]
fn scenario_group_only_hosts_have_no_hostvars() {
    let document = compile();

    // westhost1 is listed by a group but no project defines it
    assert!(document["_meta"]["hostvars"].get("westhost1").is_none());
}
