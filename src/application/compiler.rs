//! Inventory compilation pipeline
//!
//! ## Usage
//!
//! ```ignore
//! use arbor::application::compile_inventory;
//! use arbor::parser::load_document;
//!
//! let document = load_document(Path::new("hosts/hosts.yml"))?;
//! let inventory = compile_inventory(&document)?;
//! ```
//!
//! Stages run strictly in order: projects, duplicate check, groups, aggregate.
//! Any error aborts the whole compile; there is no partial inventory.

use tracing::info;

use crate::domain::entities::{Inventory, Registry, META_KEY};
use crate::domain::services::{augment_groups, finalize_aggregate, ProjectCompiler};
use crate::domain::value_objects::HostVars;
use crate::error::{ArborError, ArborResult};
use crate::models::InventoryDocument;

/// Compile an inventory document into the group graph plus host vars
pub fn compile_inventory(document: &InventoryDocument) -> ArborResult<Inventory> {
    let project_names = document.project_names()?;

    let mut registry = Registry::new();
    let mut hostvars = HostVars::new();

    ProjectCompiler::new(&mut registry, &mut hostvars).compile_all(&document.projects)?;
    registry.finalize()?;

    augment_groups(&document.groups, &mut registry)?;
    finalize_aggregate(&project_names, &mut registry);

    if registry.contains(META_KEY) {
        return Err(ArborError::schema(
            META_KEY,
            format!("'{}' is reserved and cannot be used as a group name", META_KEY),
        ));
    }

    info!(
        projects = project_names.len(),
        groups = registry.len(),
        hosts = hostvars.len(),
        "compiled inventory"
    );

    Ok(Inventory::new(registry, hostvars))
}
