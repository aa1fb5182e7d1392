//! Source parser for inventory documents
//!
//! Loads the YAML source and normalizes each environment's polymorphic host
//! value (single address, list of addresses, list of records) into `ParsedHost`s.

use std::fs;
use std::path::Path;

use serde_yaml_ng::{Mapping, Value};

use crate::domain::value_objects::{
    HostRecord, HostSpec, ParsedHost, ANSIBLE_HOST_KEY, GROUPS_KEY, NAME_KEY,
};
use crate::error::{ArborError, ArborResult};
use crate::models::{describe, InventoryDocument};

/// Load and parse an inventory source file
pub fn load_document(path: &Path) -> ArborResult<InventoryDocument> {
    if !path.is_file() {
        return Err(ArborError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_document(&content, path)
}

/// Parse inventory source text; `file` is used for error reporting only.
///
/// Merge keys (`<<: *anchor`) are resolved before the document is inspected.
pub fn parse_document(yaml: &str, file: &Path) -> ArborResult<InventoryDocument> {
    let invalid = |e: serde_yaml_ng::Error| ArborError::InvalidYaml {
        file: file.to_path_buf(),
        message: e.to_string(),
    };
    let mut value: Value = serde_yaml_ng::from_str(yaml).map_err(invalid)?;
    value.apply_merge().map_err(invalid)?;
    InventoryDocument::from_value(value)
}

/// Normalize one environment's value into host specs.
///
/// `suffix_required` is set on every entry of a list with more than one element.
/// A null environment yields no hosts.
pub fn parse_environment(value: &Value, path: &str) -> ArborResult<Vec<ParsedHost>> {
    match value {
        Value::String(address) => Ok(vec![ParsedHost::new(
            HostSpec::Address(address.clone()),
            false,
        )]),
        Value::Sequence(items) => {
            let suffix_required = items.len() > 1;
            items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let item_path = format!("{}[{}]", path, i);
                    parse_host_item(item, &item_path)
                        .map(|spec| ParsedHost::new(spec, suffix_required))
                })
                .collect()
        }
        Value::Null => Ok(Vec::new()),
        other => Err(ArborError::schema(
            path,
            format!(
                "expected an address or a list of hosts, found {}",
                describe(other)
            ),
        )),
    }
}

fn parse_host_item(item: &Value, path: &str) -> ArborResult<HostSpec> {
    match item {
        Value::String(address) => Ok(HostSpec::Address(address.clone())),
        Value::Mapping(record) => parse_host_record(record, path).map(HostSpec::Record),
        other => Err(ArborError::schema(
            path,
            format!("expected a string or a mapping, found {}", describe(other)),
        )),
    }
}

fn parse_host_record(record: &Mapping, path: &str) -> ArborResult<HostRecord> {
    let name = match record.get(NAME_KEY) {
        None => None,
        Some(Value::String(name)) => Some(name.clone()),
        Some(other) => {
            return Err(ArborError::schema(
                format!("{}.{}", path, NAME_KEY),
                format!("expected a string, found {}", describe(other)),
            ))
        }
    };

    let ansible_host = match record.get(ANSIBLE_HOST_KEY) {
        Some(Value::String(address)) => Some(address.clone()),
        _ => None,
    };

    let groups = match record.get(GROUPS_KEY) {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => string_list(value, &format!("{}.{}", path, GROUPS_KEY))?,
    };

    let vars = record
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), Some(NAME_KEY) | Some(GROUPS_KEY)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(HostRecord {
        name,
        ansible_host,
        groups,
        vars,
    })
}

/// Read a list of strings, e.g. `parents`, `children`, `hosts` or a record's `groups`
pub fn string_list(value: &Value, path: &str) -> ArborResult<Vec<String>> {
    let Value::Sequence(items) = value else {
        return Err(ArborError::schema(
            path,
            format!("expected a list of names, found {}", describe(value)),
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(ArborError::schema(
                format!("{}[{}]", path, i),
                format!("expected a string, found {}", describe(other)),
            )),
        })
        .collect()
}
