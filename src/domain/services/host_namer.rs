//! Host naming
//!
//! Default host names follow `project[_hosttype]_environment[_address]`:
//! - the host-type segment only when the project declares more than one host type
//! - the address suffix only when the environment lists more than one host
//!
//! An explicit record `name` replaces the default entirely.

use crate::domain::value_objects::ParsedHost;
use crate::error::{ArborError, ArborResult};

#[derive(Debug, Clone)]
pub struct HostNamer<'a> {
    project: &'a str,
    include_host_type: bool,
}

impl<'a> HostNamer<'a> {
    /// `host_type_count` excludes the reserved `vars` and `parents` keys
    pub fn new(project: &'a str, host_type_count: usize) -> Self {
        Self {
            project,
            include_host_type: host_type_count > 1,
        }
    }

    /// Name without the address suffix
    pub fn base_name(&self, host_type: &str, environment: &str) -> String {
        if self.include_host_type {
            format!("{}_{}_{}", self.project, host_type, environment)
        } else {
            format!("{}_{}", self.project, environment)
        }
    }

    /// Name of one parsed host; `path` locates the entry for error messages
    pub fn name(
        &self,
        host_type: &str,
        environment: &str,
        host: &ParsedHost,
        path: &str,
    ) -> ArborResult<String> {
        if let Some(name) = host.spec.explicit_name() {
            return Ok(name.to_string());
        }

        let base = self.base_name(host_type, environment);
        if !host.suffix_required {
            return Ok(base);
        }

        match host.spec.address() {
            Some(address) => Ok(format!("{}_{}", base, address)),
            None => Err(ArborError::schema(
                path,
                "host without 'name' in a multi-host list needs a string 'ansible_host'",
            )),
        }
    }
}
