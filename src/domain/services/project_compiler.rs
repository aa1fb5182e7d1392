//! Project compilation
//!
//! Walks the `projects` tree in declaration order and registers every host into
//! its project, host-type and environment groups. Registering the same name into
//! one of those groups twice is what surfaces a duplicate host.

use serde_yaml_ng::{Mapping, Value};
use tracing::debug;

use crate::domain::entities::Registry;
use crate::domain::value_objects::HostVars;
use crate::error::{ArborError, ArborResult};
use crate::models::{describe, key_name, PROJECTS_KEY, PROJECT_PARENTS_KEY, PROJECT_VARS_KEY};
use crate::parser::{parse_environment, string_list};

use super::HostNamer;

/// Group var every project group carries
pub const PROJECT_VAR: &str = "project";

pub struct ProjectCompiler<'r> {
    registry: &'r mut Registry,
    hostvars: &'r mut HostVars,
}

impl<'r> ProjectCompiler<'r> {
    pub fn new(registry: &'r mut Registry, hostvars: &'r mut HostVars) -> Self {
        Self { registry, hostvars }
    }

    /// Compile every project, in declaration order
    pub fn compile_all(&mut self, projects: &Mapping) -> ArborResult<()> {
        for (key, body) in projects {
            let project = key_name(key, PROJECTS_KEY)?;
            self.compile_project(&project, body)?;
        }
        Ok(())
    }

    pub fn compile_project(&mut self, project: &str, body: &Value) -> ArborResult<()> {
        let path = format!("{}.{}", PROJECTS_KEY, project);
        let empty = Mapping::new();
        let body = match body {
            Value::Mapping(m) => m,
            Value::Null => &empty,
            other => {
                return Err(ArborError::schema(
                    path,
                    format!("expected a mapping of host types, found {}", describe(other)),
                ))
            }
        };

        debug!(project, "compiling project");
        self.registry.set_var(project, PROJECT_VAR, project_value(project));

        if let Some(vars) = body.get(PROJECT_VARS_KEY) {
            self.apply_vars(project, vars, &format!("{}.{}", path, PROJECT_VARS_KEY))?;
        }

        if let Some(parents) = body.get(PROJECT_PARENTS_KEY) {
            let parents_path = format!("{}.{}", path, PROJECT_PARENTS_KEY);
            for parent in string_list(parents, &parents_path)? {
                self.registry.union_children(&parent, [project]);
            }
        }

        let host_types = host_types(body, &path)?;
        let namer = HostNamer::new(project, host_types.len());

        for (host_type, envs) in host_types {
            let host_type_path = format!("{}.{}", path, host_type);
            self.registry.ensure_group(&host_type);

            let envs = match envs {
                Value::Mapping(m) => m,
                Value::Null => continue,
                other => {
                    return Err(ArborError::schema(
                        host_type_path,
                        format!("expected a mapping of environments, found {}", describe(other)),
                    ))
                }
            };

            for (env_key, env_value) in envs {
                let environment = key_name(env_key, &host_type_path)?;
                let env_path = format!("{}.{}", host_type_path, environment);
                self.registry.ensure_group(&environment);

                for (i, host) in parse_environment(env_value, &env_path)?.into_iter().enumerate() {
                    let entry_path = if matches!(env_value, Value::Sequence(_)) {
                        format!("{}[{}]", env_path, i)
                    } else {
                        env_path.clone()
                    };
                    let name = namer.name(&host_type, &environment, &host, &entry_path)?;
                    debug!(project, host_type = %host_type, environment = %environment, host = %name, "registering host");

                    for group in [project, host_type.as_str(), environment.as_str()] {
                        self.registry.add_host(group, &name);
                    }

                    for group in host.spec.extra_groups() {
                        self.registry.union_hosts_explicit(group, [name.as_str()]);
                    }

                    // A colliding name here silently replaces; the group check above reports it.
                    self.hostvars.insert(name, host.spec.into_vars());
                }
            }
        }

        Ok(())
    }

    fn apply_vars(&mut self, project: &str, vars: &Value, path: &str) -> ArborResult<()> {
        match vars {
            Value::Mapping(vars) => self.registry.merge_vars(project, vars),
            Value::Null => {}
            other => {
                return Err(ArborError::schema(
                    path,
                    format!("expected a mapping, found {}", describe(other)),
                ))
            }
        }
        // The project var always names the project, whatever the user wrote.
        self.registry.set_var(project, PROJECT_VAR, project_value(project));
        Ok(())
    }
}

fn project_value(project: &str) -> Value {
    Value::String(project.to_string())
}

/// Host-type keys of a project body, skipping the reserved sub-keys
fn host_types<'b>(body: &'b Mapping, path: &str) -> ArborResult<Vec<(String, &'b Value)>> {
    body.iter()
        .filter(|(key, _)| {
            !matches!(key.as_str(), Some(PROJECT_VARS_KEY) | Some(PROJECT_PARENTS_KEY))
        })
        .map(|(key, value)| Ok((key_name(key, path)?, value)))
        .collect()
}
