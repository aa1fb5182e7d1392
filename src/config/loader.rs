//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArborError, ArborResult};

use super::types::{Config, PrettyMode, Verbosity};

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = "arbor.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
    pub message: Option<String>,
}

impl ConfigWarning {
    /// An `ARBOR_*` variable whose value was not understood
    fn invalid_env(var: &str, value: &str, expected: &str) -> Self {
        Self {
            key: var.to_string(),
            file: PathBuf::new(),
            line: None,
            suggestion: None,
            message: Some(format!(
                "ignoring {}='{}' (expected {})",
                var, value, expected
            )),
        }
    }

    /// True when the warning comes from an environment variable rather than a file
    pub fn is_from_env(&self) -> bool {
        self.file.as_os_str().is_empty()
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ArborResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ArborError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &path_str),
                suggestion: suggest_key(&key),
                message: None,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration: explicit file, then project file, then user file, then defaults.
///
/// Only an explicit file is allowed to fail; discovered files that do not parse
/// are skipped and reported as warnings.
pub fn resolve(explicit: Option<&Path>) -> ArborResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, mut warnings) = load_with_warnings(path)?;
        let (config, mut env_warnings) = with_env_overrides(config);
        warnings.append(&mut env_warnings);
        return Ok((config, warnings));
    }

    let candidates = [
        Some(PathBuf::from(PROJECT_CONFIG_FILE)),
        dirs::config_dir().map(|dir| dir.join("arbor/config.toml")),
    ];

    let mut skipped = Vec::new();
    for candidate in candidates.into_iter().flatten() {
        if !candidate.is_file() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, mut warnings)) => {
                skipped.append(&mut warnings);
                let (config, mut env_warnings) = with_env_overrides(config);
                skipped.append(&mut env_warnings);
                return Ok((config, skipped));
            }
            Err(e) => skipped.push(ConfigWarning {
                key: String::new(),
                file: candidate.clone(),
                line: None,
                suggestion: None,
                message: Some(e.to_string()),
            }),
        }
    }

    let (config, mut env_warnings) = with_env_overrides(Config::default());
    skipped.append(&mut env_warnings);
    Ok((config, skipped))
}

/// Apply environment variable overrides (ARBOR_* prefix)
pub fn with_env_overrides(config: Config) -> (Config, Vec<ConfigWarning>) {
    apply_env_overrides(config, |var| std::env::var(var).ok())
}

fn apply_env_overrides<F>(mut config: Config, lookup: F) -> (Config, Vec<ConfigWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(source) = lookup("ARBOR_SOURCE") {
        if !source.trim().is_empty() {
            config.inventory.source = PathBuf::from(source);
        }
    }

    if let Some(pretty) = lookup("ARBOR_PRETTY") {
        match PrettyMode::parse(&pretty) {
            Some(mode) => config.output.pretty = mode,
            None => warnings.push(ConfigWarning::invalid_env(
                "ARBOR_PRETTY",
                &pretty,
                "auto, always or never",
            )),
        }
    }

    if let Some(verbosity) = lookup("ARBOR_VERBOSITY") {
        match Verbosity::parse(&verbosity) {
            Some(level) => config.output.verbosity = level,
            None => warnings.push(ConfigWarning::invalid_env(
                "ARBOR_VERBOSITY",
                &verbosity,
                "quiet, normal, verbose or debug",
            )),
        }
    }

    (config, warnings)
}

/// Line of the assignment (or table header) for a dotted key path
fn find_line_number(content: &str, path: &str) -> Option<usize> {
    let (section, key) = path.rsplit_once('.').unwrap_or(("", path));
    let mut current = "";

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(header) = trimmed.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            current = header.trim();
            if section.is_empty() && current == key {
                return Some(i + 1);
            }
            continue;
        }
        if current == section && assigns_key(trimmed, key) {
            return Some(i + 1);
        }
    }
    None
}

fn assigns_key(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .map(|rest| rest.trim_start().starts_with('='))
        .unwrap_or(false)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["inventory", "source", "output", "pretty", "verbosity"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
