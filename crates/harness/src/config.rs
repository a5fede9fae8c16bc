//! Harness configuration.
//!
//! This module parameterizes a validation run. It provides:
//! 1. **Failure policy:** Abort a group on first mismatch, or collect all.
//! 2. **Exit status:** Whether failed checks surface as a process failure.
//! 3. **Group selection:** Restrict a run to named groups.
//!
//! Configuration is supplied as JSON (see [`Config::from_json_file`]) or via
//! `Config::default()`; the CLI maps its flags onto the same structure.

use std::path::Path;

use serde::Deserialize;

use crate::error::HarnessError;
use crate::fixtures::Group;

/// What the runner does after a failed check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Abort the remaining checks of the group on the first mismatch.
    ///
    /// This is the historical behavior of the harness and the default.
    /// Later groups still run.
    #[default]
    FailFast,

    /// Run every check and report all mismatches.
    ///
    /// Diagnostic mode: a group's banner is still suppressed if any of
    /// its checks failed.
    KeepGoing,
}

/// Root harness configuration.
///
/// All fields have defaults, so a missing or empty config is valid.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Failure policy within a group.
    pub on_failure: FailurePolicy,

    /// Exit with a failure status when any check failed.
    ///
    /// Off by default: the historical harness always exits successfully
    /// and pass/fail is read from the console.
    pub strict_status: bool,

    /// Short names of the groups to run; empty means all.
    ///
    /// Execution order is always the fixed sequence (Zba, Zbb min/max,
    /// Zbb miscellaneous, Zbs) regardless of listing order.
    pub groups: Vec<String>,
}

impl Config {
    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the file cannot be read and
    /// [`HarnessError::Config`] if it is not valid configuration JSON.
    pub fn from_json_file(path: &Path) -> Result<Self, HarnessError> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| HarnessError::Config(e.to_string()))
    }

    /// Resolves the configured group names, preserving execution order.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] for a name that matches no group.
    pub fn selected_groups(&self) -> Result<Vec<Group>, HarnessError> {
        if self.groups.is_empty() {
            return Ok(Group::ALL.to_vec());
        }
        let mut wanted = Vec::with_capacity(self.groups.len());
        for name in &self.groups {
            let group = Group::from_name(name)
                .ok_or_else(|| HarnessError::Config(format!("unknown group '{name}'")))?;
            wanted.push(group);
        }
        Ok(Group::ALL
            .into_iter()
            .filter(|g| wanted.contains(g))
            .collect())
    }
}
