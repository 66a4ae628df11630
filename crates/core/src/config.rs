//! Configuration for the drill runners.
//!
//! Settings come from three layers: command line flags, an optional YAML file
//! in the project root, and built-in defaults, in that order of precedence.
//! Paths may use `~` and are resolved against the project root when relative.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::interpolation::DEFAULT_BOOTSTRAP_TEMPLATE;

/// Config file looked up in the project root when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "drill-runner.yml";
/// Directory holding script drills, relative to the project root.
pub const DEFAULT_DRILLS_DIRECTORY: &str = "drills";
/// Directory holding component drills, relative to the project root.
pub const DEFAULT_COMPONENTS_DIRECTORY: &str = "src/drills";
/// Entry file rewritten to mount the selected component.
pub const DEFAULT_BOOTSTRAP_PATH: &str = "src/main.jsx";
/// Program the script drills are handed to.
pub const DEFAULT_SCRIPT_RUNTIME: &[&str] = &["node"];

#[cfg(windows)]
pub const DEFAULT_DEV_SERVER_COMMAND: &[&str] = &["npx.cmd", "vite"];
#[cfg(not(windows))]
pub const DEFAULT_DEV_SERVER_COMMAND: &[&str] = &["npx", "vite"];

/// Contents of the optional `drill-runner.yml`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RunnerConfig {
    pub drills_directory: Option<String>,
    pub components_directory: Option<String>,
    pub bootstrap_path: Option<String>,
    pub bootstrap_template: Option<String>,
    pub script_runtime: Option<Vec<String>>,
    pub dev_server_command: Option<Vec<String>>,
    pub restore_bootstrap: Option<bool>,
}

impl RunnerConfig {
    #[must_use]
    pub fn drills_directory(&self, project_root: &Path, overridden: Option<&str>) -> PathBuf {
        resolve_path(
            project_root,
            overridden
                .or(self.drills_directory.as_deref())
                .unwrap_or(DEFAULT_DRILLS_DIRECTORY),
        )
    }

    #[must_use]
    pub fn components_directory(&self, project_root: &Path, overridden: Option<&str>) -> PathBuf {
        resolve_path(
            project_root,
            overridden
                .or(self.components_directory.as_deref())
                .unwrap_or(DEFAULT_COMPONENTS_DIRECTORY),
        )
    }

    #[must_use]
    pub fn bootstrap_path(&self, project_root: &Path, overridden: Option<&str>) -> PathBuf {
        resolve_path(
            project_root,
            overridden
                .or(self.bootstrap_path.as_deref())
                .unwrap_or(DEFAULT_BOOTSTRAP_PATH),
        )
    }

    #[must_use]
    pub fn bootstrap_template(&self) -> &str {
        self.bootstrap_template
            .as_deref()
            .unwrap_or(DEFAULT_BOOTSTRAP_TEMPLATE)
    }

    /// # Errors
    ///
    /// Returns an error if the configured runtime is an empty list.
    pub fn script_runtime(&self) -> Result<Vec<String>> {
        command_or_default(
            "script_runtime",
            self.script_runtime.as_ref(),
            DEFAULT_SCRIPT_RUNTIME,
        )
    }

    /// # Errors
    ///
    /// Returns an error if the configured command is an empty list.
    pub fn dev_server_command(&self) -> Result<Vec<String>> {
        command_or_default(
            "dev_server_command",
            self.dev_server_command.as_ref(),
            DEFAULT_DEV_SERVER_COMMAND,
        )
    }

    /// A command line flag can only switch restoring on.
    #[must_use]
    pub fn restore_bootstrap(&self, flag: bool) -> bool {
        flag || self.restore_bootstrap.unwrap_or(false)
    }
}

fn command_or_default(
    name: &str,
    configured: Option<&Vec<String>>,
    default: &[&str],
) -> Result<Vec<String>> {
    match configured {
        Some(command) if command.is_empty() => Err(Error::EmptyCommand(name.to_string())),
        Some(command) => Ok(command.clone()),
        None => Ok(default.iter().map(ToString::to_string).collect()),
    }
}

/// Expands `~` in `path` and anchors it at `project_root` if relative.
#[must_use]
pub fn resolve_path(project_root: &Path, path: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());

    if expanded.is_absolute() {
        expanded
    } else {
        project_root.join(expanded)
    }
}

/// Resolves the project root, defaulting to the current directory.
///
/// # Errors
///
/// Returns an error if no root is given and the current directory is not
/// accessible.
pub fn get_project_root(project_root_arg: Option<&str>) -> Result<PathBuf> {
    match project_root_arg {
        Some(project_root) => Ok(PathBuf::from(shellexpand::tilde(project_root).into_owned())),
        None => std::env::current_dir().map_err(|e| {
            Error::io_error("current directory".to_string(), ".".to_string(), e)
        }),
    }
}

/// Resolves the configuration file path.
///
/// A custom path is tilde-expanded and anchored at the project root;
/// otherwise `drill-runner.yml` in the project root is used.
#[must_use]
pub fn get_config_path(project_root: &Path, config_path_arg: Option<&str>) -> PathBuf {
    resolve_path(project_root, config_path_arg.unwrap_or(DEFAULT_CONFIG_FILE))
}

/// Loads the runner configuration.
///
/// A missing file is only acceptable when `required` is false, i.e. the
/// default location was used.
///
/// # Errors
///
/// Returns an error if:
/// - `required` is set and the file does not exist
/// - the file cannot be opened
/// - the YAML is malformed or doesn't match [`RunnerConfig`]
pub fn load_config(config_path: &Path, required: bool) -> Result<RunnerConfig> {
    let path_description = config_path.display().to_string();

    if !required && !config_path.exists() {
        debug!("No config at `{}`, using defaults", path_description);
        return Ok(RunnerConfig::default());
    }

    let reader = File::open(config_path)
        .map_err(|e| Error::io_error("config file".to_string(), path_description.clone(), e))?;

    // An empty file deserializes to `null`, not to an empty mapping
    let value: serde_yaml::Value = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            path_description.clone(),
            e,
        )
    })?;

    if value.is_null() {
        return Ok(RunnerConfig::default());
    }

    let config: RunnerConfig = serde_yaml::from_value(value).map_err(|e| {
        Error::yaml_error(
            "parsing".to_string(),
            "config".to_string(),
            path_description,
            e,
        )
    })?;

    debug!("Loaded config: {:?}", config);
    Ok(config)
}
