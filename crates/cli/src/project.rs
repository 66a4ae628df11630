use std::path::PathBuf;

use log::debug;

use drill_runner_core::config::{self, RunnerConfig};
use drill_runner_core::error::Result;

use crate::cli_args::CommonArgs;

/// The repository a runner works on, with its configuration loaded.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: RunnerConfig,
}

impl Project {
    /// Resolves the project root and loads its config.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be determined, or the config file
    /// was given explicitly and is missing, or it cannot be parsed.
    pub fn load(args: &CommonArgs) -> Result<Self> {
        let root = config::get_project_root(args.project_root.as_deref())?;
        debug!("Project root: `{}`", root.display());

        let config_path = config::get_config_path(&root, args.config_path.as_deref());
        debug!("Config path: `{}`", config_path.display());

        let config = config::load_config(&config_path, args.config_path.is_some())?;

        Ok(Self { root, config })
    }
}
