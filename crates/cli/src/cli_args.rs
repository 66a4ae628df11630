//! Command-line argument parsing for both runners.
//!
//! The two binaries share [`CommonArgs`] and differ in the directories and
//! files they let the user override.

use clap::{Args, Parser};

/// Options understood by both runners.
#[derive(Args, Debug, Default)]
pub struct CommonArgs {
    /// Root of the study repository.
    ///
    /// Default paths and the config file are resolved against it. Defaults to
    /// the current directory.
    #[arg(long, short = 'r')]
    pub project_root: Option<String>,

    /// Path to the runner config YAML.
    ///
    /// If not provided, `drill-runner.yml` in the project root is used when it
    /// exists.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Show what would be run without running it or writing any file.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// List the available drills and exit.
    #[arg(long, short = 'l', action)]
    pub list: bool,
}

/// Runs a numbered script drill.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use drill_runner_cli::cli_args::PlainArgs;
///
/// let args = PlainArgs::parse_from(["drill", "01"]);
/// assert_eq!(args.drill_id.as_deref(), Some("01"));
/// ```
#[derive(Parser, Debug)]
#[command(name = "drill", term_width = 0)]
pub struct PlainArgs {
    /// Number of the drill to run, e.g. `01`. Used verbatim as the file name
    /// prefix.
    #[arg(num_args(1))]
    pub drill_id: Option<String>,

    /// Directory holding the script drills. Defaults to `<root>/drills`.
    #[arg(long, short = 'D')]
    pub drills_dir: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Mounts a numbered component drill and starts the dev server.
#[derive(Parser, Debug)]
#[command(name = "react-drill", term_width = 0)]
pub struct InteractiveArgs {
    /// Number of the drill to mount, e.g. `13`. Padded to two digits, so `7`
    /// and `07` are the same drill.
    #[arg(num_args(1))]
    pub drill_id: Option<String>,

    /// Directory holding the component drills. Defaults to `<root>/src/drills`.
    #[arg(long, short = 'D')]
    pub components_dir: Option<String>,

    /// Entry file rewritten to mount the drill. Defaults to `<root>/src/main.jsx`.
    #[arg(long, short = 'b')]
    pub bootstrap_path: Option<String>,

    /// Put the previous contents of the bootstrap file back once the dev
    /// server exits.
    #[arg(long, action)]
    pub restore_bootstrap: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}
