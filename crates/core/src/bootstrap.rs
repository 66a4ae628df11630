//! The bootstrap entry file.
//!
//! The dev server always serves the same entry file, so mounting a different
//! drill means overwriting that file. This is process wide mutable state:
//! every write replaces the whole file, the last writer wins, and nothing is
//! locked. A [`BootstrapGuard`] optionally puts the previous contents back
//! when the session ends.

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::{debug, info, warn};

use crate::drill_definitions::DrillFile;
use crate::error::{Error, Result};
use crate::interpolation::{build_bootstrap_context, render_bootstrap};

/// Import specifier for `drill` as seen from the bootstrap file.
///
/// Drills below the bootstrap file's directory get a `./` relative
/// specifier; anything else falls back to the absolute path. Separators are
/// always forward slashes.
#[must_use]
pub fn module_import_path(bootstrap_path: &Path, drill: &DrillFile) -> String {
    let module_path = drill.directory.join(drill.module_name());
    let bootstrap_directory = bootstrap_path.parent().unwrap_or_else(|| Path::new(""));

    match module_path.strip_prefix(bootstrap_directory) {
        Ok(relative) => format!("./{}", to_forward_slashes(relative)),
        Err(_) => to_forward_slashes(&module_path),
    }
}

fn to_forward_slashes(path: &Path) -> String {
    let mut joined = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => joined.push('/'),
            Component::Prefix(prefix) => joined.push_str(&prefix.as_os_str().to_string_lossy()),
            other => {
                if !joined.is_empty() && !joined.ends_with('/') {
                    joined.push('/');
                }
                joined.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    joined
}

/// Renders the bootstrap entry that mounts `drill`.
///
/// # Errors
///
/// Returns an error if the template is invalid.
pub fn render_for_drill(template: &str, bootstrap_path: &Path, drill: &DrillFile) -> Result<String> {
    let context = build_bootstrap_context(
        &module_import_path(bootstrap_path, drill),
        &drill.module_name(),
        &drill.id,
    );

    render_bootstrap(template, &context)
}

/// Replaces the bootstrap file's contents with `contents`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_bootstrap(bootstrap_path: &Path, contents: &str) -> Result<()> {
    fs::write(bootstrap_path, contents).map_err(|e| {
        Error::io_error(
            "bootstrap".to_string(),
            bootstrap_path.display().to_string(),
            e,
        )
    })?;

    debug!("Wrote bootstrap entry `{}`", bootstrap_path.display());
    Ok(())
}

/// Holds what the bootstrap file looked like before it was overwritten and
/// writes it back on drop.
///
/// A file that did not exist before is removed again.
#[derive(Debug)]
pub struct BootstrapGuard {
    path: PathBuf,
    previous: Option<Vec<u8>>,
}

impl BootstrapGuard {
    /// Captures the current bootstrap contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn capture(bootstrap_path: &Path) -> Result<Self> {
        let previous = match fs::read(bootstrap_path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(Error::io_error(
                    "bootstrap".to_string(),
                    bootstrap_path.display().to_string(),
                    e,
                ))
            }
        };

        Ok(Self {
            path: bootstrap_path.to_path_buf(),
            previous,
        })
    }
}

impl Drop for BootstrapGuard {
    fn drop(&mut self) {
        let result = match &self.previous {
            Some(contents) => fs::write(&self.path, contents),
            None => fs::remove_file(&self.path),
        };

        match result {
            Ok(()) => info!("Restored bootstrap entry `{}`", self.path.display()),
            Err(e) => warn!(
                "Could not restore bootstrap entry `{}`: {}",
                self.path.display(),
                e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::DEFAULT_BOOTSTRAP_TEMPLATE;

    fn component(directory: &Path, filename: &str) -> DrillFile {
        DrillFile {
            id: filename[..2].to_string(),
            filename: filename.to_string(),
            directory: directory.to_path_buf(),
        }
    }

    #[test]
    fn test_module_import_path_relative() {
        let drill = component(Path::new("/repo/src/drills"), "13_state.jsx");
        let import = module_import_path(Path::new("/repo/src/main.jsx"), &drill);
        assert_eq!(import, "./drills/13_state");
    }

    #[test]
    fn test_module_import_path_sibling_directory() {
        let drill = component(Path::new("/repo/drills"), "13_state.jsx");
        let import = module_import_path(Path::new("/repo/src/main.jsx"), &drill);
        assert_eq!(import, "/repo/drills/13_state");
    }

    #[test]
    fn test_render_for_drill() {
        let drill = component(Path::new("/repo/src/drills"), "14_effect.jsx");
        let rendered = render_for_drill(
            DEFAULT_BOOTSTRAP_TEMPLATE,
            Path::new("/repo/src/main.jsx"),
            &drill,
        )
        .unwrap();
        assert!(rendered.contains("import App from './drills/14_effect'"));
    }

    #[test]
    fn test_write_bootstrap_replaces_contents() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("main.jsx");

        write_bootstrap(&path, "first version with a long line").unwrap();
        write_bootstrap(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_bootstrap_missing_directory() {
        let result = write_bootstrap(Path::new("/this/path/does/not/exist/main.jsx"), "x");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_guard_restores_previous_contents() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("main.jsx");
        fs::write(&path, "original").unwrap();

        {
            let _guard = BootstrapGuard::capture(&path).unwrap();
            write_bootstrap(&path, "drill").unwrap();
            assert_eq!(fs::read_to_string(&path).unwrap(), "drill");
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_guard_removes_file_that_did_not_exist() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("main.jsx");

        {
            let _guard = BootstrapGuard::capture(&path).unwrap();
            write_bootstrap(&path, "drill").unwrap();
        }

        assert!(!path.exists());
    }
}
