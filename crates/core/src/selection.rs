//! Resolving drill numbers to files on disk.
//!
//! Both runners go through [`resolve_drill_file`]; the menu shown when no
//! number is given comes from [`list_drills`], so it always reflects the
//! directory as it is at invocation time.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::drill_definitions::{DrillFile, DrillKind};
use crate::error::{Error, Result};

fn read_file_names(directory: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(directory).map_err(|e| {
        Error::io_error(
            "drill directory".to_string(),
            directory.display().to_string(),
            e,
        )
    })?;

    let mut file_names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::io_error(
                "drill directory".to_string(),
                directory.display().to_string(),
                e,
            )
        })?;

        // `Path::is_file` follows symlinks, `DirEntry::file_type` does not
        if !entry.path().is_file() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => file_names.push(name),
            Err(name) => debug!("Skipping non UTF-8 file name {:?}", name),
        }
    }

    file_names.sort();
    Ok(file_names)
}

/// Finds the drill file for `id` in `directory`.
///
/// The id is normalised for `kind` (padded for components), then the first
/// file, in file name order, named `<id>_...` with an acceptable extension is
/// returned. Several candidates are not an error; the extra ones are logged
/// and ignored.
///
/// # Errors
///
/// Returns an error if:
/// - `id` is empty or only whitespace
/// - `directory` cannot be listed
/// - no file matches, in which case the error names the id as given
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use drill_runner_core::drill_definitions::DrillKind;
/// use drill_runner_core::selection::resolve_drill_file;
///
/// let drill = resolve_drill_file(Path::new("drills"), "01", DrillKind::Script)?;
/// println!("{}", drill.path().display());
/// # Ok::<(), drill_runner_core::error::Error>(())
/// ```
pub fn resolve_drill_file(directory: &Path, id: &str, kind: DrillKind) -> Result<DrillFile> {
    if id.trim().is_empty() {
        return Err(Error::EmptyDrillId);
    }

    let normalized_id = kind.normalize_id(id);
    let prefix = format!("{normalized_id}_");
    debug!(
        "Looking for `{}*` ({:?}) in `{}`",
        prefix,
        kind,
        directory.display()
    );

    let mut candidates = read_file_names(directory)?
        .into_iter()
        .filter(|name| name.starts_with(&prefix) && kind.accepts_extension(name));

    let Some(filename) = candidates.next() else {
        return Err(Error::drill_not_found(
            id.to_string(),
            directory.display().to_string(),
        ));
    };

    let ignored: Vec<String> = candidates.collect();
    if !ignored.is_empty() {
        warn!(
            "Drill `{}` matches several files, using `{}` and ignoring {:?}",
            id, filename, ignored
        );
    }

    Ok(DrillFile {
        id: normalized_id,
        filename,
        directory: directory.to_path_buf(),
    })
}

fn numeric_prefix(name: &str) -> Option<&str> {
    let (prefix, _) = name.split_once('_')?;

    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(prefix)
}

/// Lists every drill of `kind` in `directory`, ordered by number.
///
/// # Errors
///
/// Returns an error if `directory` cannot be listed.
pub fn list_drills(directory: &Path, kind: DrillKind) -> Result<Vec<DrillFile>> {
    let mut drills: Vec<DrillFile> = read_file_names(directory)?
        .into_iter()
        .filter(|name| kind.accepts_extension(name))
        .filter_map(|name| {
            let id = numeric_prefix(&name)?.to_string();
            Some(DrillFile {
                id,
                filename: name,
                directory: directory.to_path_buf(),
            })
        })
        .collect();

    drills.sort_by(|a, b| {
        let a_number = a.id.parse::<u64>().unwrap_or(u64::MAX);
        let b_number = b.id.parse::<u64>().unwrap_or(u64::MAX);
        a_number
            .cmp(&b_number)
            .then_with(|| a.filename.cmp(&b.filename))
    });

    Ok(drills)
}
