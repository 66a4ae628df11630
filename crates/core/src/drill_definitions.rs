use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Width numeric ids are padded to for component drills.
pub const COMPONENT_ID_WIDTH: usize = 2;

/// Extension a script drill must carry.
pub const SCRIPT_EXTENSION: &str = "js";

/// The two flavours of drill and the file naming rules that come with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillKind {
    /// Plain scripts, run by the script runtime. The id is used verbatim and
    /// only `.js` files are candidates.
    Script,
    /// UI components mounted through the bootstrap entry. The id is
    /// left-padded to two digits and any extension is accepted.
    Component,
}

impl DrillKind {
    /// Turns a user supplied id into the prefix used for lookup.
    #[must_use]
    pub fn normalize_id(self, id: &str) -> String {
        match self {
            DrillKind::Script => id.to_string(),
            DrillKind::Component => pad_drill_id(id),
        }
    }

    #[must_use]
    pub fn accepts_extension(self, filename: &str) -> bool {
        match self {
            DrillKind::Script => Path::new(filename)
                .extension()
                .is_some_and(|extension| extension == SCRIPT_EXTENSION),
            DrillKind::Component => true,
        }
    }
}

/// Left-pads `id` with `'0'` up to [`COMPONENT_ID_WIDTH`] characters.
///
/// Ids that are already wide enough are returned unchanged.
///
/// ```
/// use drill_runner_core::drill_definitions::pad_drill_id;
///
/// assert_eq!(pad_drill_id("7"), "07");
/// assert_eq!(pad_drill_id("13"), "13");
/// assert_eq!(pad_drill_id("123"), "123");
/// ```
#[must_use]
pub fn pad_drill_id(id: &str) -> String {
    format!("{id:0>width$}", width = COMPONENT_ID_WIDTH)
}

/// A drill file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillFile {
    /// Prefix the file was matched on, without the trailing `_`.
    pub id: String,
    pub filename: String,
    pub directory: PathBuf,
}

impl DrillFile {
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    /// File name with its extension stripped, as it would be imported.
    #[must_use]
    pub fn module_name(&self) -> String {
        Path::new(&self.filename)
            .file_stem()
            .map_or_else(|| self.filename.clone(), |stem| stem.to_string_lossy().into_owned())
    }

    /// Human readable title derived from the file name,
    /// e.g. `13_react-usestate-drill.jsx` gives `react usestate drill`.
    #[must_use]
    pub fn description(&self) -> String {
        let module_name = self.module_name();
        let title = module_name
            .strip_prefix(&format!("{}_", self.id))
            .unwrap_or(module_name.as_str());

        title.replace(['-', '_'], " ")
    }
}

impl Display for DrillFile {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} - {}", self.id, self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drill(id: &str, filename: &str) -> DrillFile {
        DrillFile {
            id: id.to_string(),
            filename: filename.to_string(),
            directory: PathBuf::from("/repo/src/drills"),
        }
    }

    #[test]
    fn test_pad_drill_id() {
        assert_eq!(pad_drill_id("7"), "07");
        assert_eq!(pad_drill_id("07"), "07");
        assert_eq!(pad_drill_id("22"), "22");
        assert_eq!(pad_drill_id("100"), "100");
    }

    #[test]
    fn test_normalize_id_per_kind() {
        assert_eq!(DrillKind::Script.normalize_id("1"), "1");
        assert_eq!(DrillKind::Component.normalize_id("1"), "01");
    }

    #[test]
    fn test_accepts_extension() {
        assert!(DrillKind::Script.accepts_extension("01_basic.js"));
        assert!(!DrillKind::Script.accepts_extension("01_basic.jsx"));
        assert!(!DrillKind::Script.accepts_extension("01_basic.js.map"));
        assert!(!DrillKind::Script.accepts_extension("01_js"));
        assert!(DrillKind::Component.accepts_extension("13_state.jsx"));
        assert!(DrillKind::Component.accepts_extension("13_state.tsx"));
    }

    #[test]
    fn test_module_name_strips_extension() {
        let file = drill("13", "13_react-usestate-decision-drill.jsx");
        assert_eq!(file.module_name(), "13_react-usestate-decision-drill");
    }

    #[test]
    fn test_path_joins_directory() {
        let file = drill("15", "15_react-useref-drill.jsx");
        assert_eq!(
            file.path(),
            PathBuf::from("/repo/src/drills/15_react-useref-drill.jsx")
        );
    }

    #[test]
    fn test_display_uses_description() {
        let file = drill("19", "19_usememo-usecallback-drill.jsx");
        assert_eq!(format!("{file}"), "19 - usememo usecallback drill");
    }
}
