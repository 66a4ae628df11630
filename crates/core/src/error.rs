use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("A drill number is required.")]
    MissingDrillId,

    #[error("Invalid drill number: it may not be empty")]
    EmptyDrillId,

    #[error("Drill `{}` was not found in `{}`", .id, .directory)]
    DrillNotFound { id: String, directory: String },

    #[error("IO error with {} at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("The configured `{}` command is empty.", .0)]
    EmptyCommand(String),

    #[error("Error parsing bootstrap template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering bootstrap template: {}", .0)]
    Render(#[from] RenderError),

    #[error("The bootstrap template must reference `{{module_path}}` or `{{module_name}}`.")]
    TemplateWithoutModule,

    #[error("Failed to start `{}`: {}", .program, .original)]
    Spawn {
        program: String,
        original: std::io::Error,
    },

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),
}

impl Error {
    pub fn drill_not_found(id: String, directory: String) -> Self {
        Self::DrillNotFound { id, directory }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn spawn_error(program: String, original: std::io::Error) -> Self {
        Self::Spawn { program, original }
    }

    /// Whether the caller got the invocation wrong, as opposed to the
    /// environment failing underneath it.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::MissingDrillId | Self::EmptyDrillId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_id_and_directory() {
        let error = Error::drill_not_found("03".to_string(), "/repo/drills".to_string());
        let message = format!("{error}");
        assert!(message.contains("`03`"));
        assert!(message.contains("/repo/drills"));
    }

    #[test]
    fn test_is_usage() {
        assert!(Error::MissingDrillId.is_usage());
        assert!(Error::EmptyDrillId.is_usage());
        assert!(!Error::drill_not_found("1".to_string(), "d".to_string()).is_usage());
    }

    #[test]
    fn test_template_error_message_keeps_braces() {
        let message = format!("{}", Error::TemplateWithoutModule);
        assert!(message.contains("{module_path}"));
    }
}
