use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors from interpreting a line of player input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("no input, enter a column number")]
    Empty,

    #[error("'{0}' is not a column number")]
    NotAColumn(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.cols must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.cols must be > 0"
        );
    }

    #[test]
    fn test_file_read_error_display() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("connect_four.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file connect_four.toml: denied"
        );
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::NotAColumn("abc".to_string());
        assert_eq!(err.to_string(), "'abc' is not a column number");
    }
}
