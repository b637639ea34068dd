use thiserror::Error;

/// Errors raised by grid access and the grid text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },

    #[error("grid parse error: {0}")]
    Parse(String),
}

/// Errors raised while dispatching a console command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("command not found: {0}")]
    NotFound(String),

    #[error("{command} takes at least {expected} argument(s), got {got}")]
    Arity { command: &'static str, expected: usize, got: usize },

    #[error("invalid grid size {0:?}")]
    InvalidSize(String),
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    #[must_use]
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::Invalid(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::OutOfBounds { x: 4, y: 1, width: 3, height: 3 };
        assert_eq!(err.to_string(), "cell (4, 1) is outside the 3x3 grid");

        let err = CommandError::Arity { command: "create", expected: 1, got: 0 };
        assert_eq!(err.to_string(), "create takes at least 1 argument(s), got 0");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
