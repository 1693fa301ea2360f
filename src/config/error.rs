use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("could not find property file at any of: {}", AttemptedPaths(.attempted))]
    NotFound { attempted: Vec<PathBuf> },

    #[error("failed to read property file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("required property '{key}' is missing from {source_name}")]
    MissingProperty { key: String, source_name: String },

    #[error("property '{key}' has value '{value}', expected {expected}")]
    InvalidFormat {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("configuration is invalid: {}", ErrorList(.0))]
    Invalid(Vec<ConfigError>),
}

impl ConfigError {
    pub(crate) fn invalid_format(key: &str, value: &str, expected: &'static str) -> Self {
        Self::InvalidFormat {
            key: key.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}

struct AttemptedPaths<'a>(&'a [PathBuf]);

impl fmt::Display for AttemptedPaths<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(no candidates)");
        }
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", path.display())?;
        }
        Ok(())
    }
}

struct ErrorList<'a>(&'a [ConfigError]);

impl fmt::Display for ErrorList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}
