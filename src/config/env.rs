use std::collections::BTreeMap;

use tracing::debug;

use super::source::PropertyReader;

/// Shadows another reader with values taken from environment variables.
///
/// A property `postgres_host` is looked up as `{PREFIX}{SEP}POSTGRES_HOST`. The
/// environment is read once, when the overlay is built.
#[derive(Debug)]
pub struct EnvOverlay {
    prefix: String,
    separator: String,
    overrides: BTreeMap<String, String>,
    inner: Box<dyn PropertyReader>,
}

impl EnvOverlay {
    pub fn new(
        inner: Box<dyn PropertyReader>,
        prefix: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self::from_vars(inner, prefix, separator, std::env::vars())
    }

    /// Builds the overlay from an explicit set of variables instead of the process
    /// environment.
    pub fn from_vars(
        inner: Box<dyn PropertyReader>,
        prefix: impl Into<String>,
        separator: impl Into<String>,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let prefix = prefix.into();
        let separator = separator.into();
        let prefix_with_sep = format!("{prefix}{separator}");

        let overrides: BTreeMap<String, String> = vars
            .into_iter()
            .filter_map(|(name, value)| {
                let key = name.strip_prefix(&prefix_with_sep)?;
                if key.is_empty() {
                    return None;
                }
                Some((key.to_lowercase(), value))
            })
            .collect();

        if !overrides.is_empty() {
            debug!(
                prefix = %prefix_with_sep,
                keys = ?overrides.keys().collect::<Vec<_>>(),
                "environment overrides active"
            );
        }

        Self {
            prefix,
            separator,
            overrides,
            inner,
        }
    }
}

impl PropertyReader for EnvOverlay {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .get(key)
            .map(String::as_str)
            .or_else(|| self.inner.lookup(key))
    }

    fn source_name(&self) -> String {
        format!(
            "{} (with {}{}* overrides)",
            self.inner.source_name(),
            self.prefix,
            self.separator
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::source::MapPropertyReader;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_override_shadows_inner() {
        let inner = MapPropertyReader::new([("port", "4000"), ("postgres_host", "db")]);
        let overlay = EnvOverlay::from_vars(
            Box::new(inner),
            "LOBBY",
            "__",
            vars(&[("LOBBY__PORT", "5000"), ("OTHER__PORT", "1")]),
        );

        assert_eq!(overlay.lookup("port"), Some("5000"));
        assert_eq!(overlay.lookup("postgres_host"), Some("db"));
        assert_eq!(overlay.lookup("missing"), None);
    }

    #[test]
    fn test_bare_prefix_ignored() {
        let overlay = EnvOverlay::from_vars(
            Box::new(MapPropertyReader::default()),
            "LOBBY",
            "__",
            vars(&[("LOBBY__", "x")]),
        );
        assert!(overlay.overrides.is_empty());
    }

    #[test]
    fn test_source_name_mentions_prefix() {
        let overlay = EnvOverlay::from_vars(
            Box::new(MapPropertyReader::default().named("lobby.properties")),
            "LOBBY",
            "__",
            Vec::new(),
        );
        assert_eq!(
            overlay.source_name(),
            "lobby.properties (with LOBBY__* overrides)"
        );
    }
}
