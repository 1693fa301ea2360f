//! File-backed property store.
//!
//! Parses a conventional `.properties` file: `key=value` or `key: value` lines,
//! `#` and `!` comment lines, and a trailing `\` to continue a value on the next
//! line. The file is read once; the reader never reloads it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::source::PropertyReader;
use super::ConfigError;

/// Properties loaded from a single file.
#[derive(Debug, Clone)]
pub struct FilePropertyReader {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePropertyReader {
    /// Reads and parses the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let reader = Self::parse(path, &contents);
        debug!(
            path = %path.display(),
            count = reader.values.len(),
            "loaded property file"
        );
        Ok(reader)
    }

    /// Parses `contents` as if it had been read from `path`.
    pub fn parse(path: impl AsRef<Path>, contents: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            values: parse_properties(contents),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PropertyReader for FilePropertyReader {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}

fn parse_properties(contents: &str) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut lines = contents.lines();

    while let Some(line) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        if key.is_empty() {
            continue;
        }
        values.insert(key.to_string(), value.to_string());
    }

    values
}

/// A line continues if it ends in an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    match line.find(['=', ':']) {
        Some(idx) => (line[..idx].trim(), line[idx + 1..].trim()),
        None => (line.trim(), ""),
    }
}
