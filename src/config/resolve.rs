//! Locating a property file among ordered candidate paths.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::ConfigError;

/// Returns the first candidate that exists, in the order given.
///
/// Each call probes the filesystem afresh. If nothing exists, the error lists the
/// absolute form of every candidate, so the message does not depend on the
/// working directory of whoever reads it.
pub fn resolve_path<I, P>(candidates: I) -> Result<PathBuf, ConfigError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut attempted = Vec::new();

    for candidate in candidates {
        let candidate = candidate.as_ref();
        // An unreadable parent directory counts as "not there".
        let exists = candidate.try_exists().unwrap_or(false);
        trace!(path = %candidate.display(), exists, "probing config candidate");

        if exists {
            debug!(path = %candidate.display(), "resolved config file");
            return Ok(candidate.to_path_buf());
        }
        attempted.push(absolute(candidate));
    }

    Err(ConfigError::NotFound { attempted })
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_first_existing_wins() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.properties");
        let second = dir.path().join("second.properties");
        fs::write(&first, "").unwrap();
        fs::write(&second, "").unwrap();

        assert_eq!(resolve_path([&first, &second]).unwrap(), first);
    }

    #[test]
    fn test_skips_missing_candidates() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("config/lobby/lobby.properties");
        let present = dir.path().join("lobby.properties");
        fs::write(&present, "").unwrap();

        assert_eq!(resolve_path([&missing, &present]).unwrap(), present);
    }

    #[test]
    fn test_later_candidate_does_not_override_earlier() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        let c = dir.path().join("c");
        fs::write(&b, "").unwrap();
        fs::write(&c, "").unwrap();

        assert_eq!(resolve_path([&a, &b, &c]).unwrap(), b);
    }

    #[test]
    fn test_not_found_lists_every_absolute_path() {
        let dir = tempdir().unwrap();
        let absolute_candidate = dir.path().join("nope.properties");
        let relative_candidate = PathBuf::from("surely/not/here/lobby.properties");

        let err = resolve_path([&absolute_candidate, &relative_candidate]).unwrap_err();
        let ConfigError::NotFound { attempted } = &err else {
            panic!("expected NotFound, got {err:?}");
        };

        assert_eq!(attempted.len(), 2);
        assert!(attempted.iter().all(|p| p.is_absolute()));
        assert_eq!(attempted[0], absolute_candidate);
        assert!(attempted[1].ends_with("surely/not/here/lobby.properties"));

        let message = err.to_string();
        for path in attempted {
            assert!(message.contains(&path.display().to_string()));
        }
    }

    #[test]
    fn test_no_caching_between_calls() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("late.properties");

        assert!(resolve_path([&path]).is_err());
        fs::write(&path, "").unwrap();
        assert_eq!(resolve_path([&path]).unwrap(), path);
    }

    #[test]
    fn test_empty_candidates() {
        let err = resolve_path(Vec::<PathBuf>::new()).unwrap_err();
        assert!(matches!(&err, ConfigError::NotFound { attempted } if attempted.is_empty()));
    }
}
