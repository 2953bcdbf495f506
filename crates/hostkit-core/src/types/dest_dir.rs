//! Validated destination directory type.

use crate::HostkitError;
use crate::Result;
use crate::error::io_error;
use std::path::Path;
use std::path::PathBuf;

/// A validated destination directory for archive extraction.
///
/// Once constructed, a `DestDir` is an existing directory represented by its
/// absolute canonical path. Every extracted entry is checked against this
/// canonical form.
///
/// # Examples
///
/// ```no_run
/// use hostkit_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::create("/tmp/unzipped_contents")?;
/// println!("Extracting to: {}", dest.as_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Creates a new `DestDir` from an existing directory.
    ///
    /// # Errors
    ///
    /// Returns `HostkitError::Io` if the path does not exist, is not a
    /// directory, or cannot be canonicalized.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            return Err(HostkitError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("destination directory does not exist: {}", path.display()),
            )));
        }

        if !path.is_dir() {
            return Err(HostkitError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("path is not a directory: {}", path.display()),
            )));
        }

        let canonical = path
            .canonicalize()
            .map_err(|e| io_error("canonicalize", &path, &e))?;

        Ok(Self(canonical))
    }

    /// Creates the directory (and any missing parents) if needed, then
    /// validates it like [`DestDir::new`].
    ///
    /// # Errors
    ///
    /// Returns `HostkitError::Io` if the directory cannot be created or
    /// validated.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        std::fs::create_dir_all(&path)
            .map_err(|e| io_error("create destination directory", &path, &e))?;
        Self::new(path)
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins a `SafePath` to this destination directory.
    #[inline]
    #[must_use]
    pub fn join(&self, safe_path: &super::SafePath) -> PathBuf {
        self.0.join(safe_path.as_path())
    }

    /// Returns `true` if `target` lies strictly below this directory.
    ///
    /// The comparison is component-wise, so `/out` never contains
    /// `/outside/x`, and the directory does not contain itself.
    #[must_use]
    pub fn strictly_contains(&self, target: &Path) -> bool {
        target != self.0 && target.starts_with(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dest_dir_valid() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dest = DestDir::new(temp.path()).expect("dest should be valid");
        assert!(dest.as_path().is_absolute());
    }

    #[test]
    fn test_dest_dir_nonexistent() {
        let result = DestDir::new("/nonexistent/directory/that/does/not/exist");
        assert!(matches!(result, Err(HostkitError::Io(_))));
    }

    #[test]
    fn test_dest_dir_not_a_directory() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let file_path = temp.path().join("file.txt");
        fs::write(&file_path, "test").expect("failed to write file");

        let result = DestDir::new(file_path);
        assert!(matches!(result, Err(HostkitError::Io(_))));
    }

    #[test]
    fn test_dest_dir_create_missing_parents() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let nested = temp.path().join("a").join("b").join("c");

        let dest = DestDir::create(&nested).expect("should create nested dirs");
        assert!(nested.is_dir());
        assert_eq!(dest.as_path(), nested.canonicalize().unwrap());
    }

    #[test]
    fn test_dest_dir_create_over_file_fails() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let file_path = temp.path().join("occupied");
        fs::write(&file_path, "x").unwrap();

        assert!(matches!(
            DestDir::create(&file_path),
            Err(HostkitError::Io(_))
        ));
    }

    #[test]
    fn test_dest_dir_canonicalization() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let subdir = temp.path().join("subdir");
        fs::create_dir(&subdir).expect("failed to create subdir");

        let path_with_dot = subdir.join(".").join("..");
        let dest = DestDir::new(path_with_dot).expect("should create dest dir");

        assert_eq!(dest.as_path(), temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_strictly_contains_partial_prefix() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let out = temp.path().join("out");
        fs::create_dir(&out).unwrap();
        let dest = DestDir::new(&out).unwrap();
        let base = dest.as_path().parent().unwrap().to_path_buf();

        assert!(dest.strictly_contains(&dest.as_path().join("file.txt")));
        assert!(dest.strictly_contains(&dest.as_path().join("a/b/c.txt")));
        assert!(!dest.strictly_contains(dest.as_path()));
        assert!(!dest.strictly_contains(&base.join("outside").join("x")));
        assert!(!dest.strictly_contains(&base.join("out2")));
        assert!(!dest.strictly_contains(&base));
    }

    #[test]
    #[cfg(unix)]
    fn test_dest_dir_with_symlink() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().expect("failed to create temp dir");
        let real_dir = temp.path().join("real");
        fs::create_dir(&real_dir).expect("failed to create real dir");
        let link = temp.path().join("link");
        symlink(&real_dir, &link).expect("failed to create symlink");

        let dest = DestDir::new(link).expect("should create from symlink");
        assert_eq!(dest.as_path(), real_dir.canonicalize().unwrap());
    }
}
