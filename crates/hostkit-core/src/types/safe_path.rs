//! Validated safe path type for archive extraction.

use crate::HostkitError;
use crate::Result;
use crate::error::io_error;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use super::DestDir;

/// A validated relative path that is safe for extraction.
///
/// # Security Properties
///
/// - Can ONLY be constructed through [`SafePath::validate`]
/// - NO `From<PathBuf>` implementation
/// - Lexically normalized: no `.` or `..` components remain
/// - Resolves strictly below the destination directory
///
/// # Examples
///
/// ```no_run
/// use hostkit_core::types::DestDir;
/// use hostkit_core::types::SafePath;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::create("/tmp/out")?;
///
/// let safe = SafePath::validate(Path::new("foo/bar.txt"), &dest)?;
/// assert_eq!(safe.as_path(), Path::new("foo/bar.txt"));
///
/// assert!(SafePath::validate(Path::new("../etc/passwd"), &dest).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Validates an archive entry name against a destination directory.
    ///
    /// # Validation Steps
    ///
    /// 1. Reject null bytes
    /// 2. Reject absolute names and platform prefixes
    /// 3. Normalize lexically (`.` dropped, `..` pops the previous component)
    /// 4. Reject names that climb above the root or normalize to nothing
    /// 5. Verify the joined target lies strictly within `dest`
    /// 6. Verify the nearest existing ancestor, and the target itself if it
    ///    exists, still canonicalize inside `dest` (blocks symlinked parents)
    /// 7. Reject a target that is a dangling symlink, since creating the file
    ///    would follow the link to wherever it points
    ///
    /// No write happens here; this runs before anything touches the disk.
    ///
    /// # Errors
    ///
    /// - `HostkitError::PathTraversal` if any check fails
    /// - `HostkitError::Io` if an existing ancestor cannot be canonicalized
    pub fn validate(path: &Path, dest: &DestDir) -> Result<Self> {
        let traversal = || HostkitError::PathTraversal {
            path: path.to_path_buf(),
        };

        if has_null_bytes(path) {
            return Err(traversal());
        }

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !normalized.pop() {
                        return Err(traversal());
                    }
                }
                Component::RootDir | Component::Prefix(_) => return Err(traversal()),
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(traversal());
        }

        let resolved = dest.as_path().join(&normalized);
        if !dest.strictly_contains(&resolved) {
            return Err(traversal());
        }

        if let Some(ancestor) = resolved.parent().and_then(nearest_existing) {
            let canonical = ancestor
                .canonicalize()
                .map_err(|e| io_error("canonicalize", ancestor, &e))?;
            if !canonical.starts_with(dest.as_path()) {
                return Err(traversal());
            }
        }

        match resolved.canonicalize() {
            Ok(canonical) => {
                if !dest.strictly_contains(&canonical) {
                    return Err(traversal());
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if resolved.symlink_metadata().is_ok() {
                    return Err(traversal());
                }
            }
            Err(e) => return Err(io_error("canonicalize", &resolved, &e)),
        }

        Ok(Self(normalized))
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

/// Walks up from `path` to the first ancestor that exists on disk.
fn nearest_existing(path: &Path) -> Option<&Path> {
    path.ancestors().find(|p| p.symlink_metadata().is_ok())
}

/// Checks if a path contains null bytes.
#[cfg(unix)]
fn has_null_bytes(path: &Path) -> bool {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().contains(&b'\0')
}

/// Checks if a path contains null bytes.
#[cfg(not(unix))]
fn has_null_bytes(path: &Path) -> bool {
    path.to_str().is_none_or(|s| s.contains('\0'))
}
