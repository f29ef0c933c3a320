//! Idempotent destination directory provisioning

use routecp_types::{Error, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Ensure that `path` exists as a directory, creating missing ancestors
///
/// Creation is a single idempotent operation rather than a check-then-act
/// pair: an ancestor that already exists, or that a concurrent run creates
/// first, is not an error. Only a genuine refusal by the filesystem (a
/// path component that is a file, permission denied) is reported, as
/// [`Error::DirectoryCreateFailed`] carrying the offending path.
pub async fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Err(error) = fs::create_dir_all(path).await {
        // The precondition may have been satisfied while we were failing:
        // another creator winning the race still leaves the directory there.
        match fs::metadata(path).await {
            Ok(meta) if meta.is_dir() => {}
            _ => return Err(Error::directory_create_failed(path, error.to_string())),
        }
    }

    debug!("destination directory ready: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use routecp_types::ErrorKind;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_creates_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b/c");

        ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("x/y");

        ensure_dir(&nested).await.unwrap();
        ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_existing_directory_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        ensure_dir(temp_dir.path()).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_in_the_way_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        tokio::fs::write(&file, b"content").await.unwrap();

        let error = ensure_dir(file.join("child")).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DirectoryCreateFailed);
        assert!(error.to_string().contains("could not create destination"));
    }
}
