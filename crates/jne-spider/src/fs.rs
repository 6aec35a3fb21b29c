use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Create `dir` (and any missing parents), returning its absolute path.
pub async fn ensure_dir(dir: &Path) -> std::io::Result<PathBuf> {
    trace!("checking directory path: {:?}", dir);
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::canonicalize(dir).await
}

/// Write `bytes` to `path`, replacing any previous file.
///
/// The parent directory is created as necessary; the handle is closed before returning.
pub async fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, bytes).await?;
    debug!("{} bytes written to {:?}", bytes.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_file_creates_parents_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("icon.png");

        write_file(&path, b"first").await.unwrap();
        write_file(&path, b"second").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn ensure_dir_is_absolute() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ensure_dir(&tmp.path().join("out")).await.unwrap();
        assert!(dir.is_absolute());
        assert!(dir.is_dir());
    }
}
