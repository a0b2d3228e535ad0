//! Output directory management
//!
//! The store owns the output directory: it clears and recreates it at the
//! start of a crawl and writes each fetched body under its mapped relative
//! path, creating parent directories on demand.

use crate::MirrorError;
use std::path::{Path, PathBuf};

/// Writes fetched bodies into the output directory
#[derive(Debug, Clone)]
pub struct MirrorStore {
    root: PathBuf,
}

impl MirrorStore {
    /// Prepares the output directory for a fresh crawl
    ///
    /// An existing directory is removed first so the mirror never mixes
    /// files from two runs. Failure here is fatal for the crawl.
    ///
    /// # Arguments
    ///
    /// * `root` - The output directory path
    pub fn prepare(root: &Path) -> Result<Self, MirrorError> {
        if root.exists() {
            std::fs::remove_dir_all(root).map_err(|source| MirrorError::OutputDir {
                path: root.to_path_buf(),
                source,
            })?;
        }

        std::fs::create_dir_all(root).map_err(|source| MirrorError::OutputDir {
            path: root.to_path_buf(),
            source,
        })?;

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Writes a body at its mapped path, creating parent directories
    ///
    /// An existing file at the same path is overwritten; when several URLs
    /// map to one path the last write wins.
    ///
    /// # Arguments
    ///
    /// * `relative` - The mapped path relative to the output root
    /// * `body` - The raw bytes to write
    pub async fn write(&self, relative: &Path, body: &[u8]) -> std::io::Result<()> {
        let target = self.root.join(relative);

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&target, body).await
    }

    /// Returns the output root
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let store = MirrorStore::prepare(&dir.path().join("out")).unwrap();

        store
            .write(Path::new("a/b/c.css"), b"body{}")
            .await
            .unwrap();

        let written = std::fs::read(store.root().join("a/b/c.css")).unwrap();
        assert_eq!(written, b"body{}");
    }

    #[tokio::test]
    async fn test_prepare_clears_existing_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");

        std::fs::create_dir_all(out.join("stale")).unwrap();
        std::fs::write(out.join("stale/old.html"), b"old").unwrap();

        let store = MirrorStore::prepare(&out).unwrap();

        assert!(!store.root().join("stale").exists());
        assert!(store.root().exists());
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let store = MirrorStore::prepare(&dir.path().join("out")).unwrap();

        store.write(Path::new("index.html"), b"first").await.unwrap();
        store.write(Path::new("index.html"), b"second").await.unwrap();

        let written = std::fs::read(store.root().join("index.html")).unwrap();
        assert_eq!(written, b"second");
    }

    #[test]
    fn test_prepare_on_fresh_path() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("brand-new");
        let store = MirrorStore::prepare(&out).unwrap();
        assert!(store.root().is_dir());
    }
}
