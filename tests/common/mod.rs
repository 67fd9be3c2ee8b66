//! Common test utilities for integration tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A test fixture that creates a temporary site directory.
pub struct TempSite {
    #[allow(dead_code)] // Kept to prevent TempDir from being dropped
    dir: TempDir,
    pub root: PathBuf,
}

impl TempSite {
    /// Creates a new empty site directory with no blog.toml.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        // Canonicalize to resolve symlinks (e.g., /var -> /private/var on macOS)
        let root = dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        Self { dir, root }
    }

    /// Creates a site directory containing the given blog.toml content.
    pub fn with_config(toml: &str) -> Self {
        let site = Self::new();
        site.write_config(toml);
        site
    }

    /// Writes (or overwrites) blog.toml at the site root.
    pub fn write_config(&self, toml: &str) {
        std::fs::write(self.root.join("blog.toml"), toml).expect("Failed to write blog.toml");
    }

    /// Creates a subdirectory under the site root.
    #[allow(dead_code)]
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir_path = self.root.join(path);
        std::fs::create_dir_all(&dir_path).expect("Failed to create directory");
        dir_path
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}
