//! Unified test utilities for routecp integration tests

use routecp_types::FileObject;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A working tree holding source files under `work/` plus destination roots
#[derive(Debug)]
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("temporary directory"),
        }
    }

    /// Base directory file objects are discovered under
    pub fn base(&self) -> PathBuf {
        self.temp_dir.path().join("work")
    }

    /// Absolute path of a destination root
    pub fn dest(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Create a source file under the base and return its absolute path
    pub fn write_source(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.base().join(relative);
        fs::create_dir_all(path.parent().expect("source files have parents"))
            .expect("source tree");
        fs::write(&path, content).expect("source file");
        path
    }

    /// Build a content-carrying file object for a source created with
    /// [`write_source`](Self::write_source)
    pub fn content_object(&self, relative: &str, content: &str) -> FileObject {
        let path = self.write_source(relative, content);
        FileObject::with_content(self.base(), path)
    }

    /// Read a file under a destination root
    pub fn read_dest(&self, name: &str, relative: &str) -> String {
        fs::read_to_string(self.dest(name).join(relative)).expect("destination file")
    }

    /// Check whether a path exists under a destination root
    pub fn dest_exists(&self, name: &str, relative: &str) -> bool {
        self.dest(name).join(relative).exists()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate deterministic pseudo-random content of `size` bytes
pub fn generate_content(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();
    for i in 0..size {
        i.hash(&mut hasher);
        data.push((hasher.finish() % 256) as u8);
    }
    data
}
