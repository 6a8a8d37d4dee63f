use std::path::{Path, PathBuf};

pub trait FileSystemPort: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    /// Absolute, and canonical where the path can be canonicalized.
    fn resolve(&self, path: &Path) -> PathBuf;
}
