use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The file was written to `path` (resolved form).
    Saved { path: PathBuf },
    /// The user chose not to overwrite an existing file. Nothing changed.
    Declined,
}

impl SaveOutcome {
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}
