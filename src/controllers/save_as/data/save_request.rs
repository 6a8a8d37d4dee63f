use std::path::{Path, PathBuf};

use crate::controllers::save_as::ports::DisplayHandle;
use crate::core::data::dataset::DatasetHandle;

/// One "save as" invocation: where to write, what to write, and which
/// display to keep in step with the dataset.
#[derive(Clone)]
pub struct SaveRequest {
    target_path: PathBuf,
    dataset: DatasetHandle,
    display: DisplayHandle,
}

impl SaveRequest {
    #[must_use]
    pub fn new(target_path: impl Into<PathBuf>, dataset: DatasetHandle, display: DisplayHandle) -> Self {
        Self {
            target_path: target_path.into(),
            dataset,
            display,
        }
    }

    #[must_use]
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    #[must_use]
    pub fn dataset(&self) -> &DatasetHandle {
        &self.dataset
    }

    #[must_use]
    pub fn display(&self) -> &DisplayHandle {
        &self.display
    }
}
