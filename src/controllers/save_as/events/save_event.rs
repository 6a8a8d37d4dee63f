use std::path::PathBuf;

use crate::core::data::progress_sample::ProgressSample;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub progress: u32,
    pub maximum: u32,
    pub message: String,
    pub warning: bool,
}

impl From<&ProgressSample> for StatusUpdate {
    fn from(sample: &ProgressSample) -> Self {
        Self {
            progress: sample.progress,
            maximum: sample.maximum,
            message: sample.message.clone(),
            warning: sample.warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveEvent {
    FileSaved { source: PathBuf },
    Status(StatusUpdate),
}
