use std::path::Path;

use crate::controllers::save_as::errors::encode_error::EncodeError;
use crate::core::data::image::Image;
use crate::core::data::progress_sample::ProgressSample;

/// Receives progress while an encoder runs. May be called from worker threads.
pub trait ProgressListener: Sync {
    fn status_updated(&self, sample: ProgressSample);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreProgress;

impl ProgressListener for IgnoreProgress {
    fn status_updated(&self, _sample: ProgressSample) {}
}

pub trait ImageEncoderPort: Send + Sync {
    fn encode(
        &self,
        path: &Path,
        image: &Image,
        progress: &dyn ProgressListener,
    ) -> Result<(), EncodeError>;
}
