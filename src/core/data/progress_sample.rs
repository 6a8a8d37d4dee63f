/// A single progress report from an encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSample {
    pub progress: u32,
    pub maximum: u32,
    pub message: String,
    pub warning: bool,
}

impl ProgressSample {
    #[must_use]
    pub fn new(progress: u32, maximum: u32, message: impl Into<String>) -> Self {
        Self {
            progress,
            maximum,
            message: message.into(),
            warning: false,
        }
    }

    #[must_use]
    pub fn warning(progress: u32, maximum: u32, message: impl Into<String>) -> Self {
        Self {
            warning: true,
            ..Self::new(progress, maximum, message)
        }
    }

    /// Strictly between the first and the last step.
    #[must_use]
    pub fn is_intermediate(&self) -> bool {
        self.progress > 0 && self.progress < self.maximum
    }
}
