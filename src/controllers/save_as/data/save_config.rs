use std::time::Duration;

use crate::core::actions::progress_throttler::DEFAULT_THROTTLE_INTERVAL;

const DEFAULT_DIALOG_TITLE: &str = "Save";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveConfig {
    /// Minimum spacing between republished intermediate progress updates.
    pub throttle_interval: Duration,
    /// Title of the overwrite confirmation dialog.
    pub dialog_title: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            throttle_interval: DEFAULT_THROTTLE_INTERVAL,
            dialog_title: DEFAULT_DIALOG_TITLE.to_owned(),
        }
    }
}

impl SaveConfig {
    #[must_use]
    pub fn with_throttle_interval(mut self, throttle_interval: Duration) -> Self {
        self.throttle_interval = throttle_interval;
        self
    }

    #[must_use]
    pub fn with_dialog_title(mut self, dialog_title: impl Into<String>) -> Self {
        self.dialog_title = dialog_title.into();
        self
    }
}
