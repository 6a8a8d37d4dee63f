mod adapters;
mod controllers;
mod core;
mod presenters;
mod storage;

pub use controllers::save_as::ports::{
    DisplayHandle, DisplayPort, EventPublisherPort, FileSystemPort, IgnoreProgress,
    ImageEncoderPort, NoPrompt, ProgressListener, PromptPort,
};
pub use controllers::save_as::{
    DisplayError, EncodeError, SaveConfig, SaveCoordinator, SaveError, SaveEvent, SaveOutcome,
    SaveRequest, StatusUpdate, ThrottledStatusForwarder,
};
pub use crate::core::actions::overwrite_guard::{
    OverwriteCheck, OverwriteDecision, decide_overwrite, requires_confirmation,
};
pub use crate::core::actions::progress_throttler::{
    Clock, DEFAULT_THROTTLE_INTERVAL, MonotonicClock, ProgressThrottler, ThrottleState,
};
pub use crate::core::data::confirm_prompt::{ConfirmPrompt, MessageKind, OptionSet, PromptChoice};
pub use crate::core::data::dataset::{Dataset, DatasetHandle};
pub use crate::core::data::image::{Image, ImageError, PixelType};
pub use crate::core::data::progress_sample::ProgressSample;
pub use presenters::console::prompt::ConsolePrompt;
pub use presenters::file::ppm::PpmEncoder;
pub use presenters::headless::display::LogDisplay;
pub use presenters::headless::publisher::LogEventPublisher;
pub use storage::file_system::StdFileSystem;
