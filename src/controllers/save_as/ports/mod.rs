//! Port definitions for the save-as workflow.
//!
//! Every collaborator the coordinator talks to sits behind one of these
//! traits so hosts can plug in their own encoder, dialogs, event bus,
//! filesystem and window system.

pub mod display;
pub mod event_publisher;
pub mod file_system;
pub mod image_encoder;
pub mod prompt;

pub use display::{DisplayHandle, DisplayPort};
pub use event_publisher::EventPublisherPort;
pub use file_system::FileSystemPort;
pub use image_encoder::{IgnoreProgress, ImageEncoderPort, ProgressListener};
pub use prompt::{NoPrompt, PromptPort};
