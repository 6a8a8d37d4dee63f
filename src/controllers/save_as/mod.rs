//! "Save as" workflow for an open dataset.
//!
//! # Architecture
//!
//! The coordinator follows the ports & adapters pattern:
//! - **Input**: a `SaveRequest` naming the target path, dataset and display
//! - **Output**: `SaveEvent`s through an `EventPublisherPort`
//! - **Core**: the overwrite guard and progress throttler from `core/`

mod coordinator;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
mod status_forwarder;

pub use coordinator::SaveCoordinator;
pub use data::{save_config::SaveConfig, save_outcome::SaveOutcome, save_request::SaveRequest};
pub use errors::{display_error::DisplayError, encode_error::EncodeError, save_error::SaveError};
pub use events::save_event::{SaveEvent, StatusUpdate};
pub use status_forwarder::ThrottledStatusForwarder;
