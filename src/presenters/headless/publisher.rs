use log::{debug, info, warn};

use crate::controllers::save_as::events::save_event::SaveEvent;
use crate::controllers::save_as::ports::EventPublisherPort;

/// Publishes save events to the log. Used when no event bus is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventPublisher;

impl EventPublisherPort for LogEventPublisher {
    fn publish(&self, event: SaveEvent) {
        match event {
            SaveEvent::FileSaved { source } => info!("file saved: {}", source.display()),
            SaveEvent::Status(update) if update.warning => warn!(
                "{} ({}/{})",
                update.message, update.progress, update.maximum
            ),
            SaveEvent::Status(update) => debug!(
                "{} ({}/{})",
                update.message, update.progress, update.maximum
            ),
        }
    }
}
