use crate::controllers::save_as::events::save_event::SaveEvent;

/// Receives the events of a save.
///
/// `Status` events arrive while the encoder runs, with the dataset lock held;
/// a subscriber must not lock the dataset from them. `FileSaved` is published
/// after the dataset has been updated and released.
pub trait EventPublisherPort: Send + Sync {
    fn publish(&self, event: SaveEvent);
}
