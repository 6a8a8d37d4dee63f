use log::trace;

use crate::controllers::save_as::events::save_event::{SaveEvent, StatusUpdate};
use crate::controllers::save_as::ports::{EventPublisherPort, ProgressListener};
use crate::core::actions::progress_throttler::{Clock, ProgressThrottler};
use crate::core::data::progress_sample::ProgressSample;

/// Republishes encoder progress as status events, filtered by a throttler.
pub struct ThrottledStatusForwarder<'a, C: Clock> {
    throttler: &'a ProgressThrottler<C>,
    publisher: &'a dyn EventPublisherPort,
}

impl<'a, C: Clock> ThrottledStatusForwarder<'a, C> {
    pub fn new(throttler: &'a ProgressThrottler<C>, publisher: &'a dyn EventPublisherPort) -> Self {
        Self {
            throttler,
            publisher,
        }
    }
}

impl<C: Clock> ProgressListener for ThrottledStatusForwarder<'_, C> {
    fn status_updated(&self, sample: ProgressSample) {
        if !self.throttler.on_progress(&sample) {
            trace!("throttled progress {}/{}", sample.progress, sample.maximum);
            return;
        }

        self.publisher
            .publish(SaveEvent::Status(StatusUpdate::from(&sample)));
    }
}
