use std::path::Path;
use std::sync::{Arc, Mutex};

use log::{debug, error, info, warn};

use crate::controllers::save_as::data::save_config::SaveConfig;
use crate::controllers::save_as::data::save_outcome::SaveOutcome;
use crate::controllers::save_as::data::save_request::SaveRequest;
use crate::controllers::save_as::errors::display_error::DisplayError;
use crate::controllers::save_as::errors::save_error::SaveError;
use crate::controllers::save_as::events::save_event::SaveEvent;
use crate::controllers::save_as::ports::{
    DisplayHandle, DisplayPort, EventPublisherPort, FileSystemPort, ImageEncoderPort,
    PromptPort,
};
use crate::controllers::save_as::status_forwarder::ThrottledStatusForwarder;
use crate::core::actions::overwrite_guard::{OverwriteCheck, decide_overwrite};
use crate::core::actions::progress_throttler::ProgressThrottler;

/// Writes a dataset to a user-chosen file and brings the dataset and its
/// display in line with the new file once the write has succeeded.
///
/// Saves of the same dataset are serialized by the dataset lock, which is
/// held until the dataset has been updated. `FileSaved` subscribers and the
/// display run after it is released.
pub struct SaveCoordinator {
    encoder: Arc<dyn ImageEncoderPort>,
    prompt: Arc<dyn PromptPort>,
    publisher: Arc<dyn EventPublisherPort>,
    file_system: Arc<dyn FileSystemPort>,
    config: SaveConfig,
}

impl SaveCoordinator {
    pub fn new(
        encoder: Arc<dyn ImageEncoderPort>,
        prompt: Arc<dyn PromptPort>,
        publisher: Arc<dyn EventPublisherPort>,
        file_system: Arc<dyn FileSystemPort>,
    ) -> Self {
        Self {
            encoder,
            prompt,
            publisher,
            file_system,
            config: SaveConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SaveConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &SaveConfig {
        &self.config
    }

    pub fn run(&self, request: &SaveRequest) -> Result<SaveOutcome, SaveError> {
        let mut dataset = request
            .dataset()
            .lock()
            .map_err(|_| SaveError::DatasetUnavailable)?;

        let target_path = self.file_system.resolve(request.target_path());
        let source_path = dataset
            .source_path()
            .map(|source| self.file_system.resolve(source));

        let check = OverwriteCheck {
            target_path: &target_path,
            file_exists: self.file_system.exists(&target_path),
            source_path: source_path.as_deref(),
            dataset_dirty: dataset.is_dirty(),
        };

        let decision = decide_overwrite(&check, &self.config.dialog_title, |prompt| {
            self.prompt.ask(prompt)
        });
        debug!("overwrite check {:?} -> {:?}", check, decision);

        if !decision.proceeds() {
            info!("keeping existing file {}", target_path.display());
            return Ok(SaveOutcome::Declined);
        }

        let throttler = ProgressThrottler::new(self.config.throttle_interval);
        let forwarder = ThrottledStatusForwarder::new(&throttler, self.publisher.as_ref());

        if let Err(e) = self
            .encoder
            .encode(&target_path, dataset.image(), &forwarder)
        {
            error!("could not save {}: {}", target_path.display(), e);
            return Err(SaveError::Encode(e));
        }

        // the file exists now, so this resolves to its canonical form
        let saved_path = self.file_system.resolve(request.target_path());

        let file_name = file_name_of(request.target_path());
        dataset.set_name(file_name.as_str());
        dataset.set_dirty(false);
        dataset.set_source_path(Some(saved_path.clone()));

        // subscribers may read the dataset on FileSaved
        drop(dataset);

        self.publisher.publish(SaveEvent::FileSaved {
            source: saved_path.clone(),
        });

        sync_display(request.display(), &file_name);

        info!("saved {}", saved_path.display());
        Ok(SaveOutcome::Saved { path: saved_path })
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

/// Best effort: the file is already written, so a display that has gone
/// away or refuses the update does not fail the save.
fn sync_display(display: &DisplayHandle, file_name: &str) {
    let display = match live_display(display) {
        Ok(display) => display,
        Err(e) => {
            warn!("not renaming display: {}", e);
            return;
        }
    };

    let Ok(mut display) = display.lock() else {
        warn!("display lock poisoned; not renaming it");
        return;
    };

    if let Err(e) = display.set_title(file_name) {
        warn!("could not retitle display: {}", e);
    }

    if let Err(e) = display.set_name(file_name) {
        warn!("could not rename display: {}", e);
    }

    if let Err(e) = display.update() {
        warn!("could not refresh display: {}", e);
    }
}

fn live_display(display: &DisplayHandle) -> Result<Arc<Mutex<dyn DisplayPort>>, DisplayError> {
    display.upgrade().ok_or(DisplayError::Closed)
}
