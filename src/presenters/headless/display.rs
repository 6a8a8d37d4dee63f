use log::info;

use crate::controllers::save_as::errors::display_error::DisplayError;
use crate::controllers::save_as::ports::DisplayPort;

/// Headless display that keeps its name and title and logs refreshes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogDisplay {
    name: String,
    title: String,
    refreshes: usize,
}

impl LogDisplay {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            refreshes: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }
}

impl DisplayPort for LogDisplay {
    fn set_title(&mut self, title: &str) -> Result<(), DisplayError> {
        self.title = title.to_owned();
        Ok(())
    }

    fn set_name(&mut self, name: &str) -> Result<(), DisplayError> {
        self.name = name.to_owned();
        Ok(())
    }

    fn update(&mut self) -> Result<(), DisplayError> {
        self.refreshes += 1;
        info!("display \"{}\" now titled \"{}\"", self.name, self.title);
        Ok(())
    }
}
