use std::sync::{Mutex, Weak};

use crate::controllers::save_as::errors::display_error::DisplayError;

/// Non-owning handle to the display showing a dataset.
pub type DisplayHandle = Weak<Mutex<dyn DisplayPort>>;

pub trait DisplayPort: Send {
    fn set_title(&mut self, title: &str) -> Result<(), DisplayError>;
    fn set_name(&mut self, name: &str) -> Result<(), DisplayError>;
    /// Redraws after changes.
    fn update(&mut self) -> Result<(), DisplayError>;
}
