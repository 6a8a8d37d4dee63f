use std::{error::Error, fmt};

use crate::controllers::save_as::errors::encode_error::EncodeError;

#[derive(Debug)]
pub enum SaveError {
    /// The encoder could not write the file. Dataset and display are untouched.
    Encode(EncodeError),
    /// The dataset lock was poisoned by a panic elsewhere.
    DatasetUnavailable,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(e) => write!(f, "save failed: {}", e),
            Self::DatasetUnavailable => write!(f, "dataset is unavailable"),
        }
    }
}

impl Error for SaveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(e) => Some(e),
            Self::DatasetUnavailable => None,
        }
    }
}

impl From<EncodeError> for SaveError {
    fn from(error: EncodeError) -> Self {
        Self::Encode(error)
    }
}
