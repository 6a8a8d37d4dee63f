use std::path::PathBuf;
use std::{error::Error, fmt, io};

use crate::core::data::image::PixelType;

#[derive(Debug)]
pub enum EncodeError {
    UnsupportedFormat {
        path: PathBuf,
    },
    IncompatibleType {
        pixel_type: PixelType,
        format: &'static str,
    },
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat { path } => {
                write!(f, "no encoder for file type of {}", path.display())
            }
            Self::IncompatibleType { pixel_type, format } => {
                write!(f, "{} images cannot be written as {}", pixel_type, format)
            }
            Self::Io { path, source } => {
                write!(f, "failed writing {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
