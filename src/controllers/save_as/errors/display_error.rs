use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    Closed,
    Rejected { reason: String },
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "display has been closed"),
            Self::Rejected { reason } => write!(f, "display rejected update: {}", reason),
        }
    }
}

impl Error for DisplayError {}
