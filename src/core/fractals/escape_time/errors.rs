use std::{error::Error, fmt};

#[derive(Debug, PartialEq, Eq)]
pub enum EscapeTimeError {
    ZeroMaxIterations,
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for EscapeTimeError {}
