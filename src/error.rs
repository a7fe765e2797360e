use crate::GameMode;

use std::{error::Error as StdError, fmt};

/// `Result<_, CalculateError>`
pub type CalculateResult<T> = Result<T, CalculateError>;

/// Anything that could go wrong while calculating difficulty or pp.
///
/// All calculations are deterministic so none of these are worth retrying;
/// they are reported to the caller right where they are detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalculateError {
    /// A required input was neither given directly nor derivable from a map.
    MissingInput(&'static str),
    /// A given input value is outside its valid domain.
    InvalidInput(&'static str),
    /// The map's mode has no registered calculator.
    UnsupportedMode(GameMode),
    /// Score versions other than 1 and 2 don't exist.
    UnsupportedScoreVersion(u32),
}

impl fmt::Display for CalculateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput(what) => write!(f, "missing input: {}", what),
            Self::InvalidInput(why) => write!(f, "invalid input: {}", why),
            Self::UnsupportedMode(mode) => {
                write!(f, "no calculator registered for mode {:?}", mode)
            }
            Self::UnsupportedScoreVersion(version) => {
                write!(f, "unsupported score version {}", version)
            }
        }
    }
}

impl StdError for CalculateError {}
