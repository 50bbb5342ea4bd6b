//! Errors raised by the advisory core

use thiserror::Error;

/// The only failure the core reports; everything else degrades to a best-effort result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisoryError {
    #[error("No disease data available for {0}")]
    UnsupportedCrop(String),
}

pub type AdvisoryResult<T> = Result<T, AdvisoryError>;
