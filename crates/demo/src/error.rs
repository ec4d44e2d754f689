//! Errors at the output boundary.
//!
//! Building the transcript cannot fail; only writing it out can.

use thiserror::Error;

pub type DemoResult<T> = Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    /// The rendered transcript could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
