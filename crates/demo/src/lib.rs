//! `menagerie-demo` — the demonstration routine.
//!
//! Builds the two fixture animals and walks them through the `Describable`
//! capability and their concrete types, collecting every line in a
//! [`Transcript`]. The `menagerie` binary prints that transcript.

pub mod entities;
pub mod error;
pub mod scenario;

pub use error::{DemoError, DemoResult};
pub use scenario::{Scenario, run_demo};

use std::io;

use menagerie_core::Transcript;

/// Runs the whole demonstration and writes it to `w`.
///
/// Returns the transcript that was written.
pub fn write_demo<W: io::Write>(w: W) -> DemoResult<Transcript> {
    let transcript = run_demo();
    transcript.write_to(w)?;
    Ok(transcript)
}
