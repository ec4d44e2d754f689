//! Ordered sink for the lines a demonstration produces.
//!
//! Behaviours append to a `Transcript` instead of printing directly, so the
//! same calls can be rendered to stdout, compared in tests, or dumped as JSON.

use std::io;

use serde::{Deserialize, Serialize};

/// Lines emitted so far, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line. Embedded newlines are kept verbatim.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Writes every line followed by `\n`, matching the `Display` rendering.
    pub fn write_to<W: io::Write>(&self, mut w: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(w, "{line}")?;
        }
        w.flush()
    }

    /// JSON array of the lines.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.lines)
    }
}

impl core::fmt::Display for Transcript {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl Extend<String> for Transcript {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}

impl From<Vec<String>> for Transcript {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}
