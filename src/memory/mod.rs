//! Memory module - persistence of recorded insights
//!
//! Writes a session's insights as a JSON array indented with four spaces.
//! Saving always truncates the destination; there is no append, merge,
//! backup or atomic rename, and nothing reads the file back.
//!
//! # Example
//!
//! ```no_run
//! use machine_dream::{memory, DreamSession};
//!
//! let mut session = DreamSession::new();
//! session.dream("optimize X");
//! memory::save(session.insights(), memory::DEFAULT_MEMORY_FILE)?;
//! # Ok::<(), machine_dream::DreamError>(())
//! ```

mod internal;

use std::path::Path;

use crate::dream::InsightRecord;
use crate::error::DreamError;

/// Destination used when none is configured
pub const DEFAULT_MEMORY_FILE: &str = "machine_dream_memory.json";

/// Save insights to `destination`, replacing whatever was there
///
/// Fails with [`DreamError::Io`] when the file cannot be created or written,
/// e.g. its parent directory does not exist.
pub fn save(records: &[InsightRecord], destination: impl AsRef<Path>) -> Result<(), DreamError> {
    internal::save(records, destination.as_ref())
}

/// Render insights exactly as [`save`] writes them
pub fn to_json(records: &[InsightRecord]) -> Result<String, DreamError> {
    internal::to_json(records)
}
