use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DreamError {
    /// The destination could not be opened or written.
    #[error("failed to write dream memory to {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode dream memory: {0}")]
    Encode(#[from] serde_json::Error),
}

impl DreamError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the file-system failure class raised by persistence.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
