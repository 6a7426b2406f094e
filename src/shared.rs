//! Thread-safe handle over a [`DreamSession`]
//!
//! The session's insight list and its generator are guarded by one lock,
//! held for the whole of each operation.

use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;

use crate::dream::{DreamSession, InsightRecord, SolutionBatch, TuneOutcome};
use crate::error::DreamError;

#[derive(Debug, Clone, Default)]
pub struct SharedDreamSession {
    inner: Arc<Mutex<DreamSession>>,
}

impl SharedDreamSession {
    pub fn new(session: DreamSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn dream(&self, problem: &str) -> InsightRecord {
        self.inner.lock().dream(problem)
    }

    pub fn generate_candidate_solutions(&self, problem: &str) -> SolutionBatch {
        self.inner.lock().generate_candidate_solutions(problem)
    }

    pub fn tune(&self) -> TuneOutcome {
        self.inner.lock().tune()
    }

    /// Persist while holding the lock, so no dream lands mid-write
    pub fn persist(&self, destination: impl AsRef<Path>) -> Result<(), DreamError> {
        self.inner.lock().persist(destination)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Copy of the insights recorded so far
    pub fn snapshot(&self) -> Vec<InsightRecord> {
        self.inner.lock().insights().to_vec()
    }

    /// Recover the session if this is the last handle
    pub fn into_inner(self) -> Result<DreamSession, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl From<DreamSession> for SharedDreamSession {
    fn from(session: DreamSession) -> Self {
        Self::new(session)
    }
}
