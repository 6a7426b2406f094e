//! Dream module - the dreaming session
//!
//! This module follows the public-interface / internal split:
//! - Public interface (this file): `DreamSession` and its operations
//! - Internal implementation: tokenizing and random draws in internal.rs
//!
//! A session owns an append-only list of [`InsightRecord`]s and the random
//! generator every operation draws from. Pass a seed to replay a session.
//!
//! # Example
//!
//! ```no_run
//! use machine_dream::dream::{DreamSession, TuneOutcome};
//!
//! let mut session = DreamSession::new();
//! assert_eq!(session.tune(), TuneOutcome::NothingToTune);
//!
//! let record = session.dream("Optimize neural network hyperparameters");
//! println!("dream {} chose {}", record.identifier, record.chosen_solution);
//! assert_eq!(session.len(), 1);
//! ```

mod internal;
mod types;

use fastrand::Rng;
use std::path::Path;
use tracing::{debug, info};

use crate::error::DreamError;
use crate::memory;

pub use types::{InsightRecord, SolutionBatch, StructuredInput, TuneOutcome, CANDIDATE_COUNT};

/// Holds the insights recorded so far and the generator that produced them
#[derive(Debug, Clone)]
pub struct DreamSession {
    insights: Vec<InsightRecord>,
    rng: Rng,
}

impl Default for DreamSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DreamSession {
    /// Empty session seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    /// Empty session with a deterministic generator
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed))
    }

    pub fn with_rng(rng: Rng) -> Self {
        Self {
            insights: Vec::new(),
            rng,
        }
    }

    /// Structure raw text into whitespace-separated tokens
    pub fn structure_text(raw: &str) -> StructuredInput {
        internal::structure_text(raw)
    }

    /// Invent three placeholder solutions for `problem` and choose one
    pub fn generate_candidate_solutions(&mut self, problem: &str) -> SolutionBatch {
        let batch = internal::generate_candidate_solutions(&mut self.rng, problem);
        debug!(
            solutions = ?batch.solutions,
            chosen = %batch.chosen_solution,
            "generated candidate solutions"
        );
        batch
    }

    /// Dream on a problem and record the resulting insight
    ///
    /// Always succeeds. The session grows by exactly one record, and a copy
    /// of that record is returned.
    pub fn dream(&mut self, problem: &str) -> InsightRecord {
        let structured_problem = Self::structure_text(problem);
        debug!(tokens = structured_problem.knowledge.len(), "structured problem");

        let batch = self.generate_candidate_solutions(problem);
        let record = InsightRecord {
            identifier: internal::draw_dream_id(&mut self.rng),
            structured_problem,
            chosen_solution: batch.chosen_solution,
        };

        info!(
            dream_id = record.identifier,
            solution = %record.chosen_solution,
            "recorded dream insight"
        );
        self.insights.push(record.clone());
        record
    }

    /// Report a hypothetical adjustment factor
    ///
    /// Nothing is adjusted: recorded insights are left untouched. Only the
    /// generator advances, and only when there is something to tune from.
    pub fn tune(&mut self) -> TuneOutcome {
        let outcome = if self.insights.is_empty() {
            TuneOutcome::NothingToTune
        } else {
            TuneOutcome::Adjusted {
                factor: internal::draw_tuning_factor(&mut self.rng),
            }
        };
        info!("{outcome}");
        outcome
    }

    /// Write every recorded insight to `destination`, replacing its contents
    pub fn persist(&self, destination: impl AsRef<Path>) -> Result<(), DreamError> {
        memory::save(&self.insights, destination)
    }

    /// [`persist`](Self::persist) to `machine_dream_memory.json`
    pub fn persist_default(&self) -> Result<(), DreamError> {
        self.persist(memory::DEFAULT_MEMORY_FILE)
    }

    pub fn insights(&self) -> &[InsightRecord] {
        &self.insights
    }

    pub fn len(&self) -> usize {
        self.insights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }
}
