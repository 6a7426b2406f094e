//! Record types produced by a dream session
//!
//! Field names on disk are fixed by the memory file format
//! (`dream_id`, `problem_parsed`, `solution_chosen`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of placeholder solutions invented per problem
pub const CANDIDATE_COUNT: usize = 3;

/// Whitespace-tokenized view of a problem statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredInput {
    pub knowledge: Vec<String>,
}

/// Placeholder solutions for one problem, with the one picked at random
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionBatch {
    pub problem: String,
    pub solutions: [String; CANDIDATE_COUNT],
    pub chosen_solution: String,
}

/// One stored result of a dream. Never mutated once appended to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRecord {
    /// Informational only; collisions are possible.
    #[serde(rename = "dream_id")]
    pub identifier: u32,
    #[serde(rename = "problem_parsed")]
    pub structured_problem: StructuredInput,
    #[serde(rename = "solution_chosen")]
    pub chosen_solution: String,
}

/// What `tune` reported. The factor is never applied to anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TuneOutcome {
    /// `factor` lies in [0.9, 1.1]
    Adjusted { factor: f64 },
    NothingToTune,
}

impl fmt::Display for TuneOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adjusted { factor } => write!(f, "Auto-tuning the model by a factor of {factor}"),
            Self::NothingToTune => write!(f, "No previous insights to auto-tune from."),
        }
    }
}
