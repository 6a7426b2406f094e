//! Simulated machine dreaming.
//!
//! A [`DreamSession`] "dreams" about a problem statement: it splits the text
//! into words, invents three placeholder solutions, picks one at random and
//! records the pairing as an [`InsightRecord`]. Recorded insights can be
//! written to disk as JSON. None of it learns anything; the randomness is the
//! whole point.
//!
//! # Example
//!
//! ```no_run
//! use machine_dream::DreamSession;
//!
//! let mut session = DreamSession::with_seed(7);
//! let record = session.dream("optimize X");
//! assert_eq!(record.structured_problem.knowledge, vec!["optimize", "X"]);
//!
//! session.tune();
//! session.persist("machine_dream_memory.json")?;
//! # Ok::<(), machine_dream::DreamError>(())
//! ```

pub mod config;
pub mod dream;
pub mod error;
pub mod memory;
pub mod shared;

// Re-export commonly used types
pub use dream::{DreamSession, InsightRecord, SolutionBatch, StructuredInput, TuneOutcome};
pub use error::DreamError;
pub use shared::SharedDreamSession;
