//! Internal implementation for the dream module
//!
//! Every random draw goes through the `Rng` handed in by the session so a
//! seeded session replays exactly.

use fastrand::Rng;
use std::ops::RangeInclusive;

use super::types::{SolutionBatch, StructuredInput, CANDIDATE_COUNT};

pub(crate) const SOLUTION_PREFIX: &str = "Solution_";
pub(crate) const SOLUTION_NUMBERS: RangeInclusive<u32> = 100..=999;
pub(crate) const DREAM_IDS: RangeInclusive<u32> = 1000..=9999;
pub(crate) const TUNING_MIN: f64 = 0.9;
pub(crate) const TUNING_MAX: f64 = 1.1;

/// Unicode whitespace plus the ASCII information separators (FS, GS, RS, US)
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split on runs of separators; empty input yields no tokens
pub fn structure_text(raw: &str) -> StructuredInput {
    StructuredInput {
        knowledge: raw
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Invent three labels and pick one uniformly. `problem` is carried, not read.
pub fn generate_candidate_solutions(rng: &mut Rng, problem: &str) -> SolutionBatch {
    let solutions: [String; CANDIDATE_COUNT] = std::array::from_fn(|_| {
        format!("{}{}", SOLUTION_PREFIX, rng.u32(SOLUTION_NUMBERS))
    });
    let chosen_solution = solutions[rng.usize(..CANDIDATE_COUNT)].clone();

    SolutionBatch {
        problem: problem.to_string(),
        solutions,
        chosen_solution,
    }
}

pub fn draw_dream_id(rng: &mut Rng) -> u32 {
    rng.u32(DREAM_IDS)
}

/// Uniform in [0.9, 1.1]. Rounding can land on the upper bound.
pub fn draw_tuning_factor(rng: &mut Rng) -> f64 {
    TUNING_MIN + rng.f64() * (TUNING_MAX - TUNING_MIN)
}
