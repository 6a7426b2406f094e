pub mod demo;
pub mod dream;

use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};

use machine_dream::memory::DEFAULT_MEMORY_FILE;
use machine_dream::{DreamSession, InsightRecord};

fn new_session(seed: Option<u64>) -> DreamSession {
    match seed {
        Some(seed) => DreamSession::with_seed(seed),
        None => DreamSession::new(),
    }
}

fn print_record(record: &InsightRecord) {
    println!(
        "{} {}",
        "🌙 Dream".bright_cyan(),
        record.identifier.to_string().bold()
    );
    println!(
        "  knowledge: {}",
        record.structured_problem.knowledge.join(" ")
    );
    println!("  solution:  {}", record.chosen_solution.green());
}

fn print_record_json(record: &InsightRecord) -> Result<()> {
    println!("{}", serde_json::to_string(record)?);
    Ok(())
}

/// Save to `path`, or the default memory file when none is given
fn save(session: &DreamSession, path: Option<&Path>) -> Result<PathBuf> {
    let destination = path.map_or_else(|| PathBuf::from(DEFAULT_MEMORY_FILE), Path::to_path_buf);
    match path {
        Some(path) => session.persist(path),
        None => session.persist_default(),
    }
    .with_context(|| format!("Failed to save dream memory to {}", destination.display()))?;
    Ok(destination)
}
