use anyhow::Result;

use machine_dream::config::Config;

pub const DEMO_PROBLEM: &str = "Optimize neural network hyperparameters for image classification";

/// Dream once on a fixed problem, tune, and save
pub fn execute(config: &Config) -> Result<()> {
    let mut session = super::new_session(config.rng.seed);

    let record = session.dream(DEMO_PROBLEM);
    super::print_record(&record);

    println!("{}", session.tune());

    let saved = super::save(&session, config.memory.path.as_deref())?;
    println!("  ✓ Memory saved to {}", saved.display());
    Ok(())
}
