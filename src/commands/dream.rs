use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DreamOptions {
    /// Default memory file when `None`
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    /// JSON lines on stdout, diagnostics on stderr
    pub json: bool,
    pub tune: bool,
}

pub fn execute(problems: &[String], options: &DreamOptions) -> Result<()> {
    let mut session = super::new_session(options.seed);

    for problem in problems {
        let record = session.dream(problem);
        if options.json {
            super::print_record_json(&record)?;
        } else {
            super::print_record(&record);
        }
    }

    if options.tune {
        let outcome = session.tune();
        if options.json {
            eprintln!("{outcome}");
        } else {
            println!("{outcome}");
        }
    }

    let destination = super::save(&session, options.output.as_deref())?;
    let saved = format!(
        "  ✓ Saved {} insight(s) to {}",
        session.len(),
        destination.display()
    );
    if options.json {
        eprintln!("{saved}");
    } else {
        println!("{saved}");
    }
    Ok(())
}
