//! Saving to the default memory file in the working directory
//!
//! Kept to a single test: it changes the process working directory.
//!
//! Run with: cargo test --test default_destination

use machine_dream::memory::DEFAULT_MEMORY_FILE;
use machine_dream::DreamSession;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_persist_default_writes_machine_dream_memory_json() {
    let temp_dir = TempDir::new().unwrap();

    // Use a guard to ensure directory is restored even on panic
    struct DirGuard {
        original: Option<PathBuf>,
    }
    impl Drop for DirGuard {
        fn drop(&mut self) {
            if let Some(ref path) = self.original {
                let _ = std::env::set_current_dir(path);
            }
        }
    }

    let _guard = DirGuard {
        original: std::env::current_dir().ok(),
    };
    std::env::set_current_dir(temp_dir.path()).unwrap();

    let mut session = DreamSession::with_seed(21);
    let record = session.dream("optimize X");
    session.persist_default().unwrap();

    let path = temp_dir.path().join(DEFAULT_MEMORY_FILE);
    assert_eq!(DEFAULT_MEMORY_FILE, "machine_dream_memory.json");
    assert!(path.exists());

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["dream_id"], record.identifier);
    assert_eq!(items[0]["solution_chosen"], record.chosen_solution.as_str());
}
