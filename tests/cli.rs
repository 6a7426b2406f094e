//! Runs the `machinedream` binary in a scratch directory

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_machinedream"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch machinedream")
}

fn read_memory(path: &Path) -> Vec<Value> {
    let contents = fs::read_to_string(path).unwrap();
    serde_json::from_str::<Value>(&contents)
        .unwrap()
        .as_array()
        .cloned()
        .unwrap()
}

#[test]
fn test_demo_writes_default_memory_file() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &[]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Auto-tuning the model by a factor of"));

    let items = read_memory(&tmp.path().join("machine_dream_memory.json"));
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0]["problem_parsed"]["knowledge"],
        serde_json::json!([
            "Optimize",
            "neural",
            "network",
            "hyperparameters",
            "for",
            "image",
            "classification"
        ])
    );
}

#[test]
fn test_dream_command_json_output() {
    let tmp = TempDir::new().unwrap();

    let output = run(
        tmp.path(),
        &["dream", "first problem", "second", "--json", "--output", "out.json", "--seed", "3"],
    );
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let printed: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let saved = read_memory(&tmp.path().join("out.json"));

    assert_eq!(printed.len(), 2);
    assert_eq!(printed, saved);
}

#[test]
fn test_seed_makes_runs_repeatable() {
    let tmp = TempDir::new().unwrap();

    for name in ["a.json", "b.json"] {
        let output = run(tmp.path(), &["dream", "optimize X", "--seed", "77", "-o", name]);
        assert!(output.status.success(), "{output:?}");
    }

    assert_eq!(
        read_memory(&tmp.path().join("a.json")),
        read_memory(&tmp.path().join("b.json"))
    );
}

#[test]
fn test_config_file_sets_output_path() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("machinedream.toml"),
        "[memory]\npath = \"configured.json\"\n",
    )
    .unwrap();

    let output = run(tmp.path(), &["demo"]);
    assert!(output.status.success(), "{output:?}");
    assert!(tmp.path().join("configured.json").exists());
    assert!(!tmp.path().join("machine_dream_memory.json").exists());
}

#[test]
fn test_unwritable_output_fails() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["dream", "optimize X", "-o", "missing/dir/out.json"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to save dream memory"));
}

#[test]
fn test_invalid_log_level_in_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("machinedream.toml"),
        "[logging]\nlevel = \"machine_dream=loud\"\n",
    )
    .unwrap();

    let output = run(tmp.path(), &["demo"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("machinedream.toml"), "{stderr}");
    assert!(!tmp.path().join("machine_dream_memory.json").exists());
}
