//! Spawning fixture binaries for cross-process determinism checks.
//!
//! Each fixture prints `key=value` lines on stdout; logs go to stderr.
//! A variant run differs only in environment and working directory, so any
//! stdout difference is a determinism bug.

use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;

/// Environment variants every cross-process test runs under.
pub const ENV_VARIANTS: &[&[(&str, &str)]] = &[
    &[],
    &[("LC_ALL", "C")],
    &[("LC_ALL", "en_US.UTF-8"), ("TZ", "Asia/Tokyo")],
    &[("RUST_LOG", "trace")],
];

/// The workspace root, two levels above this crate.
///
/// # Panics
///
/// Panics if the manifest directory is not nested as expected.
#[must_use]
pub fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run `bin` from `work_dir` with locale variables cleared and
/// `env_overrides` applied; return stdout.
///
/// # Panics
///
/// Panics if the binary cannot be spawned, exits non-zero, or prints
/// non-UTF-8.
#[must_use]
pub fn run_variant(bin: &str, work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let mut command = Command::new(bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "{bin} exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

/// Parse `key=value` lines. Later duplicates win.
#[must_use]
pub fn parse_lines(stdout: &str) -> BTreeMap<String, String> {
    stdout
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Run `bin` under every [`ENV_VARIANTS`] entry, from the workspace root and
/// from the system temp dir, and assert all outputs equal the first.
/// Returns the baseline output.
///
/// # Panics
///
/// Panics on any divergence.
#[must_use]
pub fn assert_stable_across_processes(bin: &str) -> String {
    let root = workspace_root();
    let tmp = std::env::temp_dir().to_string_lossy().to_string();
    let baseline = run_variant(bin, &root, &[]);
    for dir in [&root, &tmp] {
        for overrides in ENV_VARIANTS {
            let out = run_variant(bin, dir, overrides);
            assert_eq!(
                out, baseline,
                "{bin} output diverged (work_dir={dir}, overrides={overrides:?})"
            );
        }
    }
    baseline
}
