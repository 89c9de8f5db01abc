#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Two regulators over five genes: A -> {B, C}, B -> {D, E}.
/// Universe of 8 candidate edges, 4 of them positive.
pub const GOLD: &str = "A\tB\nA\tC\nB\tD\nB\tE\n";

/// Same network in the three-column format
pub const GOLD_THREE_COLUMNS: &str = "A\tB\t1\nA\tC\t1\nB\tD\t1\nB\tE\t1\n";

/// Every universe edge, gold-standard edges first
pub const PERFECT: &str = "A\tB\t8\nA\tC\t7\nB\tD\t6\nB\tE\t5\nA\tD\t4\nA\tE\t3\nB\tA\t2\nB\tC\t1\n";

/// Three false positives: A -> D (transitive), B -> C (co-regulation), B -> A
pub const THRESHOLDED: &str = "A\tD\t0.9\nB\tC\t0.8\nB\tA\t0.7\n";

/// Writes a fixture file into `dir` and returns its path
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// The neteval binary with logging silenced
pub fn neteval() -> Command {
    let mut cmd = Command::cargo_bin("neteval").unwrap();
    cmd.env("RUST_LOG", "off");
    cmd
}

/// Runs neteval on the given files, writing results into `out_dir`
pub fn run_neteval(pred: &Path, gold: &Path, out_dir: &Path, extra: &[&str]) -> Command {
    let mut cmd = neteval();
    cmd.arg("--pred")
        .arg(pred)
        .arg("--gold")
        .arg(gold)
        .arg("-o")
        .arg(out_dir)
        .args(extra);
    cmd
}

/// Trims surrounding blank lines and makes tabs visible for snapshots
pub fn normalize_output(s: &str) -> String {
    s.trim().replace('\t', "\\t")
}
