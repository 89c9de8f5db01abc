mod common;

use insta::assert_snapshot;
use std::fs;
use tempfile::tempdir;

use crate::common::{GOLD, PERFECT, THRESHOLDED, normalize_output, run_neteval, write_fixture};

fn stdout_of(cmd: &mut assert_cmd::Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

// Console report for a perfect ranking
#[test]
fn area_report_snapshot() {
    let dir = tempdir().unwrap();
    let gold = write_fixture(dir.path(), "gold.tsv", GOLD);
    let pred = write_fixture(dir.path(), "net1.txt", PERFECT);

    let text = stdout_of(&mut run_neteval(&pred, &gold, dir.path(), &[]));
    assert_snapshot!(normalize_output(&text), @r"
AREA UNDER CURVE
AUPR:\t1
AUROC:\t1

EXPECTED PERFORMANCE OF RANDOM PREDICTION
AUPR:\t0.5
AUROC:\t0.5
");
}

// PR curve file: one point per universe rank
#[test]
fn pr_curve_file_snapshot() {
    let dir = tempdir().unwrap();
    let gold = write_fixture(dir.path(), "gold.tsv", GOLD);
    let pred = write_fixture(dir.path(), "net1.txt", PERFECT);

    run_neteval(&pred, &gold, dir.path(), &["--PR"]).assert().success();
    let raw = fs::read_to_string(dir.path().join("net1_PR.txt")).unwrap();
    assert!(raw.ends_with("\n\n"));
    assert_snapshot!(normalize_output(&raw), @r"
0.25\t1
0.5\t1
0.75\t1
1\t1
1\t0.8
1\t0.6666666666666666
1\t0.5714285714285714
1\t0.5
");
}

#[test]
fn roc_curve_file_snapshot() {
    let dir = tempdir().unwrap();
    let gold = write_fixture(dir.path(), "gold.tsv", GOLD);
    let pred = write_fixture(dir.path(), "net1.txt", PERFECT);

    run_neteval(&pred, &gold, dir.path(), &["--ROC"]).assert().success();
    let raw = fs::read_to_string(dir.path().join("net1_ROC.txt")).unwrap();
    assert_snapshot!(normalize_output(&raw), @r"
0\t0.25
0\t0.5
0\t0.75
0\t1
0.25\t1
0.5\t1
0.75\t1
1\t1
");
}

// Motif tables: universe negatives A->D, A->E (transitive), B->C
// (co-regulation) and B->A
#[test]
fn motif_report_snapshot() {
    let dir = tempdir().unwrap();
    let gold = write_fixture(dir.path(), "gold.tsv", GOLD);
    let pred = write_fixture(dir.path(), "net1.txt", THRESHOLDED);

    let text = stdout_of(&mut run_neteval(&pred, &gold, dir.path(), &["--motifs"]));
    assert_snapshot!(normalize_output(&text), @r"
SYSTEMATIC PREDICTION ERRORS
             \tTotal\tFraction of false positives
Transitive   \t1\t0.3333333333333333
Co-regulation\t1\t0.3333333333333333

EXPECTED ERRORS IN RANDOMIZED PREDICTION WITH SAME NUMBER OF TRUE AND FALSE POSITIVES
             \tTotal\tFraction of false positives
Transitive   \t1.5\t0.5
Co-regulation\t0.75\t0.25
");
}
