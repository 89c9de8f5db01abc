//! # neteval CLI - Regulatory Network Assessment
//!
//! Scores a ranked list of predicted regulator → target edges against a gold
//! standard.
//!
//! ## Usage
//!
//! ```bash
//! # PR and ROC curves, AUPR and AUROC
//! neteval --pred net1_prediction.txt --gold net1_gold.tsv
//!
//! # Only the precision-recall curve, written to results/
//! neteval --pred net1_prediction.txt --gold net1_gold.tsv --PR -o results
//!
//! # Transitive and co-regulation errors of a thresholded prediction
//! neteval --pred net1_top100.txt --gold net1_gold.tsv --motifs
//! ```
//!
//! ## Options
//!
//! - `--pred <FILE>`: Ranked list of predicted edges (`regulator<TAB>target<TAB>score`)
//! - `--gold <FILE>`: Gold-standard edges (`regulator<TAB>target[<TAB>1]`)
//! - `--PR`: Compute the precision-recall curve and AUPR
//! - `--ROC`: Compute the ROC curve and AUROC
//! - `--motifs`: Analyze transitive and co-regulation prediction errors
//! - `-o, --output-dir <DIR>`: Directory for the curve and AUC files (default: .)
//! - `--sort`: Rank by descending score instead of file order
//! - `-j, --threads <N>`: Threads for the error analysis (default: all cores)
//! - `-q, --quiet`: Only log warnings and errors
//!
//! Without `--PR`, `--ROC` or `--motifs`, both curves are computed. Curves
//! and error analysis cannot be combined: curves need the complete ranking,
//! errors are analyzed after a cutoff.
//!
//! ## Output Files
//!
//! With `--pred path/to/net1.txt`, curve assessment writes
//! `net1_PR.txt`, `net1_ROC.txt` and `net1_AUC.txt` to the output directory.
//! Reports go to stdout and log messages to stderr; set `RUST_LOG` to
//! override the log level.

use clap::{Arg, ArgAction, Command, value_parser};
use neteval_core::config::EvaluationConfig;
use neteval_core::output::{output_stem, write_report, write_result_files};
use neteval_core::Evaluator;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Main entry point for the neteval CLI application.
///
/// Parses command-line arguments, loads the gold standard and prediction,
/// prints the requested reports and writes the result files.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("neteval")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Assess inferred regulatory networks against a gold standard")
        .arg(
            Arg::new("pred")
                .long("pred")
                .value_name("FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("File with ranked list of predicted edges"),
        )
        .arg(
            Arg::new("gold")
                .long("gold")
                .value_name("FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("File with list of gold standard (true) edges"),
        )
        .arg(
            Arg::new("PR")
                .long("PR")
                .action(ArgAction::SetTrue)
                .help("Compute precision-recall (PR) curve and area under the curve (AUPR)"),
        )
        .arg(
            Arg::new("ROC")
                .long("ROC")
                .action(ArgAction::SetTrue)
                .help("Compute receiver operating characteristic (ROC) curve and AUROC"),
        )
        .arg(
            Arg::new("motifs")
                .long("motifs")
                .action(ArgAction::SetTrue)
                .help("Analyze systematic prediction errors (transitive and co-regulation edges)"),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .default_value(".")
                .help("Directory for the curve and AUC files"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .action(ArgAction::SetTrue)
                .help("Rank predictions by descending score instead of file order"),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Number of threads for the error analysis"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .get_matches();

    init_tracing(matches.get_flag("quiet"));

    let config = EvaluationConfig {
        sort_predictions: matches.get_flag("sort"),
        num_threads: matches.get_one::<usize>("threads").copied(),
        ..EvaluationConfig::from_flags(
            matches.get_flag("PR"),
            matches.get_flag("ROC"),
            matches.get_flag("motifs"),
        )?
    };
    config.validate()?;

    let prediction_file = matches
        .get_one::<PathBuf>("pred")
        .ok_or("missing --pred")?;
    let gold_file = matches
        .get_one::<PathBuf>("gold")
        .ok_or("missing --gold")?;
    let output_dir = matches
        .get_one::<PathBuf>("output-dir")
        .map(PathBuf::as_path)
        .unwrap_or_else(|| Path::new("."));

    let evaluator = Evaluator::new(config);
    let results = evaluator.evaluate_files(prediction_file, gold_file)?;

    let mut stdout = BufWriter::new(io::stdout());
    write_report(&mut stdout, &results, &evaluator.config)?;
    stdout.flush()?;

    if results.curves.is_some() {
        fs::create_dir_all(output_dir)?;
        let stem = output_stem(prediction_file);
        let written = write_result_files(output_dir, &stem, &results, &evaluator.config)?;
        info!(files = written.len(), "Done");
    }

    Ok(())
}

/// Logs to stderr, honouring `RUST_LOG` when it is set.
fn init_tracing(quiet: bool) {
    let default = if quiet {
        "warn"
    } else {
        "neteval=info,neteval_core=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
