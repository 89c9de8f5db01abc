//! Output formatting for assessment results.
//!
//! Two kinds of output are produced:
//!
//! - **Result files**, named after the prediction file stem:
//!   `<stem>_PR.txt` and `<stem>_ROC.txt` hold one `x<TAB>y` line per
//!   universe rank; `<stem>_AUC.txt` holds AUPR, AUROC and the random AUPR.
//! - **Console reports**: the areas under curve next to their random
//!   expectation, or the transitive / co-regulation error tables.
//!
//! ## Examples
//!
//! ### Write the result files next to the prediction
//!
//! ```rust,no_run
//! use neteval_core::{Evaluator, config::EvaluationConfig};
//! use neteval_core::output::{output_stem, write_report, write_result_files};
//! use std::io::stdout;
//! use std::path::Path;
//!
//! let config = EvaluationConfig::default();
//! let evaluator = Evaluator::new(config.clone());
//! let results = evaluator.evaluate_files("predictions/net1.txt", "gold/net1_gold.tsv")?;
//!
//! write_report(&mut stdout(), &results, &config)?;
//! let stem = output_stem(Path::new("predictions/net1.txt"));
//! for path in write_result_files(Path::new("."), &stem, &results, &config)? {
//!     println!("wrote {}", path.display());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    NetEvalError,
    config::EvaluationConfig,
    constants::{AUC_SUMMARY_SUFFIX, PR_CURVE_SUFFIX, ROC_CURVE_SUFFIX},
    results::EvaluationResults,
};

mod formats {
    pub mod auc;
    pub mod curve;
    pub mod report;
}

pub use formats::{
    auc::write_auc_summary,
    curve::write_curve,
    report::{write_area_report, write_motif_report},
};

/// Writes the console report for whatever analyses `results` hold.
///
/// # Errors
///
/// Returns [`NetEvalError::IoError`] if writing fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    results: &EvaluationResults,
    config: &EvaluationConfig,
) -> Result<(), NetEvalError> {
    if let Some(areas) = &results.areas {
        write_area_report(writer, areas, config.compute_pr, config.compute_roc)?;
    }
    if let Some(analysis) = &results.motifs {
        write_motif_report(writer, analysis)?;
    }
    Ok(())
}

/// File name of `path` without directory and extension.
///
/// Falls back to `"prediction"` for paths without a file name.
///
/// ```rust
/// use neteval_core::output::output_stem;
/// use std::path::Path;
///
/// assert_eq!(output_stem(Path::new("runs/DREAM4_net1.txt")), "DREAM4_net1");
/// assert_eq!(output_stem(Path::new("ranking.v2.tsv")), "ranking.v2");
/// ```
pub fn output_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "prediction".to_string())
}

/// Writes the curve files and the AUC summary into `dir`.
///
/// The PR and ROC files are written only when requested; the AUC summary is
/// written whenever curves were computed. Returns the paths written, in that
/// order. Nothing is written for a motif-only assessment.
///
/// # Errors
///
/// Returns [`NetEvalError::IoError`] if a file cannot be created or written.
pub fn write_result_files(
    dir: &Path,
    stem: &str,
    results: &EvaluationResults,
    config: &EvaluationConfig,
) -> Result<Vec<PathBuf>, NetEvalError> {
    let mut written = Vec::new();
    let (Some(curves), Some(areas)) = (&results.curves, &results.areas) else {
        return Ok(written);
    };

    if config.compute_pr {
        let path = dir.join(format!("{}{}", stem, PR_CURVE_SUFFIX));
        write_file(&path, |w| write_curve(w, &curves.precision_recall))?;
        written.push(path);
    }
    if config.compute_roc {
        let path = dir.join(format!("{}{}", stem, ROC_CURVE_SUFFIX));
        write_file(&path, |w| write_curve(w, &curves.roc))?;
        written.push(path);
    }

    let path = dir.join(format!("{}{}", stem, AUC_SUMMARY_SUFFIX));
    write_file(&path, |w| write_auc_summary(w, areas))?;
    written.push(path);

    Ok(written)
}

fn write_file<F>(path: &Path, write: F) -> Result<(), NetEvalError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), NetEvalError>,
{
    info!(path = %path.display(), "Writing file");
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer)?;
    writer.flush()?;
    Ok(())
}
