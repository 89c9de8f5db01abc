use std::io::Write;

use crate::{
    NetEvalError,
    algorithms::{AreaUnderCurves, MotifAnalysis},
};

const MOTIF_TABLE_HEADER: &str = "             \tTotal\tFraction of false positives";

/// Write the console report for PR/ROC assessment.
///
/// Only the requested areas are listed, followed by the areas expected from a
/// random ranking.
pub fn write_area_report<W: Write>(
    writer: &mut W,
    areas: &AreaUnderCurves,
    pr: bool,
    roc: bool,
) -> Result<(), NetEvalError> {
    writeln!(writer)?;
    writeln!(writer, "AREA UNDER CURVE")?;
    if pr {
        writeln!(writer, "AUPR:\t{}", areas.aupr)?;
    }
    if roc {
        writeln!(writer, "AUROC:\t{}", areas.auroc)?;
    }
    writeln!(writer)?;

    writeln!(writer, "EXPECTED PERFORMANCE OF RANDOM PREDICTION")?;
    if pr {
        writeln!(writer, "AUPR:\t{}", areas.aupr_random)?;
    }
    if roc {
        writeln!(writer, "AUROC:\t{}", areas.auroc_random)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Write the console report for the error analysis: observed motif errors,
/// then those expected from a random prediction with as many false positives.
pub fn write_motif_report<W: Write>(
    writer: &mut W,
    analysis: &MotifAnalysis,
) -> Result<(), NetEvalError> {
    writeln!(writer)?;
    writeln!(writer, "SYSTEMATIC PREDICTION ERRORS")?;
    writeln!(writer, "{}", MOTIF_TABLE_HEADER)?;
    writeln!(
        writer,
        "Transitive   \t{}\t{}",
        analysis.observed.transitive,
        analysis.transitive_fraction()
    )?;
    writeln!(
        writer,
        "Co-regulation\t{}\t{}",
        analysis.observed.coregulation,
        analysis.coregulation_fraction()
    )?;
    writeln!(writer)?;

    writeln!(
        writer,
        "EXPECTED ERRORS IN RANDOMIZED PREDICTION WITH SAME NUMBER OF TRUE AND FALSE POSITIVES"
    )?;
    writeln!(writer, "{}", MOTIF_TABLE_HEADER)?;
    writeln!(
        writer,
        "Transitive   \t{}\t{}",
        analysis.expected_transitive(),
        analysis.expected_transitive_fraction()
    )?;
    writeln!(
        writer,
        "Co-regulation\t{}\t{}",
        analysis.expected_coregulation(),
        analysis.expected_coregulation_fraction()
    )?;
    writeln!(writer)?;
    Ok(())
}
