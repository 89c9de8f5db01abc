use std::io::Write;

use crate::{NetEvalError, algorithms::AreaUnderCurves};

/// Write the three-line AUC summary: AUPR, AUROC and the random AUPR
pub fn write_auc_summary<W: Write>(
    writer: &mut W,
    areas: &AreaUnderCurves,
) -> Result<(), NetEvalError> {
    writeln!(writer, "AUPR\t{}", areas.aupr)?;
    writeln!(writer, "AUROC\t{}", areas.auroc)?;
    writeln!(writer, "AUPR_random\t{}", areas.aupr_random)?;
    Ok(())
}
