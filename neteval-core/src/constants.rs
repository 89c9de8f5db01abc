/// Column separator of every input and output file
pub const FIELD_SEPARATOR: char = '\t';

/// Required value of the optional third gold-standard column
pub const GOLD_STANDARD_EDGE_FLAG: &str = "1";

/// Columns of a prediction record: regulator, target, score
pub const PREDICTION_COLUMNS: usize = 3;

/// Tolerance for the curve postconditions on final TP/FP counts
pub const COUNT_TOLERANCE: f64 = 1e-6;

/// Area under the ROC curve of a random ranking
pub const RANDOM_AUROC: f64 = 0.5;

/// File name suffixes appended to the prediction file stem
pub const PR_CURVE_SUFFIX: &str = "_PR.txt";
pub const ROC_CURVE_SUFFIX: &str = "_ROC.txt";
pub const AUC_SUMMARY_SUFFIX: &str = "_AUC.txt";
