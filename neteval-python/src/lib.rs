use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use neteval_core::algorithms::Curve;
use neteval_core::config::EvaluationConfig;
use neteval_core::engine::Evaluator;
use neteval_core::output::write_report;
use neteval_core::results::EvaluationResults;
use neteval_core::types::NetEvalError;

/// Options for configuring a network assessment
#[pyclass]
#[derive(Clone, Default)]
pub struct EvaluationOptions {
    #[pyo3(get, set)]
    /// Compute the precision-recall curve and AUPR
    pub pr: bool,

    #[pyo3(get, set)]
    /// Compute the ROC curve and AUROC
    pub roc: bool,

    #[pyo3(get, set)]
    /// Analyze transitive and co-regulation errors (excludes pr and roc)
    pub motifs: bool,

    #[pyo3(get, set)]
    /// Rank predictions by descending score instead of input order
    pub sort: bool,

    #[pyo3(get, set)]
    /// Number of threads for the error analysis (None for default)
    pub num_threads: Option<usize>,
}

#[pymethods]
impl EvaluationOptions {
    #[new]
    #[pyo3(signature = (pr=false, roc=false, motifs=false, sort=false, num_threads=None))]
    fn new(
        pr: bool,
        roc: bool,
        motifs: bool,
        sort: bool,
        num_threads: Option<usize>,
    ) -> PyResult<Self> {
        Ok(EvaluationOptions {
            pr,
            roc,
            motifs,
            sort,
            num_threads,
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "EvaluationOptions(pr={}, roc={}, motifs={}, sort={}, num_threads={:?})",
            self.pr, self.roc, self.motifs, self.sort, self.num_threads
        )
    }
}

/// Result of a network assessment
#[pyclass]
pub struct EvaluationResult {
    #[pyo3(get)]
    /// Console report, as printed by the command-line tool
    pub report: String,

    #[pyo3(get)]
    /// Genes in the gold standard
    pub gene_count: usize,

    #[pyo3(get)]
    /// Gold-standard edges
    pub gold_standard_edges: usize,

    #[pyo3(get)]
    /// Candidate edges: regulators x (genes - 1)
    pub possible_edges: usize,

    #[pyo3(get)]
    /// Prediction records kept as ranked edges
    pub ranked_edges: usize,

    #[pyo3(get)]
    pub aupr: Option<f64>,

    #[pyo3(get)]
    pub auroc: Option<f64>,

    #[pyo3(get)]
    /// Expected AUPR of a random ranking
    pub aupr_random: Option<f64>,

    #[pyo3(get)]
    /// (recall, precision) per universe rank
    pub pr_curve: Option<Vec<(f64, f64)>>,

    #[pyo3(get)]
    /// (false positive rate, true positive rate) per universe rank
    pub roc_curve: Option<Vec<(f64, f64)>>,

    #[pyo3(get)]
    pub false_positives: Option<usize>,

    #[pyo3(get)]
    pub transitive: Option<usize>,

    #[pyo3(get)]
    pub coregulation: Option<usize>,

    #[pyo3(get)]
    /// Transitive errors expected among as many random false positives
    pub expected_transitive: Option<f64>,

    #[pyo3(get)]
    /// Co-regulation errors expected among as many random false positives
    pub expected_coregulation: Option<f64>,
}

#[pymethods]
impl EvaluationResult {
    fn __repr__(&self) -> String {
        format!(
            "EvaluationResult(possible_edges={}, ranked_edges={}, aupr={:?}, auroc={:?}, false_positives={:?})",
            self.possible_edges, self.ranked_edges, self.aupr, self.auroc, self.false_positives
        )
    }
}

/// Convert EvaluationOptions to EvaluationConfig
fn options_to_config(options: &EvaluationOptions) -> PyResult<EvaluationConfig> {
    let config = EvaluationConfig {
        sort_predictions: options.sort,
        num_threads: options.num_threads,
        ..EvaluationConfig::from_flags(options.pr, options.roc, options.motifs)
            .map_err(to_py_err)?
    };
    config.validate().map_err(to_py_err)?;
    Ok(config)
}

fn to_py_err(error: NetEvalError) -> PyErr {
    match error {
        NetEvalError::IoError(e) => PyIOError::new_err(format!("IO error: {}", e)),
        other => PyValueError::new_err(other.to_string()),
    }
}

fn curve_points(curve: &Curve) -> Vec<(f64, f64)> {
    curve.points().iter().map(|p| (p.x, p.y)).collect()
}

fn to_py_result(
    results: &EvaluationResults,
    config: &EvaluationConfig,
) -> PyResult<EvaluationResult> {
    let mut report = Vec::new();
    write_report(&mut report, results, config).map_err(to_py_err)?;
    let report = String::from_utf8(report)
        .map_err(|e| PyValueError::new_err(format!("UTF-8 conversion error: {}", e)))?;

    let curves = results.curves.as_ref();
    let areas = results.areas.as_ref();
    let motifs = results.motifs.as_ref();

    Ok(EvaluationResult {
        report,
        gene_count: results.network.genes,
        gold_standard_edges: results.network.gold_standard_edges,
        possible_edges: results.network.possible_edges,
        ranked_edges: results.prediction.ranked,
        aupr: areas.filter(|_| config.compute_pr).map(|a| a.aupr),
        auroc: areas.filter(|_| config.compute_roc).map(|a| a.auroc),
        aupr_random: areas.map(|a| a.aupr_random),
        pr_curve: curves
            .filter(|_| config.compute_pr)
            .map(|c| curve_points(&c.precision_recall)),
        roc_curve: curves
            .filter(|_| config.compute_roc)
            .map(|c| curve_points(&c.roc)),
        false_positives: motifs.map(|m| m.false_positives()),
        transitive: motifs.map(|m| m.observed.transitive),
        coregulation: motifs.map(|m| m.observed.coregulation),
        expected_transitive: motifs.map(|m| m.expected_transitive()),
        expected_coregulation: motifs.map(|m| m.expected_coregulation()),
    })
}

/// Assess a ranked prediction against a gold standard
///
/// Args:
///     gold_standard (str): Tab-separated gold-standard edges, `regulator<TAB>target[<TAB>1]`
///     prediction (str): Tab-separated ranked edges, `regulator<TAB>target<TAB>score`
///     options (EvaluationOptions, optional): Analyses to run (default: PR and ROC)
///
/// Returns:
///     EvaluationResult: Areas, curves or motif counts, plus the console report
///
/// Example:
///     >>> import neteval
///     >>> gold = "A\\tB\\nA\\tC\\nB\\tD\\nB\\tE\\n"
///     >>> pred = "A\\tB\\t0.9\\nA\\tD\\t0.8\\n"
///     >>> result = neteval.evaluate(gold, pred)
///     >>> print(result.aupr, result.auroc)
#[pyfunction]
#[pyo3(signature = (gold_standard, prediction, options=None))]
fn evaluate(
    gold_standard: &str,
    prediction: &str,
    options: Option<EvaluationOptions>,
) -> PyResult<EvaluationResult> {
    let options = options.unwrap_or_default();
    let config = options_to_config(&options)?;

    let evaluator = Evaluator::new(config);
    let results = evaluator
        .evaluate_str(gold_standard, prediction)
        .map_err(to_py_err)?;
    to_py_result(&results, &evaluator.config)
}

/// Assess a ranked prediction file against a gold-standard file
///
/// Args:
///     prediction_path (str): Path to the prediction file
///     gold_standard_path (str): Path to the gold-standard file
///     options (EvaluationOptions, optional): Analyses to run (default: PR and ROC)
///
/// Returns:
///     EvaluationResult: Areas, curves or motif counts, plus the console report
///
/// Example:
///     >>> import neteval
///     >>> opts = neteval.EvaluationOptions(motifs=True)
///     >>> result = neteval.evaluate_files("net1_top100.txt", "net1_gold.tsv", opts)
///     >>> print(result.transitive, result.expected_transitive)
#[pyfunction]
#[pyo3(signature = (prediction_path, gold_standard_path, options=None))]
fn evaluate_files(
    prediction_path: &str,
    gold_standard_path: &str,
    options: Option<EvaluationOptions>,
) -> PyResult<EvaluationResult> {
    let options = options.unwrap_or_default();
    let config = options_to_config(&options)?;

    let evaluator = Evaluator::new(config);
    let results = evaluator
        .evaluate_files(prediction_path, gold_standard_path)
        .map_err(to_py_err)?;
    to_py_result(&results, &evaluator.config)
}

/// neteval - Assessment of inferred gene regulatory networks
///
/// This module provides Python bindings for neteval, which scores ranked
/// regulator-target predictions against a gold standard with PR/ROC curves
/// and analyzes transitive and co-regulation false positives.
#[pymodule]
fn neteval(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<EvaluationOptions>()?;
    m.add_class::<EvaluationResult>()?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_files, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__doc__", "Assessment of inferred gene regulatory networks")?;

    Ok(())
}
