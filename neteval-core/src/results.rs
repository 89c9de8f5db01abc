use crate::algorithms::{AreaUnderCurves, Curves, MotifAnalysis};
use crate::network::GoldStandard;
use crate::prediction::PredictionList;

/// Results of one network assessment.
///
/// Only the analyses requested in the
/// [`EvaluationConfig`](crate::config::EvaluationConfig) are filled in:
/// `curves` and `areas` for PR/ROC assessment, `motifs` for error analysis.
///
/// # Examples
///
/// ```rust
/// use neteval_core::{Evaluator, config::EvaluationConfig};
///
/// let gold = "A\tB\nA\tC\nB\tD\nB\tE\n";
/// let prediction = "A\tB\t0.9\nB\tD\t0.8\nA\tD\t0.7\n";
///
/// let evaluator = Evaluator::new(EvaluationConfig::default());
/// let results = evaluator.evaluate_str(gold, prediction)?;
///
/// println!("Universe: {} edges", results.network.possible_edges);
/// if let Some(areas) = &results.areas {
///     println!("AUPR {:.3} (random {:.3})", areas.aupr, areas.aupr_random);
///     println!("AUROC {:.3}", areas.auroc);
/// }
/// assert!(results.motifs.is_none());
/// # Ok::<(), neteval_core::types::NetEvalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EvaluationResults {
    /// Size of the gold standard and of its universe.
    pub network: NetworkSummary,

    /// What happened to the prediction records at load time.
    pub prediction: PredictionSummary,

    /// PR and ROC curves with the per-rank counts they were built from.
    ///
    /// Both curves are always computed when either is requested.
    pub curves: Option<Curves>,

    /// AUPR, AUROC and their random baselines.
    pub areas: Option<AreaUnderCurves>,

    /// Observed and expected transitive / co-regulation errors.
    pub motifs: Option<MotifAnalysis>,
}

/// Counts describing a gold standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkSummary {
    pub genes: usize,
    pub regulators: usize,
    pub gold_standard_edges: usize,
    /// `regulators x (genes - 1)`
    pub possible_edges: usize,
}

impl NetworkSummary {
    pub fn of(gold: &GoldStandard) -> Self {
        Self {
            genes: gold.gene_count(),
            regulators: gold.regulator_count(),
            gold_standard_edges: gold.gold_standard_edge_count(),
            possible_edges: gold.possible_edge_count(),
        }
    }

    pub const fn negatives(&self) -> usize {
        self.possible_edges - self.gold_standard_edges
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionSummary {
    /// Records read from the input
    pub records: usize,
    /// Records kept as ranked edges
    pub ranked: usize,
    /// Whether the ranked edges were re-sorted by score
    pub sorted: bool,
}

impl PredictionSummary {
    pub fn of(predictions: &PredictionList, sorted: bool) -> Self {
        Self {
            records: predictions.records_read(),
            ranked: predictions.len(),
            sorted,
        }
    }

    pub const fn dropped(&self) -> usize {
        self.records - self.ranked
    }
}
