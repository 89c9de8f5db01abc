use std::io::Cursor;
use std::path::Path;

use tracing::info;

use crate::algorithms::{analyze_errors, area_under_curves, compute_curves};
use crate::config::EvaluationConfig;
use crate::network::GoldStandard;
use crate::prediction::PredictionList;
use crate::results::{EvaluationResults, NetworkSummary, PredictionSummary};
use crate::types::NetEvalError;

/// High-level network assessment.
///
/// Loads a gold standard and a prediction, then runs the analyses selected in
/// its [`EvaluationConfig`]: PR/ROC curves with their areas, or the
/// transitive / co-regulation error analysis.
///
/// # Examples
///
/// ## Assess a prediction file
///
/// ```rust,no_run
/// use neteval_core::{Evaluator, config::EvaluationConfig};
///
/// let evaluator = Evaluator::new(EvaluationConfig::default());
/// let results = evaluator.evaluate_files("prediction.txt", "gold_standard.txt")?;
///
/// if let Some(areas) = results.areas {
///     println!("AUPR:  {}", areas.aupr);
///     println!("AUROC: {}", areas.auroc);
/// }
/// # Ok::<(), neteval_core::types::NetEvalError>(())
/// ```
///
/// ## Analyze errors of a thresholded prediction
///
/// ```rust
/// use neteval_core::{Evaluator, config::EvaluationConfig};
///
/// let config = EvaluationConfig {
///     num_threads: Some(2),
///     ..EvaluationConfig::from_flags(false, false, true)?
/// };
/// let evaluator = Evaluator::new(config);
///
/// let gold = "A\tB\nB\tC\n";
/// let prediction = "A\tB\t0.9\nA\tC\t0.8\n";
/// let results = evaluator.evaluate_str(gold, prediction)?;
///
/// let motifs = results.motifs.expect("motif analysis was requested");
/// assert_eq!(motifs.observed.transitive, 1);
/// # Ok::<(), neteval_core::types::NetEvalError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    /// Analyses to run and how
    pub config: EvaluationConfig,
}

impl Evaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    /// Loads both files and evaluates the prediction.
    ///
    /// The gold standard is read first, since it decides which prediction
    /// records are kept.
    ///
    /// # Errors
    ///
    /// Returns [`NetEvalError`] if a file cannot be read or parsed, if the
    /// configuration is invalid, or if the gold standard is too small for the
    /// requested analysis.
    pub fn evaluate_files<P: AsRef<Path>, G: AsRef<Path>>(
        &self,
        prediction: P,
        gold_standard: G,
    ) -> Result<EvaluationResults, NetEvalError> {
        self.config.validate()?;
        let gold = GoldStandard::from_file(gold_standard)?;
        let predictions = PredictionList::from_file(prediction, &gold)?;
        self.evaluate(&gold, predictions)
    }

    /// Evaluates in-memory tab-separated contents of the two files.
    ///
    /// # Errors
    ///
    /// See [`Evaluator::evaluate_files`].
    pub fn evaluate_str(
        &self,
        gold_standard: &str,
        prediction: &str,
    ) -> Result<EvaluationResults, NetEvalError> {
        self.config.validate()?;
        let gold = GoldStandard::from_reader(Cursor::new(gold_standard), "gold standard")?;
        let predictions = PredictionList::from_reader(Cursor::new(prediction), &gold, "prediction")?;
        self.evaluate(&gold, predictions)
    }

    /// Evaluates an already loaded prediction.
    ///
    /// # Errors
    ///
    /// - [`NetEvalError::InvalidConfiguration`] if the configuration is
    ///   inconsistent or the thread pool cannot be built
    /// - [`NetEvalError::DegenerateInput`] if the gold standard has no
    ///   negatives, or (for curves) fewer than two edges
    /// - [`NetEvalError::Internal`] if the curve counts miss their targets
    pub fn evaluate(
        &self,
        gold: &GoldStandard,
        mut predictions: PredictionList,
    ) -> Result<EvaluationResults, NetEvalError> {
        self.config.validate()?;

        if self.config.sort_predictions {
            predictions.sort_by_score();
        }

        let network = NetworkSummary::of(gold);
        let prediction = PredictionSummary::of(&predictions, self.config.sort_predictions);
        info!(
            genes = network.genes,
            regulators = network.regulators,
            gold_standard_edges = network.gold_standard_edges,
            possible_edges = network.possible_edges,
            ranked = prediction.ranked,
            dropped = prediction.dropped(),
            "Evaluating prediction"
        );

        let mut results = EvaluationResults {
            network,
            prediction,
            curves: None,
            areas: None,
            motifs: None,
        };

        if self.config.computes_curves() {
            let curves = compute_curves(gold, &predictions)?;
            let areas = area_under_curves(gold, &curves)?;
            info!(aupr = areas.aupr, auroc = areas.auroc, "Computed area under curves");
            results.curves = Some(curves);
            results.areas = Some(areas);
        }

        if self.config.analyze_motifs {
            let analysis = self.run_in_pool(|| analyze_errors(gold, &predictions))??;
            info!(
                false_positives = analysis.false_positives(),
                transitive = analysis.observed.transitive,
                coregulation = analysis.observed.coregulation,
                "Analyzed prediction errors"
            );
            results.motifs = Some(analysis);
        }

        Ok(results)
    }

    /// Runs `op` on a dedicated pool of `num_threads` threads, or on rayon's
    /// global pool when no thread count is configured.
    fn run_in_pool<T, F>(&self, op: F) -> Result<T, NetEvalError>
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        match self.config.num_threads {
            Some(num_threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| {
                        NetEvalError::InvalidConfiguration(format!(
                            "Failed to configure thread pool: {}",
                            e
                        ))
                    })?;
                Ok(pool.install(op))
            }
            None => Ok(op()),
        }
    }
}
