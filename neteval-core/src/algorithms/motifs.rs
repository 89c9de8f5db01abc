//! Systematic prediction errors: transitive and co-regulation false positives.
//!
//! Observed counts come from a single pass over the prediction. To judge
//! whether a predictor makes these errors more often than chance, every
//! universe pair is classified once, giving the fraction of gold-standard
//! negatives that are transitive or co-regulated. That fraction, scaled to
//! the number of observed false positives, is the count expected from a
//! random prediction with the same number of false positives.
//!
//! The universe enumeration costs O(regulators x genes x in-degree) and is
//! the scaling limit of the whole assessment. It is split across
//! regulators on a rayon pool; the per-regulator counts are integers, so the
//! result does not depend on scheduling.

use rayon::prelude::*;
use tracing::debug;

use crate::classify::classify;
use crate::network::{GeneId, GoldStandard};
use crate::prediction::{CandidateEdge, PredictionList};
use crate::types::NetEvalError;

/// Transitive and co-regulation counts over some set of edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotifCounts {
    pub false_positives: usize,
    pub transitive: usize,
    pub coregulation: usize,
}

impl MotifCounts {
    fn record(&mut self, gold: &GoldStandard, edge: &CandidateEdge) {
        let class = classify(gold, edge);
        self.false_positives += usize::from(class.is_false_positive());
        self.transitive += usize::from(class.transitive);
        self.coregulation += usize::from(class.coregulation);
    }

    fn merge(self, other: Self) -> Self {
        Self {
            false_positives: self.false_positives + other.false_positives,
            transitive: self.transitive + other.transitive,
            coregulation: self.coregulation + other.coregulation,
        }
    }
}

/// Observed motif errors of a prediction next to the universe baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotifAnalysis {
    /// Counts over the predicted edges
    pub observed: MotifCounts,
    /// Counts over every universe pair
    pub universe: MotifCounts,
    /// Universe pairs that are not gold-standard edges
    pub negatives: usize,
}

impl MotifAnalysis {
    pub const fn false_positives(&self) -> usize {
        self.observed.false_positives
    }

    /// Share of observed false positives that are transitive
    pub fn transitive_fraction(&self) -> f64 {
        fraction(self.observed.transitive as f64, self.observed.false_positives)
    }

    /// Share of observed false positives that are co-regulation edges
    pub fn coregulation_fraction(&self) -> f64 {
        fraction(self.observed.coregulation as f64, self.observed.false_positives)
    }

    /// Share of gold-standard negatives that are transitive
    pub fn baseline_transitive_fraction(&self) -> f64 {
        fraction(self.universe.transitive as f64, self.negatives)
    }

    /// Share of gold-standard negatives that are co-regulation edges
    pub fn baseline_coregulation_fraction(&self) -> f64 {
        fraction(self.universe.coregulation as f64, self.negatives)
    }

    /// Transitive edges expected among as many random false positives
    pub fn expected_transitive(&self) -> f64 {
        self.baseline_transitive_fraction() * self.observed.false_positives as f64
    }

    /// Co-regulation edges expected among as many random false positives
    pub fn expected_coregulation(&self) -> f64 {
        self.baseline_coregulation_fraction() * self.observed.false_positives as f64
    }

    /// [`Self::expected_transitive`] as a share of the false positives
    pub fn expected_transitive_fraction(&self) -> f64 {
        fraction(self.expected_transitive(), self.observed.false_positives)
    }

    /// [`Self::expected_coregulation`] as a share of the false positives
    pub fn expected_coregulation_fraction(&self) -> f64 {
        fraction(self.expected_coregulation(), self.observed.false_positives)
    }
}

/// `numerator / denominator`, or 0 for an empty denominator
fn fraction(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

/// Counts false positives and motif errors among the predicted edges.
pub fn count_errors(gold: &GoldStandard, predictions: &PredictionList) -> MotifCounts {
    let mut counts = MotifCounts::default();
    for edge in predictions {
        counts.record(gold, edge);
    }
    counts
}

/// Classifies every `(regulator, gene)` pair of the universe.
///
/// Self pairs are skipped. `false_positives` of the result equals the
/// number of gold-standard negatives.
pub fn count_universe_errors(gold: &GoldStandard) -> MotifCounts {
    let counts = gold
        .regulators()
        .par_iter()
        .map(|&tf| count_regulator_errors(gold, tf))
        .reduce(MotifCounts::default, MotifCounts::merge);
    debug!(
        negatives = counts.false_positives,
        transitive = counts.transitive,
        coregulation = counts.coregulation,
        "Classified universe"
    );
    counts
}

fn count_regulator_errors(gold: &GoldStandard, tf: GeneId) -> MotifCounts {
    let mut counts = MotifCounts::default();
    for target in gold.gene_ids() {
        if target == tf {
            continue;
        }
        counts.record(gold, &CandidateEdge::unscored(tf, target));
    }
    counts
}

/// Runs the full motif analysis.
///
/// # Errors
///
/// Returns [`NetEvalError::DegenerateInput`] if the gold standard has no
/// negatives, since the baseline fractions are then undefined.
///
/// # Examples
///
/// ```rust
/// use neteval_core::algorithms::motifs::analyze_errors;
/// use neteval_core::network::GoldStandard;
/// use neteval_core::prediction::PredictionList;
///
/// // A -> B -> C: predicting A -> C is a transitive error
/// let gold = GoldStandard::from_pairs([("A", "B"), ("B", "C")])?;
/// let predictions = PredictionList::from_triples(&gold, [("A", "B", 0.9), ("A", "C", 0.5)])?;
///
/// let analysis = analyze_errors(&gold, &predictions)?;
/// assert_eq!(analysis.observed.false_positives, 1);
/// assert_eq!(analysis.observed.transitive, 1);
/// assert_eq!(analysis.transitive_fraction(), 1.0);
/// # Ok::<(), neteval_core::types::NetEvalError>(())
/// ```
pub fn analyze_errors(
    gold: &GoldStandard,
    predictions: &PredictionList,
) -> Result<MotifAnalysis, NetEvalError> {
    let negatives = gold.negative_count();
    if negatives == 0 {
        return Err(NetEvalError::DegenerateInput(
            "there are no negatives in the gold standard".to_string(),
        ));
    }
    Ok(MotifAnalysis {
        observed: count_errors(gold, predictions),
        universe: count_universe_errors(gold),
        negatives,
    })
}
