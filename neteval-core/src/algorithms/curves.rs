//! Rank accumulation and the PR/ROC curves built from it.
//!
//! A curve has one point per rank of the *universe*, not per prediction.
//! When the prediction covers only part of the universe, the remaining ranks
//! are filled in as if the missing edges were drawn uniformly at random from
//! what is left: each extra rank adds the current probability of hitting a
//! gold-standard edge to `TP` and the complement to `FP`. This gives every
//! ranking, complete or not, a curve that ends exactly at
//! `TP = positives`, `FP = negatives`.

use tracing::debug;

use crate::classify::is_true_positive;
use crate::constants::COUNT_TOLERANCE;
use crate::network::GoldStandard;
use crate::prediction::{CandidateEdge, PredictionList};
use crate::types::NetEvalError;

/// One `(x, y)` point of a curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// A curve with one point per universe rank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<CurvePoint> {
        self.points.last().copied()
    }
}

impl FromIterator<CurvePoint> for Curve {
    fn from_iter<I: IntoIterator<Item = CurvePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Cumulative true/false positive counts at every universe rank.
///
/// `true_positives[k]` and `false_positives[k]` are the counts after rank
/// `k` (0-based). Ranks past the end of the prediction hold the random-fill
/// extrapolation, hence the fractional values.
#[derive(Debug, Clone, PartialEq)]
pub struct RankCounts {
    pub true_positives: Vec<f64>,
    pub false_positives: Vec<f64>,
    /// Number of ranks taken from the prediction itself
    pub predicted: usize,
    positives: usize,
    universe: usize,
}

impl RankCounts {
    /// Accumulates counts over the full universe of `gold`.
    ///
    /// Tail rank `k` is computed in closed form from the counts at the end
    /// of the prediction, so rounding does not build up over large
    /// universes and the final counts land on their targets to a few ulps.
    ///
    /// # Errors
    ///
    /// Returns [`NetEvalError::InvalidConfiguration`] if `predictions` was
    /// not loaded against `gold`: it is longer than the universe, or one of
    /// its edges is not a universe pair.
    pub fn accumulate(
        gold: &GoldStandard,
        predictions: &PredictionList,
    ) -> Result<Self, NetEvalError> {
        let universe = gold.possible_edge_count();
        let positives = gold.gold_standard_edge_count();
        let predicted = predictions.len();
        if predicted > universe {
            return Err(foreign_prediction(format!(
                "prediction has {} edges but the universe only {}",
                predicted, universe
            )));
        }

        let mut true_positives = Vec::with_capacity(universe);
        let mut false_positives = Vec::with_capacity(universe);
        let mut tp = 0.0_f64;
        let mut fp = 0.0_f64;

        for (rank, edge) in predictions.iter().enumerate() {
            if !in_universe(gold, edge) {
                return Err(foreign_prediction(format!(
                    "edge {} -> {} at rank {} is not in the universe",
                    edge.regulator,
                    edge.target,
                    rank + 1
                )));
            }
            if is_true_positive(gold, edge) {
                tp += 1.0;
            } else {
                fp += 1.0;
            }
            true_positives.push(tp);
            false_positives.push(fp);
        }

        if predicted < universe {
            let p_tp = (positives as f64 - tp) / (universe - predicted) as f64;
            debug!(
                predicted,
                universe,
                p_tp,
                "Extrapolating unranked edges by random discovery"
            );
            for filled in 1..=universe - predicted {
                let filled = filled as f64;
                let found = filled * p_tp;
                true_positives.push(tp + found);
                false_positives.push(fp + (filled - found));
            }
        }

        Ok(Self {
            true_positives,
            false_positives,
            predicted,
            positives,
            universe,
        })
    }

    pub fn len(&self) -> usize {
        self.true_positives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.true_positives.is_empty()
    }

    /// Final `(TP, FP)` after the last universe rank
    pub fn final_counts(&self) -> (f64, f64) {
        (
            self.true_positives.last().copied().unwrap_or(0.0),
            self.false_positives.last().copied().unwrap_or(0.0),
        )
    }

    /// Checks `TP = positives`, `FP = negatives` and `TP + FP = universe`.
    ///
    /// # Errors
    ///
    /// Returns [`NetEvalError::Internal`] if any of them is off by more than
    /// [`COUNT_TOLERANCE`].
    pub fn check_final_counts(&self) -> Result<(), NetEvalError> {
        let (tp, fp) = self.final_counts();
        let negatives = (self.universe - self.positives) as f64;
        let checks = [
            ("TP", tp, self.positives as f64),
            ("FP", fp, negatives),
            ("TP + FP", tp + fp, self.universe as f64),
        ];
        for (label, actual, expected) in checks {
            if (actual - expected).abs() >= COUNT_TOLERANCE {
                return Err(NetEvalError::Internal(format!(
                    "final {} is {} but should be {}",
                    label, actual, expected
                )));
            }
        }
        Ok(())
    }

    /// Precision-recall curve: `x = recall`, `y = precision`.
    ///
    /// Needs no negatives, so it is defined even when the gold standard
    /// covers the whole universe.
    pub fn precision_recall(&self) -> Curve {
        let positives = self.positives as f64;
        self.true_positives
            .iter()
            .enumerate()
            .map(|(k, &tp)| CurvePoint {
                x: tp / positives,
                y: tp / (k + 1) as f64,
            })
            .collect()
    }

    /// ROC curve: `x = false positive rate`, `y = true positive rate`.
    ///
    /// # Errors
    ///
    /// Returns [`NetEvalError::DegenerateInput`] if the universe has no
    /// negatives.
    pub fn roc(&self) -> Result<Curve, NetEvalError> {
        let negatives = self.universe - self.positives;
        if negatives == 0 {
            return Err(no_negatives());
        }
        let negatives = negatives as f64;
        let positives = self.positives as f64;
        Ok(self
            .true_positives
            .iter()
            .zip(&self.false_positives)
            .map(|(&tp, &fp)| CurvePoint {
                x: fp / negatives,
                y: tp / positives,
            })
            .collect())
    }
}

/// PR and ROC curves of one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Curves {
    pub precision_recall: Curve,
    pub roc: Curve,
    pub counts: RankCounts,
}

/// Computes PR and ROC curves over the universe of `gold`.
///
/// # Errors
///
/// - [`NetEvalError::DegenerateInput`] if every universe pair is a
///   gold-standard edge (there are no negatives to rank against)
/// - [`NetEvalError::InvalidConfiguration`] if `predictions` belongs to
///   another gold standard
/// - [`NetEvalError::Internal`] if the final counts miss their targets
///
/// # Examples
///
/// ```rust
/// use neteval_core::algorithms::curves::compute_curves;
/// use neteval_core::network::GoldStandard;
/// use neteval_core::prediction::PredictionList;
///
/// let gold = GoldStandard::from_pairs([("A", "B"), ("B", "C")])?;
/// // Universe: A->B, A->C, B->A, B->C; only one edge is ranked.
/// let predictions = PredictionList::from_triples(&gold, [("A", "B", 1.0)])?;
///
/// let curves = compute_curves(&gold, &predictions)?;
/// assert_eq!(curves.precision_recall.len(), 4);
/// let (tp, fp) = curves.counts.final_counts();
/// assert!((tp - 2.0).abs() < 1e-9 && (fp - 2.0).abs() < 1e-9);
/// # Ok::<(), neteval_core::types::NetEvalError>(())
/// ```
pub fn compute_curves(
    gold: &GoldStandard,
    predictions: &PredictionList,
) -> Result<Curves, NetEvalError> {
    if gold.negative_count() == 0 {
        return Err(no_negatives());
    }
    let counts = RankCounts::accumulate(gold, predictions)?;
    counts.check_final_counts()?;
    Ok(Curves {
        precision_recall: counts.precision_recall(),
        roc: counts.roc()?,
        counts,
    })
}

fn in_universe(gold: &GoldStandard, edge: &CandidateEdge) -> bool {
    let genes = gold.gene_count();
    edge.regulator.index() < genes
        && edge.target.index() < genes
        && edge.regulator != edge.target
        && gold.is_regulator(edge.regulator)
}

fn foreign_prediction(detail: String) -> NetEvalError {
    NetEvalError::InvalidConfiguration(format!(
        "prediction was not loaded against this gold standard: {}",
        detail
    ))
}

fn no_negatives() -> NetEvalError {
    NetEvalError::DegenerateInput("there are no negatives in the gold standard".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{} != {}",
            actual,
            expected
        );
    }

    fn star() -> GoldStandard {
        GoldStandard::from_pairs([("A", "B"), ("A", "C")]).unwrap()
    }

    #[test]
    fn test_full_ranking_of_a_star() {
        let gold = star();
        let predictions =
            PredictionList::from_triples(&gold, [("A", "B", 0.9), ("A", "C", 0.1)]).unwrap();
        let counts = RankCounts::accumulate(&gold, &predictions).unwrap();

        assert_eq!(counts.true_positives, vec![1.0, 2.0]);
        assert_eq!(counts.false_positives, vec![0.0, 0.0]);
        assert_eq!(counts.predicted, 2);
        counts.check_final_counts().unwrap();

        let pr = counts.precision_recall();
        assert_eq!(
            pr.points(),
            &[
                CurvePoint { x: 0.5, y: 1.0 },
                CurvePoint { x: 1.0, y: 1.0 }
            ]
        );
    }

    #[test]
    fn test_star_has_no_roc() {
        let gold = star();
        let predictions =
            PredictionList::from_triples(&gold, [("A", "C", 0.9), ("A", "B", 0.1)]).unwrap();
        let counts = RankCounts::accumulate(&gold, &predictions).unwrap();
        assert!(matches!(counts.roc(), Err(NetEvalError::DegenerateInput(_))));
        assert!(matches!(
            compute_curves(&gold, &predictions),
            Err(NetEvalError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_perfect_ranking_curves() {
        // Universe of 6: A->{B,C,D}, B->{A,C,D}; gold A->B, A->C, B->D
        let gold = GoldStandard::from_pairs([("A", "B"), ("A", "C"), ("B", "D")]).unwrap();
        let predictions = PredictionList::from_triples(
            &gold,
            [
                ("A", "B", 6.0),
                ("B", "D", 5.0),
                ("A", "C", 4.0),
                ("A", "D", 3.0),
                ("B", "A", 2.0),
                ("B", "C", 1.0),
            ],
        )
        .unwrap();
        let curves = compute_curves(&gold, &predictions).unwrap();

        assert_eq!(curves.counts.true_positives, vec![1.0, 2.0, 3.0, 3.0, 3.0, 3.0]);
        assert_eq!(curves.counts.false_positives, vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0]);

        let roc = curves.roc.points();
        assert_close(roc[2].x, 0.0);
        assert_close(roc[2].y, 1.0);
        assert_close(roc[5].x, 1.0);

        let pr = curves.precision_recall.points();
        assert_close(pr[3].y, 0.75);
        assert_close(pr[5].y, 0.5);
    }

    #[test]
    fn test_empty_prediction_is_pure_extrapolation() {
        let gold = GoldStandard::from_pairs([("A", "B"), ("B", "C")]).unwrap();
        let predictions = PredictionList::from_triples(&gold, [("Z", "A", 1.0)]).unwrap();
        assert!(predictions.is_empty());

        let curves = compute_curves(&gold, &predictions).unwrap();
        assert_eq!(curves.counts.len(), 4);
        // Half of the universe is positive: every rank adds 0.5 to each count
        for (k, (&tp, &fp)) in curves
            .counts
            .true_positives
            .iter()
            .zip(&curves.counts.false_positives)
            .enumerate()
        {
            assert_close(tp, 0.5 * (k + 1) as f64);
            assert_close(fp, 0.5 * (k + 1) as f64);
        }
        // Random precision is flat at the positive rate
        for p in curves.precision_recall.points() {
            assert_close(p.y, 0.5);
        }
    }

    #[test]
    fn test_partial_ranking_tail() {
        // Universe of 6 with 3 positives; rank one FP then one TP
        let gold = GoldStandard::from_pairs([("A", "B"), ("A", "C"), ("B", "D")]).unwrap();
        let predictions =
            PredictionList::from_triples(&gold, [("A", "D", 0.9), ("A", "B", 0.8)]).unwrap();
        let counts = RankCounts::accumulate(&gold, &predictions).unwrap();

        assert_eq!(counts.len(), 6);
        assert_eq!(&counts.true_positives[..2], &[0.0, 1.0]);
        // 2 positives left among 4 unranked edges
        assert_close(counts.true_positives[2], 1.5);
        assert_close(counts.false_positives[2], 1.5);
        counts.check_final_counts().unwrap();
        let (tp, fp) = counts.final_counts();
        assert_close(tp + fp, 6.0);
    }

    #[test]
    fn test_counts_are_monotone() {
        let gold = GoldStandard::from_pairs([("A", "B"), ("A", "C"), ("B", "D")]).unwrap();
        let predictions =
            PredictionList::from_triples(&gold, [("B", "C", 0.9), ("A", "C", 0.8)]).unwrap();
        let curves = compute_curves(&gold, &predictions).unwrap();
        for w in curves.roc.points().windows(2) {
            assert!(w[1].x >= w[0].x);
            assert!(w[1].y >= w[0].y);
        }
    }

    /// 300 regulators over 5000 genes, every gene regulated exactly once:
    /// a universe of 1,499,700 pairs.
    fn large_network() -> GoldStandard {
        let regulators = 300;
        let pairs: Vec<(String, String)> = (0..5000)
            .map(|g| {
                let tf = if g < regulators { (g + 1) % regulators } else { g % regulators };
                (format!("G{}", tf), format!("G{}", g))
            })
            .collect();
        GoldStandard::from_pairs(pairs).unwrap()
    }

    #[test]
    fn test_large_universe_meets_final_counts() {
        let gold = large_network();
        assert_eq!(gold.possible_edge_count(), 1_499_700);
        let positives = gold.gold_standard_edge_count() as f64;
        let negatives = gold.negative_count() as f64;

        let empty = PredictionList::default();
        let partial = PredictionList::from_triples(
            &gold,
            [("G1", "G0", 3.0), ("G1", "G2", 2.0), ("G0", "G301", 1.0)],
        )
        .unwrap();
        assert_eq!(partial.len(), 3);

        for predictions in [empty, partial] {
            let curves = compute_curves(&gold, &predictions).unwrap();
            let (tp, fp) = curves.counts.final_counts();
            assert!((tp - positives).abs() < 1e-8, "TP {}", tp);
            assert!((fp - negatives).abs() < 1e-8, "FP {}", fp);
            let last = curves.roc.last().unwrap();
            assert!((last.x - 1.0).abs() < 1e-12 && (last.y - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_prediction_from_another_gold_standard() {
        let small = GoldStandard::from_pairs([("A", "B"), ("B", "C")]).unwrap();
        let large = GoldStandard::from_pairs([("A", "B"), ("C", "D"), ("D", "E")]).unwrap();
        let predictions = PredictionList::from_triples(&large, [("D", "E", 1.0)]).unwrap();

        assert!(matches!(
            RankCounts::accumulate(&small, &predictions),
            Err(NetEvalError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            compute_curves(&small, &predictions),
            Err(NetEvalError::InvalidConfiguration(_))
        ));
    }
}
