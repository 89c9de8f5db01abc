//! Area under the PR and ROC curves.
//!
//! Both areas use the trapezoidal rule between consecutive ranks. Linear
//! interpolation between PR points is a first-order approximation of the
//! exact (nonlinear) PR interpolation; the difference is negligible at the
//! scale of real gold standards.

use super::curves::{Curve, Curves};
use crate::constants::RANDOM_AUROC;
use crate::network::GoldStandard;
use crate::types::NetEvalError;

/// Areas under the curves and their expected values for a random ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaUnderCurves {
    /// Renormalized AUPR, 1.0 for a perfect ranking
    pub aupr: f64,
    pub auroc: f64,
    /// Positive rate of the universe
    pub aupr_random: f64,
    pub auroc_random: f64,
}

/// Trapezoidal area under a curve.
pub fn trapezoidal_area(curve: &Curve) -> f64 {
    curve
        .points()
        .windows(2)
        .map(|w| (w[1].x - w[0].x) * (w[1].y + w[0].y) / 2.0)
        .sum()
}

/// Largest raw PR area a ranking can reach.
///
/// The first rank of a perfect ranking sits at recall `1/positives`, so the
/// segment from recall 0 to there is never integrated.
///
/// # Errors
///
/// Returns [`NetEvalError::DegenerateInput`] for a single gold-standard
/// edge, where that maximum is zero.
pub fn max_precision_recall_area(positives: usize) -> Result<f64, NetEvalError> {
    if positives < 2 {
        return Err(NetEvalError::DegenerateInput(
            "AUPR is undefined for a gold standard with fewer than two edges".to_string(),
        ));
    }
    Ok(1.0 - 1.0 / positives as f64)
}

/// Renormalized area under a PR curve.
///
/// # Errors
///
/// See [`max_precision_recall_area`].
pub fn precision_recall_area(curve: &Curve, positives: usize) -> Result<f64, NetEvalError> {
    Ok(trapezoidal_area(curve) / max_precision_recall_area(positives)?)
}

/// Computes AUPR, AUROC and their random baselines.
///
/// # Errors
///
/// Returns [`NetEvalError::DegenerateInput`] if the gold standard has a
/// single edge.
///
/// # Examples
///
/// ```rust
/// use neteval_core::algorithms::{area::area_under_curves, curves::compute_curves};
/// use neteval_core::network::GoldStandard;
/// use neteval_core::prediction::PredictionList;
///
/// let gold = GoldStandard::from_pairs([("A", "B"), ("A", "C"), ("B", "C")])?;
/// let predictions = PredictionList::from_triples(
///     &gold,
///     [("A", "B", 0.9), ("A", "C", 0.8), ("B", "C", 0.7), ("B", "A", 0.1)],
/// )?;
/// let curves = compute_curves(&gold, &predictions)?;
/// let areas = area_under_curves(&gold, &curves)?;
///
/// assert!((areas.aupr - 1.0).abs() < 1e-12);
/// assert!((areas.auroc - 1.0).abs() < 1e-12);
/// assert_eq!(areas.aupr_random, 0.75);
/// # Ok::<(), neteval_core::types::NetEvalError>(())
/// ```
pub fn area_under_curves(
    gold: &GoldStandard,
    curves: &Curves,
) -> Result<AreaUnderCurves, NetEvalError> {
    let positives = gold.gold_standard_edge_count();
    Ok(AreaUnderCurves {
        aupr: precision_recall_area(&curves.precision_recall, positives)?,
        auroc: trapezoidal_area(&curves.roc),
        aupr_random: random_aupr(gold),
        auroc_random: RANDOM_AUROC,
    })
}

/// Expected AUPR of a random ranking: the fraction of universe pairs that
/// are gold-standard edges.
pub fn random_aupr(gold: &GoldStandard) -> f64 {
    gold.gold_standard_edge_count() as f64 / gold.possible_edge_count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::curves::{CurvePoint, RankCounts, compute_curves};
    use crate::prediction::PredictionList;

    fn curve(points: &[(f64, f64)]) -> Curve {
        points.iter().map(|&(x, y)| CurvePoint { x, y }).collect()
    }

    #[test]
    fn test_trapezoid_of_unit_square() {
        let c = curve(&[(0.0, 1.0), (0.5, 1.0), (1.0, 1.0)]);
        assert_eq!(trapezoidal_area(&c), 1.0);
    }

    #[test]
    fn test_trapezoid_of_diagonal() {
        let c = curve(&[(0.0, 0.0), (0.25, 0.25), (1.0, 1.0)]);
        assert!((trapezoidal_area(&c) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_degenerate_curves() {
        assert_eq!(trapezoidal_area(&Curve::default()), 0.0);
        assert_eq!(trapezoidal_area(&curve(&[(0.3, 0.9)])), 0.0);
    }

    #[test]
    fn test_star_aupr_renormalizes_to_one() {
        // Both universe pairs are gold edges, so there is no ROC curve, but
        // the PR area is still defined.
        let gold = GoldStandard::from_pairs([("A", "B"), ("A", "C")]).unwrap();
        for order in [[("A", "B", 0.9), ("A", "C", 0.1)], [("A", "C", 0.9), ("A", "B", 0.1)]] {
            let predictions = PredictionList::from_triples(&gold, order).unwrap();
            let pr = RankCounts::accumulate(&gold, &predictions)
                .unwrap()
                .precision_recall();
            let aupr = precision_recall_area(&pr, 2).unwrap();
            assert!((aupr - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_edge_gold_standard() {
        assert!(matches!(
            max_precision_recall_area(1),
            Err(NetEvalError::DegenerateInput(_))
        ));
        assert_eq!(max_precision_recall_area(4).unwrap(), 0.75);
    }

    #[test]
    fn test_worst_ranking() {
        // Universe of 8 with 4 positives, all negatives ranked first
        let gold = GoldStandard::from_pairs([("A", "B"), ("A", "C"), ("B", "D"), ("B", "E")])
            .unwrap();
        let predictions = PredictionList::from_triples(
            &gold,
            [
                ("A", "D", 8.0),
                ("A", "E", 7.0),
                ("B", "A", 6.0),
                ("B", "C", 5.0),
                ("A", "B", 4.0),
                ("A", "C", 3.0),
                ("B", "D", 2.0),
                ("B", "E", 1.0),
            ],
        )
        .unwrap();
        let curves = compute_curves(&gold, &predictions).unwrap();
        let areas = area_under_curves(&gold, &curves).unwrap();
        assert_eq!(areas.auroc, 0.0);
        assert!(areas.aupr < areas.aupr_random);
        assert_eq!(areas.aupr_random, 0.5);
        assert_eq!(areas.auroc_random, 0.5);
    }

    #[test]
    fn test_perfect_ranking_with_negatives() {
        let gold = GoldStandard::from_pairs([("A", "B"), ("A", "C"), ("B", "D"), ("B", "E")])
            .unwrap();
        let predictions = PredictionList::from_triples(
            &gold,
            [
                ("A", "B", 8.0),
                ("A", "C", 7.0),
                ("B", "D", 6.0),
                ("B", "E", 5.0),
                ("A", "D", 4.0),
            ],
        )
        .unwrap();
        let curves = compute_curves(&gold, &predictions).unwrap();
        let areas = area_under_curves(&gold, &curves).unwrap();
        assert!((areas.aupr - 1.0).abs() < 1e-12);
        assert!((areas.auroc - 1.0).abs() < 1e-12);
    }
}
