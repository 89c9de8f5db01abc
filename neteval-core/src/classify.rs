//! Classification of candidate edges against the gold standard.
//!
//! A candidate edge `TF -> target` is a *true positive* if it is a
//! gold-standard edge. False positives are further labelled with two
//! network motifs that often explain them:
//!
//! - *transitive*: the gold standard has a two-hop path `TF -> X -> target`
//! - *co-regulation*: some `X` regulates both `TF` and `target`
//!
//! Both motif labels are only ever given to false positives, but one false
//! positive may carry both.

use crate::network::GoldStandard;
use crate::prediction::CandidateEdge;

/// The three labels of a candidate edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeClass {
    pub true_positive: bool,
    pub transitive: bool,
    pub coregulation: bool,
}

impl EdgeClass {
    pub const fn is_false_positive(self) -> bool {
        !self.true_positive
    }
}

pub fn is_true_positive(gold: &GoldStandard, edge: &CandidateEdge) -> bool {
    gold.has_edge(edge.regulator, edge.target)
}

/// True for a false positive with a path `TF -> X -> target`.
pub fn is_transitive(gold: &GoldStandard, edge: &CandidateEdge) -> bool {
    !is_true_positive(gold, edge) && has_transitive_path(gold, edge)
}

/// True for a false positive whose endpoints share a regulator `X`.
pub fn is_coregulation(gold: &GoldStandard, edge: &CandidateEdge) -> bool {
    !is_true_positive(gold, edge) && has_common_regulator(gold, edge)
}

/// Computes all three labels, testing gold-standard membership once.
pub fn classify(gold: &GoldStandard, edge: &CandidateEdge) -> EdgeClass {
    if is_true_positive(gold, edge) {
        return EdgeClass {
            true_positive: true,
            ..EdgeClass::default()
        };
    }
    EdgeClass {
        true_positive: false,
        transitive: has_transitive_path(gold, edge),
        coregulation: has_common_regulator(gold, edge),
    }
}

// Candidates for X are the regulators of the target in both motifs.

fn has_transitive_path(gold: &GoldStandard, edge: &CandidateEdge) -> bool {
    let tf = gold.gene(edge.regulator);
    gold.gene(edge.target)
        .regulators()
        .iter()
        .any(|&x| tf.regulates(x))
}

fn has_common_regulator(gold: &GoldStandard, edge: &CandidateEdge) -> bool {
    let tf = gold.gene(edge.regulator);
    gold.gene(edge.target)
        .regulators()
        .iter()
        .any(|&x| tf.is_regulated_by(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(gold: &GoldStandard, tf: &str, target: &str) -> CandidateEdge {
        CandidateEdge::unscored(gold.gene_id(tf).unwrap(), gold.gene_id(target).unwrap())
    }

    // A -> B -> C, plus X -> A and X -> D
    fn motif_network() -> GoldStandard {
        GoldStandard::from_pairs([("A", "B"), ("B", "C"), ("X", "A"), ("X", "D")]).unwrap()
    }

    #[test]
    fn test_true_positive() {
        let gold = motif_network();
        let e = edge(&gold, "A", "B");
        assert!(is_true_positive(&gold, &e));
        assert!(!is_transitive(&gold, &e));
        assert!(!is_coregulation(&gold, &e));
        assert_eq!(
            classify(&gold, &e),
            EdgeClass {
                true_positive: true,
                transitive: false,
                coregulation: false
            }
        );
    }

    #[test]
    fn test_transitive_edge() {
        let gold = motif_network();
        let e = edge(&gold, "A", "C");
        assert!(!is_true_positive(&gold, &e));
        assert!(is_transitive(&gold, &e));
        assert!(!is_coregulation(&gold, &e));
    }

    #[test]
    fn test_reverse_of_path_is_not_transitive() {
        let gold = motif_network();
        // C -> A would need C -> X -> A
        let e = edge(&gold, "B", "A");
        assert!(!is_transitive(&gold, &e));
    }

    #[test]
    fn test_coregulation_edge() {
        let gold = motif_network();
        // X -> A and X -> D
        let e = edge(&gold, "A", "D");
        assert!(is_coregulation(&gold, &e));
        assert!(!is_transitive(&gold, &e));
        assert!(classify(&gold, &e).is_false_positive());
    }

    #[test]
    fn test_coregulated_true_positive_stays_true_positive() {
        // Star A -> {B, C, D} plus X -> A, X -> D: A -> D is both
        // co-regulated and a gold-standard edge.
        let gold = GoldStandard::from_pairs([
            ("A", "B"),
            ("A", "C"),
            ("A", "D"),
            ("X", "A"),
            ("X", "D"),
        ])
        .unwrap();
        let e = edge(&gold, "A", "D");
        assert!(is_true_positive(&gold, &e));
        assert!(!is_coregulation(&gold, &e));
        assert!(!is_transitive(&gold, &e));

        // With A -> D removed the same pair is a co-regulation error
        let gold =
            GoldStandard::from_pairs([("A", "B"), ("A", "C"), ("X", "A"), ("X", "D")]).unwrap();
        let e = edge(&gold, "A", "D");
        assert!(!is_true_positive(&gold, &e));
        assert!(is_coregulation(&gold, &e));
        assert!(!is_transitive(&gold, &e));
    }

    #[test]
    fn test_both_motifs_at_once() {
        // T -> X -> Y gives a transitive T -> Y; R -> T and R -> Y make it
        // co-regulated as well.
        let gold =
            GoldStandard::from_pairs([("T", "X"), ("X", "Y"), ("R", "T"), ("R", "Y")]).unwrap();
        let class = classify(&gold, &edge(&gold, "T", "Y"));
        assert!(!class.true_positive);
        assert!(class.transitive);
        assert!(class.coregulation);
    }

    #[test]
    fn test_unrelated_false_positive() {
        let gold = motif_network();
        let class = classify(&gold, &edge(&gold, "B", "D"));
        assert_eq!(class, EdgeClass::default());
    }

    #[test]
    fn test_classify_agrees_with_predicates() {
        let gold = motif_network();
        for &tf in gold.regulators() {
            for target in gold.gene_ids() {
                if tf == target {
                    continue;
                }
                let e = CandidateEdge::unscored(tf, target);
                let class = classify(&gold, &e);
                assert_eq!(class.true_positive, is_true_positive(&gold, &e));
                assert_eq!(class.transitive, is_transitive(&gold, &e));
                assert_eq!(class.coregulation, is_coregulation(&gold, &e));
                assert!(!(class.true_positive && (class.transitive || class.coregulation)));
            }
        }
    }
}
