//! Ranked edge predictions restricted to the gold-standard universe.

mod loader;

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::network::{GeneId, GoldStandard};
use crate::types::NetEvalError;

/// A directed candidate edge `regulator -> target`.
///
/// Edges read from a prediction file carry their score. Edges built by the
/// error analyzer to classify arbitrary universe pairs are unscored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateEdge {
    pub regulator: GeneId,
    pub target: GeneId,
    pub score: Option<f64>,
}

impl CandidateEdge {
    #[must_use]
    pub const fn scored(regulator: GeneId, target: GeneId, score: f64) -> Self {
        Self {
            regulator,
            target,
            score: Some(score),
        }
    }

    #[must_use]
    pub const fn unscored(regulator: GeneId, target: GeneId) -> Self {
        Self {
            regulator,
            target,
            score: None,
        }
    }

    /// Orders by descending score; unscored edges sort last.
    fn cmp_by_confidence(&self, other: &Self) -> Ordering {
        match (self.score, other.score) {
            (Some(a), Some(b)) => b.total_cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Ordered list of predicted edges; position in the list is the rank.
///
/// Only edges whose regulator is a gold-standard regulator and whose target
/// is a gold-standard gene are kept. Input order is preserved; call
/// [`PredictionList::sort_by_score`] to rank by score instead.
#[derive(Debug, Clone, Default)]
pub struct PredictionList {
    edges: Vec<CandidateEdge>,
    seen: HashSet<(GeneId, GeneId)>,
    records_read: usize,
}

impl PredictionList {
    /// Builds a prediction list from `(regulator, target, score)` triples.
    ///
    /// Applies the loader's filtering and validation rules; positions in
    /// errors are 1-based indices into the iterator.
    ///
    /// # Errors
    ///
    /// Returns [`NetEvalError::EmptyInput`] for an empty iterator, and the
    /// record-level errors of [`PredictionList::from_reader`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neteval_core::network::GoldStandard;
    /// use neteval_core::prediction::PredictionList;
    ///
    /// let gold = GoldStandard::from_pairs([("A", "B"), ("B", "C")])?;
    /// let predictions = PredictionList::from_triples(
    ///     &gold,
    ///     [("A", "B", 0.9), ("X", "B", 0.8), ("C", "A", 0.7), ("B", "A", 0.5)],
    /// )?;
    ///
    /// // X is unknown and C is not a regulator
    /// assert_eq!(predictions.len(), 2);
    /// assert_eq!(predictions.dropped_count(), 2);
    /// # Ok::<(), neteval_core::types::NetEvalError>(())
    /// ```
    pub fn from_triples<I, S>(gold: &GoldStandard, triples: I) -> Result<Self, NetEvalError>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for (i, (regulator, target, score)) in triples.into_iter().enumerate() {
            if !score.is_finite() {
                return Err(NetEvalError::InvalidScore {
                    line: i + 1,
                    value: score.to_string(),
                });
            }
            list.push_named(gold, i + 1, regulator.as_ref(), target.as_ref(), score)?;
        }
        if list.records_read == 0 {
            return Err(NetEvalError::EmptyInput("prediction".to_string()));
        }
        Ok(list)
    }

    /// Resolves and validates one record, appending it if it lies in the
    /// universe. Returns whether the edge was kept.
    pub(crate) fn push_named(
        &mut self,
        gold: &GoldStandard,
        line: usize,
        regulator: &str,
        target: &str,
        score: f64,
    ) -> Result<bool, NetEvalError> {
        self.records_read += 1;
        if regulator == target {
            return Err(NetEvalError::SelfLoop {
                line,
                gene: regulator.to_string(),
            });
        }

        let tf = match gold.gene_id(regulator) {
            Some(id) if gold.is_regulator(id) => id,
            _ => return Ok(false),
        };
        let Some(tg) = gold.gene_id(target) else {
            return Ok(false);
        };

        if !self.seen.insert((tf, tg)) {
            return Err(NetEvalError::DuplicateEdge {
                line,
                regulator: regulator.to_string(),
                target: target.to_string(),
            });
        }
        self.edges.push(CandidateEdge::scored(tf, tg, score));
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[CandidateEdge] {
        &self.edges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidateEdge> {
        self.edges.iter()
    }

    /// Number of records read, kept or not
    pub const fn records_read(&self) -> usize {
        self.records_read
    }

    /// Records outside the gold-standard universe
    pub fn dropped_count(&self) -> usize {
        self.records_read - self.edges.len()
    }

    /// True if scores never increase along the list
    pub fn is_sorted_by_score(&self) -> bool {
        self.edges
            .windows(2)
            .all(|w| w[0].cmp_by_confidence(&w[1]) != Ordering::Greater)
    }

    /// Re-ranks by descending score.
    ///
    /// The sort is stable: edges with equal scores keep their input order, so
    /// the resulting curves are deterministic.
    pub fn sort_by_score(&mut self) {
        self.edges.sort_by(CandidateEdge::cmp_by_confidence);
    }
}

impl<'a> IntoIterator for &'a PredictionList {
    type Item = &'a CandidateEdge;
    type IntoIter = std::slice::Iter<'a, CandidateEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
