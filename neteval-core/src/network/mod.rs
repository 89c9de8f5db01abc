//! The gold-standard network.
//!
//! Genes are stored in an arena owned by [`GoldStandard`]; edges are recorded
//! on the genes as index sets (see [`Gene`]). The gold standard also fixes the
//! *universe* of candidate edges: every ordered pair from a regulator to any
//! other gene of the gold standard.

mod gene;
mod loader;

pub use gene::{Gene, GeneId};

use std::collections::HashMap;

use tracing::warn;

use crate::types::NetEvalError;

/// Gold-standard network and the gene registry built from it.
///
/// # Examples
///
/// ```rust
/// use neteval_core::network::GoldStandard;
///
/// let gold = GoldStandard::from_pairs([("A", "B"), ("A", "C"), ("B", "C")])?;
///
/// assert_eq!(gold.gene_count(), 3);
/// assert_eq!(gold.regulator_count(), 2);
/// assert_eq!(gold.gold_standard_edge_count(), 3);
/// // 2 regulators x (3 genes - 1)
/// assert_eq!(gold.possible_edge_count(), 4);
/// assert_eq!(gold.negative_count(), 1);
/// # Ok::<(), neteval_core::types::NetEvalError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GoldStandard {
    genes: Vec<Gene>,
    index: HashMap<String, GeneId>,
    /// Regulators in the order they were first seen
    regulators: Vec<GeneId>,
    edge_count: usize,
}

impl GoldStandard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a gold standard from `(regulator, target)` name pairs.
    ///
    /// Applies the same rules as the file loader: self-loops are rejected and
    /// repeated pairs are counted once. Errors report the 1-based position of
    /// the offending pair.
    ///
    /// # Errors
    ///
    /// Returns [`NetEvalError::EmptyInput`] for an empty iterator and
    /// [`NetEvalError::SelfLoop`] for a pair `(X, X)`.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, NetEvalError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut gold = Self::new();
        for (i, (regulator, target)) in pairs.into_iter().enumerate() {
            gold.insert_named_edge(i + 1, regulator.as_ref(), target.as_ref())?;
        }
        if gold.edge_count == 0 {
            return Err(NetEvalError::EmptyInput("gold standard".to_string()));
        }
        Ok(gold)
    }

    /// Returns the gene with this name, creating it if needed.
    pub fn add_gene(&mut self, name: &str) -> GeneId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = GeneId(self.genes.len());
        self.genes.push(Gene::new(name));
        self.index.insert(name.to_string(), id);
        id
    }

    /// Records the gold-standard edge `regulator -> target`.
    ///
    /// Returns `false` (and leaves the counts untouched) if the edge was
    /// already present.
    ///
    /// # Panics
    ///
    /// Panics if either id does not belong to this gold standard.
    pub fn add_edge(&mut self, regulator: GeneId, target: GeneId) -> bool {
        debug_assert_ne!(regulator, target, "self-loops are not part of the universe");
        let was_regulator = self.genes[regulator.0].is_regulator();
        if !self.genes[regulator.0].add_target(target) {
            return false;
        }
        self.genes[target.0].add_regulator(regulator);
        if !was_regulator {
            self.regulators.push(regulator);
        }
        self.edge_count += 1;
        true
    }

    pub(crate) fn insert_named_edge(
        &mut self,
        line: usize,
        regulator: &str,
        target: &str,
    ) -> Result<(), NetEvalError> {
        if regulator == target {
            return Err(NetEvalError::SelfLoop {
                line,
                gene: regulator.to_string(),
            });
        }
        let tf = self.add_gene(regulator);
        let tg = self.add_gene(target);
        if !self.add_edge(tf, tg) {
            warn!(line, regulator, target, "Duplicate gold-standard edge counted once");
        }
        Ok(())
    }

    pub fn gene(&self, id: GeneId) -> &Gene {
        &self.genes[id.0]
    }

    pub fn gene_id(&self, name: &str) -> Option<GeneId> {
        self.index.get(name).copied()
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// All gene ids in arena order
    pub fn gene_ids(&self) -> impl ExactSizeIterator<Item = GeneId> + '_ {
        (0..self.genes.len()).map(GeneId)
    }

    pub fn regulators(&self) -> &[GeneId] {
        &self.regulators
    }

    pub fn is_regulator(&self, id: GeneId) -> bool {
        self.genes[id.0].is_regulator()
    }

    /// True if `regulator -> target` is a gold-standard edge
    pub fn has_edge(&self, regulator: GeneId, target: GeneId) -> bool {
        self.genes[regulator.0].regulates(target)
    }

    pub fn gene_count(&self) -> usize {
        self.genes.len()
    }

    pub fn regulator_count(&self) -> usize {
        self.regulators.len()
    }

    /// Number of distinct gold-standard edges (the positives)
    pub const fn gold_standard_edge_count(&self) -> usize {
        self.edge_count
    }

    /// Size of the universe: `regulators x (genes - 1)`
    pub fn possible_edge_count(&self) -> usize {
        self.regulators.len() * self.genes.len().saturating_sub(1)
    }

    /// Universe pairs that are not gold-standard edges
    pub fn negative_count(&self) -> usize {
        self.possible_edge_count() - self.edge_count
    }
}
