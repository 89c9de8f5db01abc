use std::collections::HashSet;
use std::fmt;

/// Stable index of a gene in the [`GoldStandard`](super::GoldStandard) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeneId(pub(crate) usize);

impl GeneId {
    /// Position of the gene in the arena
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for GeneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A gene (node) of the gold-standard network.
///
/// Gold-standard edges live on the genes themselves: an edge `A -> B` is the
/// fact that `B` is in `A.targets` and `A` is in `B.regulators`. Both sets hold
/// arena indices, never references, so the graph has a single owner.
#[derive(Debug, Clone)]
pub struct Gene {
    name: String,
    regulators: HashSet<GeneId>,
    targets: HashSet<GeneId>,
}

impl Gene {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regulators: HashSet::new(),
            targets: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Genes with a gold-standard edge into this gene
    pub const fn regulators(&self) -> &HashSet<GeneId> {
        &self.regulators
    }

    /// Genes this gene has a gold-standard edge into
    pub const fn targets(&self) -> &HashSet<GeneId> {
        &self.targets
    }

    pub fn regulates(&self, gene: GeneId) -> bool {
        self.targets.contains(&gene)
    }

    pub fn is_regulated_by(&self, gene: GeneId) -> bool {
        self.regulators.contains(&gene)
    }

    /// True if the gene has at least one target
    pub fn is_regulator(&self) -> bool {
        !self.targets.is_empty()
    }

    pub(crate) fn add_target(&mut self, gene: GeneId) -> bool {
        self.targets.insert(gene)
    }

    pub(crate) fn add_regulator(&mut self, gene: GeneId) -> bool {
        self.regulators.insert(gene)
    }
}
