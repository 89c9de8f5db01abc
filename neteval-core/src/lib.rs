//! # neteval - Gene Network Inference Assessment
//!
//! Scores a ranked list of predicted regulator → target edges against a
//! gold-standard network and analyzes the structure of its false positives.
//!
//! ## Overview
//!
//! Given a gold standard (the known regulatory edges) and a prediction (edges
//! ranked by confidence), the library computes:
//!
//! - **PR and ROC curves** over the whole universe of candidate edges, with
//!   unranked edges filled in as a random ranking would place them
//! - **AUPR and AUROC**, with the AUPR renormalized so that a perfect ranking
//!   scores 1, and the areas expected from a random ranking
//! - **Systematic errors**: false positives explained by a two-hop path
//!   (transitive) or by a shared regulator (co-regulation), compared with the
//!   counts expected from random false positives
//!
//! ## Quick Start
//!
//! ```rust
//! use neteval_core::{Evaluator, config::EvaluationConfig};
//!
//! let gold = "G1\tG2\nG1\tG3\nG2\tG4\nG2\tG5\n";
//! let prediction = "G1\tG2\t0.9\nG2\tG4\t0.7\nG1\tG4\t0.4\n";
//!
//! let evaluator = Evaluator::new(EvaluationConfig::default());
//! let results = evaluator.evaluate_str(gold, prediction)?;
//!
//! let areas = results.areas.expect("curves are computed by default");
//! println!("AUPR {} (random {})", areas.aupr, areas.aupr_random);
//! println!("AUROC {} (random {})", areas.auroc, areas.auroc_random);
//! # Ok::<(), neteval_core::types::NetEvalError>(())
//! ```
//!
//! ## Lower-level API
//!
//! The evaluator is a thin layer over the graph model and the algorithms,
//! which can be used directly:
//!
//! ```rust
//! use neteval_core::algorithms::{analyze_errors, area_under_curves, compute_curves};
//! use neteval_core::network::GoldStandard;
//! use neteval_core::prediction::PredictionList;
//!
//! let gold = GoldStandard::from_pairs([("G1", "G2"), ("G1", "G3"), ("G2", "G4"), ("G2", "G5")])?;
//! let predictions = PredictionList::from_triples(&gold, [("G1", "G2", 0.9), ("G1", "G4", 0.4)])?;
//!
//! let curves = compute_curves(&gold, &predictions)?;
//! let areas = area_under_curves(&gold, &curves)?;
//! assert!(areas.auroc > areas.auroc_random);
//!
//! // G1 -> G2 -> G4: the false positive G1 -> G4 is transitive
//! let motifs = analyze_errors(&gold, &predictions)?;
//! assert_eq!(motifs.observed.transitive, 1);
//! # Ok::<(), neteval_core::types::NetEvalError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Which analyses to run
//! - [`engine`]: The [`Evaluator`] driving loading and assessment
//! - [`network`]: Gold-standard graph and gene registry
//! - [`prediction`]: Ranked candidate edges restricted to the universe
//! - [`classify`]: True positive, transitive and co-regulation predicates
//! - [`algorithms`]: Curves, areas and motif counts
//! - [`results`]: Assessment results
//! - [`output`]: Result files and console reports
//! - [`io`]: Tab-separated record reading
//! - [`types`]: Error type
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, NetEvalError>`](types::NetEvalError),
//! distinguishing:
//!
//! - malformed or unreadable input files, with the offending line
//! - incompatible options
//! - gold standards on which a metric is undefined

pub mod algorithms;
pub mod classify;
pub mod config;
pub mod constants;
pub mod engine;
pub mod io;
pub mod network;
pub mod output;
pub mod prediction;
pub mod results;
pub mod types;

pub use engine::Evaluator;
pub use types::NetEvalError;
