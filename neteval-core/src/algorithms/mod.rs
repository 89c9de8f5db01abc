//! Assessment algorithms.
//!
//! - [`curves`]: rank accumulation with random-fill extrapolation, PR and ROC curves
//! - [`area`]: trapezoidal areas, AUPR renormalization, random baselines
//! - [`motifs`]: observed and expected transitive / co-regulation errors

pub mod area;
pub mod curves;
pub mod motifs;

pub use area::{AreaUnderCurves, area_under_curves};
pub use curves::{Curve, CurvePoint, Curves, RankCounts, compute_curves};
pub use motifs::{MotifAnalysis, MotifCounts, analyze_errors};
