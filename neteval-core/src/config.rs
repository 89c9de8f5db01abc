use crate::types::NetEvalError;

/// Configuration settings for a network assessment.
///
/// An assessment either computes PR/ROC curves or analyzes systematic
/// prediction errors, never both: curves are meant for complete rankings,
/// whereas error analysis is meant for a prediction cut off at some
/// confidence threshold.
///
/// # Examples
///
/// ## Default configuration (PR and ROC)
///
/// ```rust
/// use neteval_core::config::EvaluationConfig;
///
/// let config = EvaluationConfig::default();
/// assert!(config.compute_pr && config.compute_roc);
/// assert!(!config.analyze_motifs);
/// ```
///
/// ## Motif analysis on four threads
///
/// ```rust
/// use neteval_core::config::EvaluationConfig;
///
/// let config = EvaluationConfig {
///     num_threads: Some(4),
///     ..EvaluationConfig::from_flags(false, false, true)?
/// };
/// assert!(config.analyze_motifs && !config.computes_curves());
/// # Ok::<(), neteval_core::types::NetEvalError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationConfig {
    /// Compute the precision-recall curve and AUPR.
    ///
    /// **Default**: `true`
    pub compute_pr: bool,

    /// Compute the ROC curve and AUROC.
    ///
    /// **Default**: `true`
    pub compute_roc: bool,

    /// Count transitive and co-regulation false positives and compare them
    /// with a random prediction.
    ///
    /// **Default**: `false`
    pub analyze_motifs: bool,

    /// Rank predictions by descending score instead of file order.
    ///
    /// Ties keep their file order.
    ///
    /// **Default**: `false` (the file order is the ranking)
    pub sort_predictions: bool,

    /// Number of threads for the universe enumeration of the error analysis.
    ///
    /// **Default**: `None` (rayon's global pool)
    pub num_threads: Option<usize>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            compute_pr: true,
            compute_roc: true,
            analyze_motifs: false,
            sort_predictions: false,
            num_threads: None,
        }
    }
}

impl EvaluationConfig {
    /// Derives the analyses to run from the `--PR`, `--ROC` and `--motifs`
    /// switches.
    ///
    /// With no switch both curves are computed. `--PR` alone or `--ROC`
    /// alone restricts the output to that curve.
    ///
    /// # Errors
    ///
    /// Returns [`NetEvalError::InvalidConfiguration`] if `motifs` is combined
    /// with `pr` or `roc`.
    pub fn from_flags(pr: bool, roc: bool, motifs: bool) -> Result<Self, NetEvalError> {
        if motifs && (pr || roc) {
            return Err(NetEvalError::InvalidConfiguration(
                "PR/ROC curves and prediction errors cannot be analyzed at the same time \
                 (PR/ROC should be computed over complete lists, whereas prediction errors \
                 should be analyzed after applying a cutoff)"
                    .to_string(),
            ));
        }
        let either = pr || roc;
        Ok(Self {
            compute_pr: !motifs && (pr || !either),
            compute_roc: !motifs && (roc || !either),
            analyze_motifs: motifs,
            ..Self::default()
        })
    }

    /// True if PR or ROC output is requested
    pub const fn computes_curves(&self) -> bool {
        self.compute_pr || self.compute_roc
    }

    /// Checks the invariants of [`EvaluationConfig::from_flags`] on a
    /// hand-built configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NetEvalError::InvalidConfiguration`] if curves and motif
    /// analysis are both requested, if nothing is requested, or if
    /// `num_threads` is zero.
    pub fn validate(&self) -> Result<(), NetEvalError> {
        if self.analyze_motifs && self.computes_curves() {
            return Err(NetEvalError::InvalidConfiguration(
                "PR/ROC curves and motif analysis are mutually exclusive".to_string(),
            ));
        }
        if !self.analyze_motifs && !self.computes_curves() {
            return Err(NetEvalError::InvalidConfiguration(
                "nothing to compute".to_string(),
            ));
        }
        if self.num_threads == Some(0) {
            return Err(NetEvalError::InvalidConfiguration(
                "the number of threads must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_computes_both_curves() {
        let config = EvaluationConfig::default();
        assert!(config.compute_pr);
        assert!(config.compute_roc);
        assert!(!config.analyze_motifs);
        assert!(!config.sort_predictions);
        assert_eq!(config.num_threads, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_flags_is_default() {
        assert_eq!(
            EvaluationConfig::from_flags(false, false, false).unwrap(),
            EvaluationConfig::default()
        );
    }

    #[test]
    fn test_single_curve_flags() {
        let pr = EvaluationConfig::from_flags(true, false, false).unwrap();
        assert!(pr.compute_pr && !pr.compute_roc);

        let roc = EvaluationConfig::from_flags(false, true, false).unwrap();
        assert!(!roc.compute_pr && roc.compute_roc);

        let both = EvaluationConfig::from_flags(true, true, false).unwrap();
        assert!(both.compute_pr && both.compute_roc);
    }

    #[test]
    fn test_motifs_flag() {
        let config = EvaluationConfig::from_flags(false, false, true).unwrap();
        assert!(config.analyze_motifs);
        assert!(!config.computes_curves());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_motifs_with_curves_rejected() {
        for (pr, roc) in [(true, false), (false, true), (true, true)] {
            assert!(matches!(
                EvaluationConfig::from_flags(pr, roc, true),
                Err(NetEvalError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_validate_hand_built() {
        let both = EvaluationConfig {
            analyze_motifs: true,
            ..Default::default()
        };
        assert!(both.validate().is_err());

        let nothing = EvaluationConfig {
            compute_pr: false,
            compute_roc: false,
            ..Default::default()
        };
        assert!(nothing.validate().is_err());

        let zero_threads = EvaluationConfig {
            num_threads: Some(0),
            ..Default::default()
        };
        assert!(zero_threads.validate().is_err());
    }
}
