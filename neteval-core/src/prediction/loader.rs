use std::io::BufRead;
use std::path::Path;

use tracing::{debug, warn};

use super::PredictionList;
use crate::constants::PREDICTION_COLUMNS;
use crate::io::{open_buffered, records};
use crate::network::GoldStandard;
use crate::types::NetEvalError;

impl PredictionList {
    /// Loads a ranked prediction from `regulator<TAB>target<TAB>score` lines.
    ///
    /// Lines are taken as ranked best-first. Edges outside the universe of
    /// `gold` (unknown genes, or a regulator with no gold-standard targets)
    /// are silently dropped; a warning is logged if the kept scores are not
    /// in descending order.
    ///
    /// # Errors
    ///
    /// - [`NetEvalError::EmptyInput`] if the input has no records
    /// - [`NetEvalError::Parse`] if a record does not have three columns
    /// - [`NetEvalError::InvalidScore`] if a score is not a finite number
    /// - [`NetEvalError::SelfLoop`] for a record `X<TAB>X<TAB>score`
    /// - [`NetEvalError::DuplicateEdge`] if a kept edge appears twice; a
    ///   repeated record outside the universe is dropped like any other
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neteval_core::network::GoldStandard;
    /// use neteval_core::prediction::PredictionList;
    /// use std::io::Cursor;
    ///
    /// let gold = GoldStandard::from_pairs([("G1", "G2"), ("G2", "G3")])?;
    /// let text = "G1\tG2\t0.93\nG2\tG1\t0.41\nG7\tG1\t0.12\n";
    /// let predictions = PredictionList::from_reader(Cursor::new(text), &gold, "inline")?;
    /// assert_eq!(predictions.len(), 2);
    /// # Ok::<(), neteval_core::types::NetEvalError>(())
    /// ```
    pub fn from_reader<R: BufRead>(
        reader: R,
        gold: &GoldStandard,
        source: &str,
    ) -> Result<Self, NetEvalError> {
        let mut list = Self::default();

        for record in records(reader) {
            let record = record?;
            if record.column_count() != PREDICTION_COLUMNS {
                return Err(NetEvalError::parse(record.line, "expected three columns"));
            }
            let score = parse_score(&record.fields[2]).ok_or_else(|| {
                NetEvalError::InvalidScore {
                    line: record.line,
                    value: record.fields[2].clone(),
                }
            })?;
            list.push_named(
                gold,
                record.line,
                &record.fields[0],
                &record.fields[1],
                score,
            )?;
        }

        if list.records_read() == 0 {
            return Err(NetEvalError::EmptyInput(source.to_string()));
        }
        if !list.is_sorted_by_score() {
            warn!(
                source,
                "Prediction scores are not in descending order; using input order as the ranking"
            );
        }
        debug!(
            read = list.records_read(),
            kept = list.len(),
            dropped = list.dropped_count(),
            "Loaded prediction"
        );
        Ok(list)
    }

    /// Loads a prediction file; see [`PredictionList::from_reader`].
    ///
    /// # Errors
    ///
    /// Returns [`NetEvalError::IoError`] if the file cannot be read, otherwise
    /// the errors of [`PredictionList::from_reader`].
    pub fn from_file<P: AsRef<Path>>(path: P, gold: &GoldStandard) -> Result<Self, NetEvalError> {
        let path = path.as_ref();
        let reader = open_buffered(path)?;
        Self::from_reader(reader, gold, &path.display().to_string())
    }
}

fn parse_score(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|s| s.is_finite())
}
