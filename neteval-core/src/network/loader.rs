use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use super::GoldStandard;
use crate::constants::GOLD_STANDARD_EDGE_FLAG;
use crate::io::{open_buffered, records};
use crate::types::NetEvalError;

/// Column layout of a gold-standard file, fixed by its first record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GoldStandardFormat {
    /// `regulator<TAB>target`
    TwoColumn,
    /// `regulator<TAB>target<TAB>1`
    ThreeColumn,
}

impl GoldStandardFormat {
    const fn from_columns(columns: usize) -> Option<Self> {
        match columns {
            2 => Some(Self::TwoColumn),
            3 => Some(Self::ThreeColumn),
            _ => None,
        }
    }

    const fn columns(self) -> usize {
        match self {
            Self::TwoColumn => 2,
            Self::ThreeColumn => 3,
        }
    }
}

impl GoldStandard {
    /// Loads a gold standard from a tab-separated edge list.
    ///
    /// The first record decides between the two- and three-column format and
    /// every later record must follow it. In the three-column format the last
    /// column must be exactly `1`.
    ///
    /// # Arguments
    ///
    /// * `reader` - Source of the edge list
    /// * `source` - Name used in error messages (usually the file path)
    ///
    /// # Errors
    ///
    /// - [`NetEvalError::EmptyInput`] if the input has no records
    /// - [`NetEvalError::Parse`] on a column count that disagrees with the
    ///   format, or a third column other than `1`
    /// - [`NetEvalError::SelfLoop`] on an edge `X -> X`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neteval_core::network::GoldStandard;
    /// use std::io::Cursor;
    ///
    /// let text = "G1\tG2\t1\nG1\tG3\t1\n";
    /// let gold = GoldStandard::from_reader(Cursor::new(text), "inline")?;
    /// assert_eq!(gold.gold_standard_edge_count(), 2);
    /// # Ok::<(), neteval_core::types::NetEvalError>(())
    /// ```
    pub fn from_reader<R: BufRead>(reader: R, source: &str) -> Result<Self, NetEvalError> {
        let mut gold = Self::new();
        let mut format = None;

        for record in records(reader) {
            let record = record?;
            let columns = record.column_count();
            let expected = match format {
                Some(f) => f,
                None => {
                    let f = GoldStandardFormat::from_columns(columns).ok_or_else(|| {
                        NetEvalError::parse(record.line, "expected two or three columns")
                    })?;
                    format = Some(f);
                    f
                }
            };

            if columns != expected.columns() {
                let message = match expected {
                    GoldStandardFormat::TwoColumn => "expected two columns",
                    GoldStandardFormat::ThreeColumn => "expected three columns",
                };
                return Err(NetEvalError::parse(record.line, message));
            }
            if expected == GoldStandardFormat::ThreeColumn
                && record.fields[2] != GOLD_STANDARD_EDGE_FLAG
            {
                return Err(NetEvalError::parse(
                    record.line,
                    "the third column must be '1'",
                ));
            }

            gold.insert_named_edge(record.line, &record.fields[0], &record.fields[1])?;
        }

        if format.is_none() {
            return Err(NetEvalError::EmptyInput(source.to_string()));
        }

        debug!(
            genes = gold.gene_count(),
            regulators = gold.regulator_count(),
            edges = gold.gold_standard_edge_count(),
            "Loaded gold standard"
        );
        Ok(gold)
    }

    /// Loads a gold standard from a file; see [`GoldStandard::from_reader`].
    ///
    /// # Errors
    ///
    /// Returns [`NetEvalError::IoError`] if the file cannot be read, otherwise
    /// the parse errors of [`GoldStandard::from_reader`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, NetEvalError> {
        let path = path.as_ref();
        let reader = open_buffered(path)?;
        Self::from_reader(reader, &path.display().to_string())
    }
}
