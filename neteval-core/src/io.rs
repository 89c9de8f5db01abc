//! Line-oriented reading of tab-separated edge lists.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::info;

use crate::constants::FIELD_SEPARATOR;
use crate::types::NetEvalError;

/// One non-blank line of an edge-list file, split on tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 1-based line number in the source
    pub line: usize,
    pub fields: Vec<String>,
}

impl Record {
    pub fn column_count(&self) -> usize {
        self.fields.len()
    }
}

/// Iterator over the [`Record`]s of a reader.
///
/// Whitespace-only lines are skipped but still advance the line counter, so
/// error messages point at the physical line. Trailing empty fields are kept:
/// `"A\tB\t"` has three columns.
pub struct Records<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<Record, NetEvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;
            if text.trim().is_empty() {
                continue;
            }
            let fields = text.split(FIELD_SEPARATOR).map(str::to_string).collect();
            return Some(Ok(Record {
                line: self.line,
                fields,
            }));
        }
    }
}

pub fn records<R: BufRead>(reader: R) -> Records<R> {
    Records {
        lines: reader.lines(),
        line: 0,
    }
}

/// Opens a file for buffered reading, logging the path.
pub fn open_buffered(path: &Path) -> Result<BufReader<File>, NetEvalError> {
    info!(path = %path.display(), "Reading file");
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}
