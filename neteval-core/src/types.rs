use thiserror::Error;

/// Error types that can occur while loading or assessing a network.
///
/// The variants group into three families:
///
/// - input errors: [`IoError`](Self::IoError), [`EmptyInput`](Self::EmptyInput),
///   [`Parse`](Self::Parse), [`InvalidScore`](Self::InvalidScore),
///   [`SelfLoop`](Self::SelfLoop), [`DuplicateEdge`](Self::DuplicateEdge)
/// - configuration errors: [`InvalidConfiguration`](Self::InvalidConfiguration)
/// - degenerate inputs that make a metric undefined:
///   [`DegenerateInput`](Self::DegenerateInput)
#[derive(Error, Debug)]
pub enum NetEvalError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Input contained no records
    #[error("The file is empty: {0}")]
    EmptyInput(String),
    /// Malformed record
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
    /// Score column is not a finite floating-point literal
    #[error("Parse error at line {line}: invalid score '{value}'")]
    InvalidScore { line: usize, value: String },
    /// Edge from a gene to itself
    #[error("Parse error at line {line}: self-loop on '{gene}'")]
    SelfLoop { line: usize, gene: String },
    /// The same predicted edge was listed twice.
    ///
    /// Stricter than a plain ranked-list reader, which would rank the pair
    /// twice and count one gold-standard edge as two true positives. Only
    /// kept edges are checked; repeats of dropped records are ignored.
    #[error("Parse error at line {line}: duplicate prediction {regulator} -> {target}")]
    DuplicateEdge {
        line: usize,
        regulator: String,
        target: String,
    },
    /// Incompatible options
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The gold standard cannot support the requested metric
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
    /// A numerical postcondition did not hold
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NetEvalError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Whether the error stems from the input files rather than the options
    /// or the shape of the gold standard.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::IoError(_)
                | Self::EmptyInput(_)
                | Self::Parse { .. }
                | Self::InvalidScore { .. }
                | Self::SelfLoop { .. }
                | Self::DuplicateEdge { .. }
        )
    }
}
