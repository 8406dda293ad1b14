//! Continuity state error types.

/// Specific error conditions for continuity folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ContinuityErrorKind {
    /// Backend call compressing the evicted window entry failed
    #[display("Failed to compress continuity window for chapter {}: {}", chapter, message)]
    Compression {
        /// Chapter whose fold triggered the compression
        chapter: u32,
        /// Underlying failure
        message: String,
    },
    /// No recap could be extracted or generated for a chapter
    #[display("No recap could be produced for chapter {}", _0)]
    RecapExtraction(u32),
}

/// Error type for continuity fold failures.
///
/// A failed fold means the chapter at that position is not complete; it must
/// be retried before any later chapter is attempted.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Continuity Error: {} at line {} in {}", kind, line, file)]
pub struct ContinuityError {
    /// The specific error condition
    pub kind: ContinuityErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ContinuityError {
    /// Create a new ContinuityError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContinuityErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
