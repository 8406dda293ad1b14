//! Orchestration engine error types.

/// Specific error conditions for the orchestration engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum EngineErrorKind {
    /// Another advance call already holds the story's token; retry after backoff
    #[display("Story {} already has an advance in flight", _0)]
    StoryBusy(String),
    /// A batch ended early; the committed prefix stays committed
    #[display(
        "Batch halted after {} of {} chapters (cursor at {}): {}",
        completed,
        requested,
        cursor,
        cause
    )]
    BatchHalted {
        /// Chapters committed before the failure
        completed: u32,
        /// Chapters originally requested
        requested: u32,
        /// Story cursor after the last committed chapter
        cursor: u32,
        /// Description of the underlying failure
        cause: String,
    },
}

/// Error type for orchestration engine operations.
///
/// `BatchHalted` carries the committed count and cursor so a caller can
/// resume without re-deriving progress.
///
/// # Examples
///
/// ```
/// use scheherazade_error::{EngineError, EngineErrorKind};
///
/// let err = EngineError::new(EngineErrorKind::StoryBusy("abc".into()));
/// assert!(format!("{}", err).contains("in flight"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Engine Error: {} at line {} in {}", kind, line, file)]
pub struct EngineError {
    /// The specific error condition
    pub kind: EngineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl EngineError {
    /// Create a new EngineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: EngineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
