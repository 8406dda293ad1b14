//! Batch request validation error types.

/// Specific error conditions for chapter batch requests.
///
/// These indicate caller misuse and are not retryable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum BatchErrorKind {
    /// Arc index is outside 1..=5
    #[display("Arc {} does not exist (valid arcs are 1..=5)", _0)]
    UnknownArc(u8),
    /// Requested chapter window falls outside the named arc's range
    #[display(
        "Chapters {}..={} fall outside arc {} (chapters {}..={})",
        requested_start,
        requested_end,
        arc,
        arc_start,
        arc_end
    )]
    ArcBoundary {
        /// Arc index named in the request
        arc: u8,
        /// First chapter of the arc
        arc_start: u32,
        /// Last chapter of the arc
        arc_end: u32,
        /// First requested chapter
        requested_start: u32,
        /// Last requested chapter
        requested_end: u32,
    },
    /// Batch does not start at the story cursor + 1
    #[display(
        "Batch starts at chapter {} but the story cursor is {} (next chapter must be {})",
        requested_start,
        cursor,
        cursor + 1
    )]
    OutOfOrder {
        /// Current story cursor (last committed chapter)
        cursor: u32,
        /// First requested chapter
        requested_start: u32,
    },
    /// Chapter count is outside the allowed 1..=50 range
    #[display("Batch count {} is outside 1..={}", count, max)]
    CountOutOfRange {
        /// Requested chapter count
        count: u32,
        /// Maximum chapters per batch
        max: u32,
    },
}

/// Error type for invalid batch requests.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Batch Error: {} at line {} in {}", kind, line, file)]
pub struct BatchError {
    /// The specific error condition
    pub kind: BatchErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl BatchError {
    /// Create a new BatchError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BatchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
