//! Story store error types.

/// Specific error conditions for store operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// No story exists under the given id
    #[display("Story {} not found", _0)]
    StoryNotFound(String),
    /// No chapter exists at the given number
    #[display("Chapter {} of story {} not found", number, story)]
    ChapterNotFound {
        /// Story id
        story: String,
        /// Global chapter number
        number: u32,
    },
    /// Compare-and-set on the story cursor observed a different value
    #[display("Cursor conflict: expected {} but store holds {}", expected, actual)]
    CursorConflict {
        /// Cursor value the caller expected
        expected: u32,
        /// Cursor value actually stored
        actual: u32,
    },
    /// A story with this id already exists
    #[display("Story {} already exists", _0)]
    DuplicateStory(String),
}

/// Error type for store operations.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The specific error condition
    pub kind: StoreErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoreError {
    /// Create a new StoreError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
