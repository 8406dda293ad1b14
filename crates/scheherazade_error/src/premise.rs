//! Premise validation error types.

/// Specific error conditions for epic planning input.
///
/// None of these are retryable; the caller must fix the premise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PremiseErrorKind {
    /// Universe has no main characters to build a story around
    #[display("Universe '{}' has no main characters", _0)]
    NoCharacters(String),
    /// Theme is empty or whitespace
    #[display("Story theme cannot be empty")]
    EmptyTheme,
    /// Protagonist name is empty or whitespace
    #[display("Protagonist name cannot be empty")]
    EmptyProtagonist,
    /// Story title is empty or whitespace
    #[display("Story title cannot be empty")]
    EmptyTitle,
}

/// Error type for invalid planning premises.
///
/// # Examples
///
/// ```
/// use scheherazade_error::{PremiseError, PremiseErrorKind};
///
/// let err = PremiseError::new(PremiseErrorKind::NoCharacters("Middle-earth".into()));
/// assert!(format!("{}", err).contains("no main characters"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Premise Error: {} at line {} in {}", kind, line, file)]
pub struct PremiseError {
    /// The specific error condition
    pub kind: PremiseErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PremiseError {
    /// Create a new PremiseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PremiseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
