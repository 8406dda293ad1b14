//! Generation backend error types and retry classification.

/// Specific error conditions for generation backend calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum BackendErrorKind {
    /// Transient failure (timeout, overload, rate limit); safe to retry
    #[display("Transient backend failure: {}", _0)]
    Transient(String),
    /// Permanent failure (bad request, auth, model missing); retrying cannot help
    #[display("Permanent backend failure: {}", _0)]
    Permanent(String),
    /// Backend returned an empty response
    #[display("Backend returned empty content")]
    EmptyResponse,
    /// Retry policy exhausted its attempt budget
    #[display("Backend failed after {} attempts: {}", attempts, last_error)]
    Exhausted {
        /// Number of attempts made
        attempts: usize,
        /// Message from the final attempt
        last_error: String,
    },
}

impl BackendErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Timeouts are reported by drivers as `Transient` and retried like any
    /// other transient failure.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BackendErrorKind::Transient(_) | BackendErrorKind::EmptyResponse
        )
    }
}

/// Generation backend error with source location tracking.
///
/// # Examples
///
/// ```
/// use scheherazade_error::{BackendError, BackendErrorKind};
///
/// let err = BackendError::new(BackendErrorKind::Transient("503".into()));
/// assert!(err.kind.is_retryable());
///
/// let err = BackendError::new(BackendErrorKind::Permanent("invalid model".into()));
/// assert!(!err.kind.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Backend Error: {} at line {} in {}", kind, line, file)]
pub struct BackendError {
    /// The kind of error that occurred
    pub kind: BackendErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BackendError {
    /// Create a new BackendError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a transient failure.
    #[track_caller]
    pub fn transient(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Transient(message.into()))
    }

    /// Shorthand for a permanent failure.
    #[track_caller]
    pub fn permanent(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Permanent(message.into()))
    }
}
