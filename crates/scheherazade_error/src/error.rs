//! Top-level error wrapper types.

use crate::{
    BackendError, BatchError, ConfigError, ContinuityError, EngineError, PremiseError, StoreError,
};

/// This is the foundation error enum covering every failure domain in the
/// Scheherazade workspace.
///
/// # Examples
///
/// ```
/// use scheherazade_error::{ScheherazadeError, ConfigError};
///
/// let cfg_err = ConfigError::new("window must be positive");
/// let err: ScheherazadeError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScheherazadeErrorKind {
    /// Invalid planning premise
    #[from(PremiseError)]
    Premise(PremiseError),
    /// Invalid batch request
    #[from(BatchError)]
    Batch(BatchError),
    /// Generation backend failure
    #[from(BackendError)]
    Backend(BackendError),
    /// Continuity fold failure
    #[from(ContinuityError)]
    Continuity(ContinuityError),
    /// Store failure
    #[from(StoreError)]
    Store(StoreError),
    /// Orchestration engine failure
    #[from(EngineError)]
    Engine(EngineError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Scheherazade error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scheherazade_error::{ScheherazadeResult, BackendError};
///
/// fn might_fail() -> ScheherazadeResult<()> {
///     Err(BackendError::transient("overloaded"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scheherazade Error: {}", _0)]
pub struct ScheherazadeError(Box<ScheherazadeErrorKind>);

impl ScheherazadeError {
    /// Create a new error from a kind.
    pub fn new(kind: ScheherazadeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScheherazadeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScheherazadeErrorKind
impl<T> From<T> for ScheherazadeError
where
    T: Into<ScheherazadeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scheherazade operations.
pub type ScheherazadeResult<T> = std::result::Result<T, ScheherazadeError>;
