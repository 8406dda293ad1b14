//! Error types for the Scheherazade story orchestration engine.
//!
//! This crate provides the foundation error types used throughout the
//! Scheherazade workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scheherazade_error::{ScheherazadeResult, PremiseError, PremiseErrorKind};
//!
//! fn plan_story() -> ScheherazadeResult<()> {
//!     Err(PremiseError::new(PremiseErrorKind::EmptyTheme))?
//! }
//!
//! match plan_story() {
//!     Ok(_) => println!("Planned"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod batch;
mod config;
mod continuity;
mod engine;
mod error;
mod premise;
mod store;

pub use backend::{BackendError, BackendErrorKind};
pub use batch::{BatchError, BatchErrorKind};
pub use config::ConfigError;
pub use continuity::{ContinuityError, ContinuityErrorKind};
pub use engine::{EngineError, EngineErrorKind};
pub use error::{ScheherazadeError, ScheherazadeErrorKind, ScheherazadeResult};
pub use premise::{PremiseError, PremiseErrorKind};
pub use store::{StoreError, StoreErrorKind};
