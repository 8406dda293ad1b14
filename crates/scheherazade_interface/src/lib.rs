//! Trait definitions for the Scheherazade story orchestration engine.
//!
//! This crate provides the seams between the engine and its external
//! collaborators: the text-generation backend and the persistent store.
//! The engine depends only on these traits; concrete drivers and stores
//! live elsewhere.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ScheherazadeDriver, StoryStore};
pub use types::{AdvanceReport, ArcProgress, BatchRequest, StoryProgress, StorySummary};
