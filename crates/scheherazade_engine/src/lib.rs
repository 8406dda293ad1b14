//! Epic story orchestration engine.
//!
//! This crate turns a one-line premise into a five-arc, thousand-chapter
//! plan and drives chapter generation against a pluggable backend while
//! keeping a bounded continuity state, so prompt context stays O(K) no
//! matter how long the story grows.
//!
//! # Components
//!
//! - [`EpicPlanner`]: premise → planned [`Story`](scheherazade_core::Story)
//!   with frozen per-arc briefs
//! - [`ContinuityTracker`]: the bounded recap window and its fold/compress
//!   cycle
//! - [`ChapterBatchGenerator`]: lazy, restartable chapter sequences where
//!   every yielded chapter is already committed
//! - [`StoryEngine`]: the outward-facing orchestrator enforcing one
//!   in-flight advance per story
//!
//! # Example
//!
//! ```rust,ignore
//! use scheherazade_engine::StoryEngine;
//! use scheherazade_storage::InMemoryStoryStore;
//!
//! # async fn example(driver: impl scheherazade_interface::ScheherazadeDriver) {
//! let engine = StoryEngine::new(driver, InMemoryStoryStore::new());
//! let story = engine
//!     .create_epic(universe, "ancient magic awakening", "Harry Potter", "The Ninth Gate")
//!     .await
//!     .unwrap();
//! let report = engine.advance(*story.id(), 1, 10).await.unwrap();
//! assert_eq!(*report.completed(), 10);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod config;
mod continuity;
mod extraction;
mod orchestrator;
mod planner;
mod prompts;
mod retry;

pub use batch::ChapterBatchGenerator;
pub use config::{EngineConfig, GenerationSettings};
pub use continuity::ContinuityTracker;
pub use extraction::{
    cliffhanger_line, extract_recap, extract_title, featured_characters, parse_recap_body,
    plot_points, strip_recap,
};
pub use orchestrator::StoryEngine;
pub use planner::EpicPlanner;
pub use retry::RetryPolicy;
