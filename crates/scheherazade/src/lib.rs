//! Scheherazade: epic multi-arc story generation.
//!
//! This facade crate re-exports the public surface of the workspace: the
//! data model, the driver and store traits, the in-memory reference store,
//! and the orchestration engine, plus tracing setup in [`observability`].
//!
//! # Example
//!
//! ```rust,ignore
//! use scheherazade::{StoryEngine, InMemoryStoryStore, catalog_universe};
//!
//! # async fn example(driver: impl scheherazade::ScheherazadeDriver) {
//! scheherazade::observability::init_observability().ok();
//!
//! let engine = StoryEngine::new(driver, InMemoryStoryStore::new());
//! let universe = catalog_universe("Harry Potter").unwrap();
//! let story = engine
//!     .create_epic(universe, "ancient magic awakening", "Harry Potter", "The Ninth Gate")
//!     .await
//!     .unwrap();
//!
//! let report = engine.advance(*story.id(), 1, 10).await.unwrap();
//! println!("committed {} chapters", report.completed());
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod observability;

pub use scheherazade_core::{
    ARC_COUNT, ArcPlan, ArcPosition, CHAPTERS_PER_ARC, Chapter, ChapterRecap, ContinuityState,
    GenerationRequest, PlotThread, PromptContext, Story, StoryId, TOTAL_CHAPTERS, Universe,
    UniverseBuilder, arc_index_for, arc_range, catalog, catalog_universe,
};
pub use scheherazade_engine::{
    ChapterBatchGenerator, ContinuityTracker, EngineConfig, EpicPlanner, GenerationSettings,
    RetryPolicy, StoryEngine,
};
pub use scheherazade_error::{
    BackendError, BackendErrorKind, BatchError, BatchErrorKind, ConfigError, ContinuityError,
    ContinuityErrorKind, EngineError, EngineErrorKind, PremiseError, PremiseErrorKind,
    ScheherazadeError, ScheherazadeErrorKind, ScheherazadeResult, StoreError, StoreErrorKind,
};
pub use scheherazade_interface::{
    AdvanceReport, ArcProgress, BatchRequest, ScheherazadeDriver, StoryProgress, StorySummary,
    StoryStore,
};
pub use scheherazade_storage::InMemoryStoryStore;
