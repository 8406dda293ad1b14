//! Trait definitions for generation backends and story persistence.

use crate::StorySummary;
use async_trait::async_trait;
use scheherazade_core::{Chapter, ContinuityState, GenerationRequest, Story, StoryId};
use scheherazade_error::ScheherazadeResult;

/// Core trait that all text-generation backends must implement.
///
/// The engine treats the backend as a black box: prompt in, text out.
/// Backends signal transient vs permanent failure through
/// `BackendErrorKind`; the engine's retry policy only retries transient
/// failures, and timeouts are just another transient failure.
#[async_trait]
pub trait ScheherazadeDriver: Send + Sync {
    /// Generate text for the given request.
    async fn generate(&self, req: &GenerationRequest) -> ScheherazadeResult<String>;

    /// Provider name (e.g., "anthropic", "openai", "ollama").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-3-5-sonnet-20241022").
    fn model_name(&self) -> &str;
}

/// Persistence seam for stories, chapters, and continuity state.
///
/// The contract the engine relies on:
///
/// - `commit_chapter` is atomic: it persists the chapter, replaces the
///   continuity state, and advances the cursor in one step, but only when
///   the stored cursor equals `expected_cursor` (compare-and-set). This is
///   what keeps chapter numbers strictly sequential with no holes.
/// - Recommitting the chapter at the current cursor appends a new version;
///   chapters are never edited in place.
/// - Reads observe committed state only.
#[async_trait]
pub trait StoryStore: Send + Sync {
    /// Persist a freshly planned story with its initial continuity state.
    async fn create_story(
        &self,
        story: &Story,
        state: &ContinuityState,
    ) -> ScheherazadeResult<()>;

    /// Load a story by id.
    async fn story(&self, id: StoryId) -> ScheherazadeResult<Story>;

    /// Summaries of every stored story, newest first.
    async fn list_stories(&self) -> ScheherazadeResult<Vec<StorySummary>>;

    /// Load the latest version of a chapter.
    async fn chapter(&self, id: StoryId, number: u32) -> ScheherazadeResult<Chapter>;

    /// Number of stored versions of a chapter (0 when absent).
    async fn chapter_versions(&self, id: StoryId, number: u32) -> ScheherazadeResult<u32>;

    /// Load the continuity state for a story.
    async fn continuity(&self, id: StoryId) -> ScheherazadeResult<ContinuityState>;

    /// Read the current cursor (last committed chapter number) for a story.
    async fn cursor(&self, id: StoryId) -> ScheherazadeResult<u32>;

    /// Atomically commit a chapter, its folded continuity state, and the new
    /// cursor, iff the stored cursor equals `expected_cursor`.
    async fn commit_chapter(
        &self,
        chapter: &Chapter,
        state: &ContinuityState,
        expected_cursor: u32,
    ) -> ScheherazadeResult<()>;
}
