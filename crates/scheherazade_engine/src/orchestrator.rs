//! Top-level orchestration: the outward-facing engine surface.

use crate::{ChapterBatchGenerator, ContinuityTracker, EngineConfig, EpicPlanner};
use futures::{StreamExt, pin_mut};
use scheherazade_core::{CHAPTERS_PER_ARC, Chapter, Story, StoryId, TOTAL_CHAPTERS, Universe};
use scheherazade_error::{EngineError, EngineErrorKind, ScheherazadeResult};
use scheherazade_interface::{
    AdvanceReport, ArcProgress, BatchRequest, ScheherazadeDriver, StoryProgress, StorySummary,
    StoryStore,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, warn};

/// The orchestration engine.
///
/// Sequences planning and chapter batches, and enforces at most one
/// in-flight `advance` per story id via a per-story lock token. Calls for
/// distinct stories are independent and may run in parallel; a second
/// concurrent call for the same story fails fast with `StoryBusy` instead
/// of interleaving, because continuity state is not safe under concurrent
/// writers.
///
/// Cancelling an in-flight `advance` (dropping its future) loses at most
/// the chapter that was being generated; the cursor and continuity state
/// always reflect the last committed chapter because commits are atomic.
pub struct StoryEngine<D, S> {
    driver: D,
    store: S,
    config: EngineConfig,
    tracker: ContinuityTracker,
    /// Per-story advance tokens; the inner mutex is never held across calls
    locks: Mutex<HashMap<StoryId, Arc<AsyncMutex<()>>>>,
}

impl<D: ScheherazadeDriver, S: StoryStore> StoryEngine<D, S> {
    /// Create an engine with default configuration.
    pub fn new(driver: D, store: S) -> Self {
        Self::with_config(driver, store, EngineConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(driver: D, store: S, config: EngineConfig) -> Self {
        let tracker = ContinuityTracker::new(config.recap_window, config.generation);
        Self {
            driver,
            store,
            config,
            tracker,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Plan and persist a new epic story from a premise.
    #[tracing::instrument(skip_all, fields(title))]
    pub async fn create_epic(
        &self,
        universe: Universe,
        theme: &str,
        protagonist: &str,
        title: &str,
    ) -> ScheherazadeResult<Story> {
        let planner = EpicPlanner::new(
            &self.driver,
            &self.store,
            self.config.retry,
            self.config.generation,
        );
        planner.plan(universe, theme, protagonist, title).await
    }

    /// Generate the next `num_chapters` chapters of a story within an arc.
    ///
    /// The starting chapter is always computed from the persisted cursor;
    /// callers cannot choose it, which is what keeps chapter numbers
    /// strictly sequential per story.
    ///
    /// # Errors
    ///
    /// - `EngineErrorKind::StoryBusy` when another advance is in flight for
    ///   this story
    /// - `BatchErrorKind` variants for caller misuse (unknown arc, arc
    ///   boundary, count)
    /// - `EngineErrorKind::BatchHalted` when generation fails mid-batch;
    ///   carries the committed count and cursor so the caller can resume
    #[tracing::instrument(skip(self), fields(story = %story_id, arc = arc_index, count = num_chapters))]
    pub async fn advance(
        &self,
        story_id: StoryId,
        arc_index: u8,
        num_chapters: u32,
    ) -> ScheherazadeResult<AdvanceReport> {
        let token = self.story_token(story_id);
        let _guard = token.try_lock_owned().map_err(|_| {
            warn!(story = %story_id, "Rejecting concurrent advance");
            EngineError::new(EngineErrorKind::StoryBusy(story_id.to_string()))
        })?;

        let story = self.store.story(story_id).await?;
        let state = self.store.continuity(story_id).await?;
        let start_chapter = story.next_chapter();

        let generator = ChapterBatchGenerator::new(
            &self.driver,
            &self.store,
            &self.tracker,
            self.config.retry,
            self.config.generation,
            self.config.max_batch,
        );
        let request = BatchRequest::new(story_id, arc_index, start_chapter, num_chapters);
        let stream = generator.generate_batch(story, state, request)?;
        pin_mut!(stream);

        let mut completed = 0u32;
        while let Some(item) = stream.next().await {
            match item {
                Ok(chapter) => {
                    completed += 1;
                    debug!(chapter = chapter.number(), "Advance committed a chapter");
                }
                Err(err) => {
                    let cursor = start_chapter - 1 + completed;
                    return Err(EngineError::new(EngineErrorKind::BatchHalted {
                        completed,
                        requested: num_chapters,
                        cursor,
                        cause: err.to_string(),
                    })
                    .into());
                }
            }
        }

        let cursor = start_chapter - 1 + completed;
        info!(story = %story_id, completed, cursor, "Advance finished");
        Ok(AdvanceReport::new(
            story_id,
            arc_index,
            num_chapters,
            completed,
            cursor,
        ))
    }

    /// Load a story.
    pub async fn get_story(&self, story_id: StoryId) -> ScheherazadeResult<Story> {
        self.store.story(story_id).await
    }

    /// Load the latest version of a chapter.
    pub async fn get_chapter(&self, story_id: StoryId, number: u32) -> ScheherazadeResult<Chapter> {
        self.store.chapter(story_id, number).await
    }

    /// Summaries of every stored story.
    pub async fn list_stories(&self) -> ScheherazadeResult<Vec<StorySummary>> {
        self.store.list_stories().await
    }

    /// Generation progress for a story, computed from committed state only.
    pub async fn progress(&self, story_id: StoryId) -> ScheherazadeResult<StoryProgress> {
        let story = self.store.story(story_id).await?;
        let cursor = *story.cursor();

        let arcs = story
            .arcs()
            .iter()
            .map(|arc| {
                let completed = if cursor >= *arc.end_chapter() {
                    CHAPTERS_PER_ARC
                } else if cursor < *arc.start_chapter() {
                    0
                } else {
                    cursor - arc.start_chapter() + 1
                };
                ArcProgress::new(*arc.index(), arc.name().clone(), completed, CHAPTERS_PER_ARC)
            })
            .collect();

        let current_arc = if story.is_complete() {
            None
        } else {
            story.arc_for_chapter(cursor + 1).map(|arc| *arc.index())
        };

        Ok(StoryProgress::new(
            story_id,
            story.title().clone(),
            cursor,
            TOTAL_CHAPTERS,
            f64::from(cursor) / f64::from(TOTAL_CHAPTERS),
            current_arc,
            arcs,
        ))
    }

    /// The advance token for a story, created on first use.
    fn story_token(&self, story_id: StoryId) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().expect("lock map is never poisoned");
        locks
            .entry(story_id)
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }
}
