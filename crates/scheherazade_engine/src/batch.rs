//! Chapter batch generation.
//!
//! A batch is a lazy, strictly sequential stream of chapters. Every
//! chapter's prompt context is a function of the previous chapter's folded
//! state, so there is no fan-out within a batch. Every chapter the stream
//! yields has already been committed (chapter + folded state + cursor in
//! one atomic store operation), which is what makes a batch restartable: a
//! caller that crashes mid-batch resumes from the last committed chapter.

use crate::{ContinuityTracker, GenerationSettings, RetryPolicy, extraction, prompts};
use async_stream::try_stream;
use futures::Stream;
use scheherazade_core::{ArcPlan, Chapter, ContinuityState, GenerationRequest, Story};
use scheherazade_error::{
    BatchError, BatchErrorKind, ContinuityError, ContinuityErrorKind, ScheherazadeResult,
};
use scheherazade_interface::{BatchRequest, ScheherazadeDriver, StoryStore};
use tracing::{debug, info};

/// Generates one batch of chapters at a time against the backend.
pub struct ChapterBatchGenerator<'a, D, S> {
    driver: &'a D,
    store: &'a S,
    tracker: &'a ContinuityTracker,
    retry: RetryPolicy,
    settings: GenerationSettings,
    max_batch: u32,
}

impl<'a, D: ScheherazadeDriver, S: StoryStore> ChapterBatchGenerator<'a, D, S> {
    /// Create a batch generator over a driver, store, and tracker.
    pub fn new(
        driver: &'a D,
        store: &'a S,
        tracker: &'a ContinuityTracker,
        retry: RetryPolicy,
        settings: GenerationSettings,
        max_batch: u32,
    ) -> Self {
        Self {
            driver,
            store,
            tracker,
            retry,
            settings,
            max_batch,
        }
    }

    /// Produce the lazy chapter stream for one batch.
    ///
    /// Validation happens eagerly; the returned stream only ever carries
    /// generation-time failures. When a chapter fails, the stream ends —
    /// chapters already yielded stay committed, there is no rollback.
    ///
    /// # Errors
    ///
    /// - `BatchErrorKind::CountOutOfRange` when `count` is 0 or exceeds the
    ///   batch bound
    /// - `BatchErrorKind::UnknownArc` when `arc_index` is not 1..=5
    /// - `BatchErrorKind::ArcBoundary` when the chapter window leaves the arc
    /// - `BatchErrorKind::OutOfOrder` when the batch does not start at
    ///   cursor + 1
    #[tracing::instrument(skip(self, story, state), fields(story = %request.story_id(), arc = request.arc_index(), start = request.start_chapter(), count = request.count()))]
    pub fn generate_batch(
        &self,
        story: Story,
        state: ContinuityState,
        request: BatchRequest,
    ) -> ScheherazadeResult<impl Stream<Item = ScheherazadeResult<Chapter>> + 'a> {
        let count = *request.count();
        if count == 0 || count > self.max_batch {
            return Err(BatchError::new(BatchErrorKind::CountOutOfRange {
                count,
                max: self.max_batch,
            })
            .into());
        }
        let arc_index = *request.arc_index();
        let arc = story
            .arc(arc_index)
            .cloned()
            .ok_or_else(|| BatchError::new(BatchErrorKind::UnknownArc(arc_index)))?;
        let start_chapter = *request.start_chapter();
        let end_chapter = request.end_chapter();
        if !arc.contains(start_chapter) || !arc.contains(end_chapter) {
            return Err(BatchError::new(BatchErrorKind::ArcBoundary {
                arc: arc_index,
                arc_start: *arc.start_chapter(),
                arc_end: *arc.end_chapter(),
                requested_start: start_chapter,
                requested_end: end_chapter,
            })
            .into());
        }
        if start_chapter != story.next_chapter() {
            return Err(BatchError::new(BatchErrorKind::OutOfOrder {
                cursor: *story.cursor(),
                requested_start: start_chapter,
            })
            .into());
        }

        let generator = Self {
            driver: self.driver,
            store: self.store,
            tracker: self.tracker,
            retry: self.retry,
            settings: self.settings,
            max_batch: self.max_batch,
        };
        Ok(try_stream! {
            let mut state = state;
            for number in start_chapter..=end_chapter {
                let chapter = generator
                    .generate_one(&story, &arc, &mut state, number)
                    .await?;
                yield chapter;
            }
        })
    }

    /// Generate, fold, and commit a single chapter.
    async fn generate_one(
        &self,
        story: &Story,
        arc: &ArcPlan,
        state: &mut ContinuityState,
        number: u32,
    ) -> ScheherazadeResult<Chapter> {
        let context = self.tracker.context_for(story, arc, state, number);
        let request = GenerationRequest {
            prompt: prompts::chapter_prompt(&context),
            max_tokens: Some(self.settings.chapter_max_tokens),
            temperature: Some(self.settings.chapter_temperature),
        };
        let raw = self.retry.call(self.driver, &request).await?;
        let raw = raw.replace("```", "");

        let recap = match extraction::extract_recap(number, &raw) {
            Some(recap) => recap,
            None => {
                debug!(chapter = number, "No recap block in chapter text, requesting one");
                let request = GenerationRequest {
                    prompt: prompts::recap_request_prompt(number, &raw),
                    max_tokens: Some(self.settings.recap_max_tokens),
                    temperature: Some(self.settings.summary_temperature),
                };
                let body = self.retry.call(self.driver, &request).await?;
                extraction::parse_recap_body(number, &body).ok_or_else(|| {
                    ContinuityError::new(ContinuityErrorKind::RecapExtraction(number))
                })?
            }
        };

        let folded = self
            .tracker
            .fold(self.driver, &self.retry, story.universe(), state, recap.clone())
            .await?;

        let prose = extraction::strip_recap(&raw).to_string();
        let cliffhanger = arc.is_cliffhanger_slot(number);
        let chapter = Chapter::builder()
            .story_id(*story.id())
            .number(number)
            .arc_index(*arc.index())
            .title(extraction::extract_title(&prose, number, arc))
            .text(prose.clone())
            .recap(recap)
            .featured_characters(extraction::featured_characters(&prose, story.universe()))
            .plot_points(extraction::plot_points(&prose))
            .word_count(prose.split_whitespace().count())
            .cliffhanger(cliffhanger)
            .cliffhanger_line(if cliffhanger {
                extraction::cliffhanger_line(&prose)
            } else {
                None
            })
            .build()
            .expect("all chapter fields are set");

        // Publish chapter, folded state, and cursor in one atomic step.
        self.store
            .commit_chapter(&chapter, &folded, number - 1)
            .await?;
        *state = folded;

        info!(chapter = number, words = chapter.word_count(), "Chapter committed");
        Ok(chapter)
    }
}
