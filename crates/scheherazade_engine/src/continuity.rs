//! Continuity tracking: the bounded memory that makes thousand-chapter
//! generation tractable.
//!
//! Instead of replaying all prior chapters into every prompt, the tracker
//! keeps the last K recaps verbatim and compresses everything older into a
//! rolling summary. Context size is a function of K, not of how far the
//! story has come.

use crate::{GenerationSettings, RetryPolicy, prompts};
use scheherazade_core::{
    ArcPlan, ChapterRecap, ContinuityState, GenerationRequest, PromptContext, Story, Universe,
};
use scheherazade_error::{ContinuityError, ContinuityErrorKind, ScheherazadeResult};
use scheherazade_interface::ScheherazadeDriver;
use tracing::debug;

/// Maintains the bounded continuity state across chapter generations.
#[derive(Debug, Clone)]
pub struct ContinuityTracker {
    /// Verbatim recaps kept before compression (K)
    window: usize,
    /// Sampling settings for the compression call
    settings: GenerationSettings,
}

impl ContinuityTracker {
    /// Create a tracker with the given window size K.
    pub fn new(window: usize, settings: GenerationSettings) -> Self {
        Self {
            window: window.max(1),
            settings,
        }
    }

    /// Window size K.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Empty state for a freshly planned story.
    pub fn initial_state(&self, story: &Story) -> ContinuityState {
        ContinuityState::initial(*story.id(), story.protagonist())
    }

    /// Render the bounded prompt context for the next chapter.
    ///
    /// The cliffhanger instruction is included exactly when the chapter's
    /// arc-local number is a multiple of 10.
    pub fn context_for(
        &self,
        story: &Story,
        arc: &ArcPlan,
        state: &ContinuityState,
        next_chapter: u32,
    ) -> PromptContext {
        PromptContext::assemble(story.title(), arc, state, next_chapter)
    }

    /// Fold a committed-to-be chapter's recap into a new continuity state.
    ///
    /// The input state is untouched; the caller publishes the returned state
    /// only by committing it with the chapter. When the window overflows K,
    /// the oldest recap is compressed into the cumulative summary with one
    /// driver call; if that call fails the fold fails atomically and the
    /// chapter is not complete.
    #[tracing::instrument(skip_all, fields(chapter = recap.chapter(), window = state.window_len()))]
    pub async fn fold<D: ScheherazadeDriver>(
        &self,
        driver: &D,
        retry: &RetryPolicy,
        universe: &Universe,
        state: &ContinuityState,
        recap: ChapterRecap,
    ) -> ScheherazadeResult<ContinuityState> {
        let chapter = *recap.chapter();
        let mut next = state.clone();

        for name in universe.main_characters() {
            if let Some(sentence) = sentence_mentioning(name, recap.summary()) {
                next.set_character_status(name.clone(), format!("As of chapter {chapter}: {sentence}"));
            }
        }

        for thread in recap.opened() {
            next.open_thread(thread.id().clone(), thread.description().clone());
        }
        for id in recap.closed() {
            next.close_thread(id);
        }

        next.push_recap(recap);

        while next.window_len() > self.window {
            let evicted = next.evict_oldest().expect("window is non-empty");
            debug!(evicted = evicted.chapter(), "Compressing oldest window entry");

            let request = GenerationRequest {
                prompt: prompts::compression_prompt(next.summary(), &evicted),
                max_tokens: Some(self.settings.summary_max_tokens),
                temperature: Some(self.settings.summary_temperature),
            };
            let compressed = retry.call(driver, &request).await.map_err(|e| {
                ContinuityError::new(ContinuityErrorKind::Compression {
                    chapter,
                    message: e.to_string(),
                })
            })?;
            next.set_summary(compressed.trim());
        }

        Ok(next)
    }
}

/// First sentence of `text` that mentions `name`, case-insensitively.
fn sentence_mentioning(name: &str, text: &str) -> Option<String> {
    let needle = name.to_lowercase();
    text.split_inclusive(['.', '!', '?'])
        .map(|s| s.trim())
        .find(|s| s.to_lowercase().contains(&needle))
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_lookup_is_case_insensitive() {
        let text = "The vault opened. HARRY stepped inside! Nothing stirred.";
        let sentence = sentence_mentioning("Harry", text).unwrap();
        assert_eq!(sentence, "HARRY stepped inside!");
        assert!(sentence_mentioning("Hermione", text).is_none());
    }
}
