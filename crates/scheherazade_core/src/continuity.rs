//! Bounded continuity state: the engine's rolling memory of a story.

use crate::{ChapterRecap, StoryId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Bounded rolling memory for one story.
///
/// Holds the last K chapter recaps verbatim, a compressed cumulative summary
/// of everything older, the current status of each character, and the open
/// plot threads. The window never grows past K, so prompt context stays
/// O(K) no matter how many chapters exist.
///
/// State is mutated exactly once per committed chapter by the continuity
/// tracker's fold; it is persisted atomically alongside the chapter it
/// reflects and is never advanced speculatively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuityState {
    /// Owning story
    story_id: StoryId,
    /// Verbatim recaps of the most recent chapters, oldest first
    window: VecDeque<ChapterRecap>,
    /// Compressed summary of everything before the window
    summary: String,
    /// Character name to current-status line
    characters: BTreeMap<String, String>,
    /// Open plot thread id to one-line description
    open_threads: BTreeMap<String, String>,
}

impl ContinuityState {
    /// Empty state for a new story, seeded with the protagonist.
    pub fn initial(story_id: StoryId, protagonist: &str) -> Self {
        let mut characters = BTreeMap::new();
        characters.insert(
            protagonist.to_string(),
            "At the beginning of the journey".to_string(),
        );
        Self {
            story_id,
            window: VecDeque::new(),
            summary: String::new(),
            characters,
            open_threads: BTreeMap::new(),
        }
    }

    /// Owning story id.
    pub fn story_id(&self) -> StoryId {
        self.story_id
    }

    /// Verbatim recap window, oldest first.
    pub fn window(&self) -> impl Iterator<Item = &ChapterRecap> {
        self.window.iter()
    }

    /// Number of recaps currently held verbatim.
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Compressed summary of everything before the window.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Character status map.
    pub fn characters(&self) -> &BTreeMap<String, String> {
        &self.characters
    }

    /// Open plot threads.
    pub fn open_threads(&self) -> &BTreeMap<String, String> {
        &self.open_threads
    }

    /// Append a recap to the back of the window.
    pub fn push_recap(&mut self, recap: ChapterRecap) {
        self.window.push_back(recap);
    }

    /// Pop the oldest recap off the window for compression.
    pub fn evict_oldest(&mut self) -> Option<ChapterRecap> {
        self.window.pop_front()
    }

    /// Replace the compressed cumulative summary.
    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    /// Update (or insert) a character's current status.
    pub fn set_character_status(&mut self, name: impl Into<String>, status: impl Into<String>) {
        self.characters.insert(name.into(), status.into());
    }

    /// Record a newly opened plot thread.
    pub fn open_thread(&mut self, id: impl Into<String>, description: impl Into<String>) {
        self.open_threads.insert(id.into(), description.into());
    }

    /// Remove a resolved plot thread. Unknown ids are ignored.
    pub fn close_thread(&mut self, id: &str) {
        self.open_threads.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_seeds_protagonist_only() {
        let state = ContinuityState::initial(StoryId::random(), "Frodo Baggins");
        assert_eq!(state.window_len(), 0);
        assert_eq!(state.characters().len(), 1);
        assert!(state.characters().contains_key("Frodo Baggins"));
        assert!(state.open_threads().is_empty());
        assert!(state.summary().is_empty());
    }

    #[test]
    fn threads_open_and_close() {
        let mut state = ContinuityState::initial(StoryId::random(), "Arya Stark");
        state.open_thread("the-list", "Names still to cross off");
        assert_eq!(state.open_threads().len(), 1);
        state.close_thread("the-list");
        state.close_thread("never-existed");
        assert!(state.open_threads().is_empty());
    }
}
