//! In-memory implementation of StoryStore for testing.

use async_trait::async_trait;
use scheherazade_core::{Chapter, ContinuityState, Story, StoryId};
use scheherazade_error::{ScheherazadeResult, StoreError, StoreErrorKind};
use scheherazade_interface::{StorySummary, StoryStore};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory story store.
///
/// Stores stories in a HashMap protected by an RwLock for thread-safe
/// access. All data is lost when the store is dropped. The commit path runs
/// in a single write-lock critical section, so the cursor compare-and-set,
/// the chapter insert, and the continuity replacement are atomic together —
/// exactly the contract the batch generator depends on.
///
/// # Example
/// ```no_run
/// use scheherazade_storage::InMemoryStoryStore;
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryStoryStore::new();
///     // Use store.create_story(), story(), commit_chapter(), etc.
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoryStore {
    /// Storage keyed by story id
    stories: Arc<RwLock<HashMap<StoryId, StoredStory>>>,
}

/// Internal storage structure for one story.
#[derive(Debug, Clone)]
struct StoredStory {
    story: Story,
    continuity: ContinuityState,
    /// Chapter versions by number; the latest version is last
    chapters: BTreeMap<u32, Vec<Chapter>>,
}

impl InMemoryStoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored stories (for testing).
    pub async fn len(&self) -> usize {
        self.stories.read().await.len()
    }

    /// Check if the store is empty (for testing).
    pub async fn is_empty(&self) -> bool {
        self.stories.read().await.is_empty()
    }

    /// Clear all stories (for testing).
    pub async fn clear(&self) {
        self.stories.write().await.clear();
    }
}

#[async_trait]
impl StoryStore for InMemoryStoryStore {
    async fn create_story(
        &self,
        story: &Story,
        state: &ContinuityState,
    ) -> ScheherazadeResult<()> {
        let mut stories = self.stories.write().await;
        let id = *story.id();
        if stories.contains_key(&id) {
            return Err(StoreError::new(StoreErrorKind::DuplicateStory(id.to_string())).into());
        }
        stories.insert(
            id,
            StoredStory {
                story: story.clone(),
                continuity: state.clone(),
                chapters: BTreeMap::new(),
            },
        );
        Ok(())
    }

    async fn story(&self, id: StoryId) -> ScheherazadeResult<Story> {
        let stories = self.stories.read().await;
        stories
            .get(&id)
            .map(|stored| stored.story.clone())
            .ok_or_else(|| StoreError::new(StoreErrorKind::StoryNotFound(id.to_string())).into())
    }

    async fn list_stories(&self) -> ScheherazadeResult<Vec<StorySummary>> {
        let stories = self.stories.read().await;
        let mut summaries: Vec<StorySummary> = stories
            .values()
            .map(|stored| {
                let story = &stored.story;
                StorySummary::new(
                    *story.id(),
                    story.title().clone(),
                    story.universe().name().clone(),
                    story.protagonist().clone(),
                    *story.cursor(),
                    scheherazade_core::TOTAL_CHAPTERS,
                    *story.created_at(),
                )
            })
            .collect();

        // Newest first for listing displays
        summaries.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(summaries)
    }

    async fn chapter(&self, id: StoryId, number: u32) -> ScheherazadeResult<Chapter> {
        let stories = self.stories.read().await;
        let stored = stories
            .get(&id)
            .ok_or_else(|| StoreError::new(StoreErrorKind::StoryNotFound(id.to_string())))?;
        stored
            .chapters
            .get(&number)
            .and_then(|versions| versions.last())
            .cloned()
            .ok_or_else(|| {
                StoreError::new(StoreErrorKind::ChapterNotFound {
                    story: id.to_string(),
                    number,
                })
                .into()
            })
    }

    async fn chapter_versions(&self, id: StoryId, number: u32) -> ScheherazadeResult<u32> {
        let stories = self.stories.read().await;
        let stored = stories
            .get(&id)
            .ok_or_else(|| StoreError::new(StoreErrorKind::StoryNotFound(id.to_string())))?;
        Ok(stored
            .chapters
            .get(&number)
            .map(|versions| versions.len() as u32)
            .unwrap_or(0))
    }

    async fn continuity(&self, id: StoryId) -> ScheherazadeResult<ContinuityState> {
        let stories = self.stories.read().await;
        stories
            .get(&id)
            .map(|stored| stored.continuity.clone())
            .ok_or_else(|| StoreError::new(StoreErrorKind::StoryNotFound(id.to_string())).into())
    }

    async fn cursor(&self, id: StoryId) -> ScheherazadeResult<u32> {
        let stories = self.stories.read().await;
        stories
            .get(&id)
            .map(|stored| *stored.story.cursor())
            .ok_or_else(|| StoreError::new(StoreErrorKind::StoryNotFound(id.to_string())).into())
    }

    async fn commit_chapter(
        &self,
        chapter: &Chapter,
        state: &ContinuityState,
        expected_cursor: u32,
    ) -> ScheherazadeResult<()> {
        let mut stories = self.stories.write().await;
        let id = *chapter.story_id();
        let stored = stories
            .get_mut(&id)
            .ok_or_else(|| StoreError::new(StoreErrorKind::StoryNotFound(id.to_string())))?;

        let actual = *stored.story.cursor();
        if actual != expected_cursor {
            return Err(StoreError::new(StoreErrorKind::CursorConflict {
                expected: expected_cursor,
                actual,
            })
            .into());
        }

        let number = *chapter.number();
        if number == actual + 1 {
            // New chapter: first version, cursor advances.
            stored.chapters.insert(number, vec![chapter.clone()]);
            stored.story.set_cursor(number);
        } else if number == actual && actual > 0 {
            // Regeneration of the cursor-top chapter: append a version.
            stored
                .chapters
                .get_mut(&number)
                .expect("cursor-top chapter exists")
                .push(chapter.clone());
        } else {
            return Err(StoreError::new(StoreErrorKind::CursorConflict {
                expected: number.saturating_sub(1),
                actual,
            })
            .into());
        }

        stored.continuity = state.clone();
        Ok(())
    }
}
