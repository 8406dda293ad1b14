//! Story identity and planned structure.

use crate::{ArcPlan, TOTAL_CHAPTERS, Universe};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a story.
///
/// # Examples
///
/// ```
/// use scheherazade_core::StoryId;
///
/// let id = StoryId::random();
/// assert_ne!(id, StoryId::random());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{_0}")]
pub struct StoryId(Uuid);

impl StoryId {
    /// Generate a fresh random story id.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A planned epic story.
///
/// Created once by the planner from a premise; the cursor (last committed
/// chapter number, 0 when nothing is committed) advances only through the
/// store's compare-and-set commit. The universe is a frozen snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Story {
    /// Story identity
    id: StoryId,
    /// Story title
    title: String,
    /// Frozen snapshot of the owning universe
    universe: Universe,
    /// Main theme driving all five arc briefs
    theme: String,
    /// Protagonist name
    protagonist: String,
    /// One-line synopsis composed at plan time
    summary: String,
    /// The five arc plans, in order
    arcs: Vec<ArcPlan>,
    /// Last committed global chapter number (0 = none)
    cursor: u32,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Story {
    /// Assemble a freshly planned story with an empty cursor.
    pub fn new(
        id: StoryId,
        title: impl Into<String>,
        universe: Universe,
        theme: impl Into<String>,
        protagonist: impl Into<String>,
        summary: impl Into<String>,
        arcs: Vec<ArcPlan>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            universe,
            theme: theme.into(),
            protagonist: protagonist.into(),
            summary: summary.into(),
            arcs,
            cursor: 0,
            created_at: Utc::now(),
        }
    }

    /// Arc plan at a one-based index.
    pub fn arc(&self, index: u8) -> Option<&ArcPlan> {
        (index as usize)
            .checked_sub(1)
            .and_then(|i| self.arcs.get(i))
    }

    /// Arc plan containing a global chapter number.
    pub fn arc_for_chapter(&self, chapter: u32) -> Option<&ArcPlan> {
        self.arcs.iter().find(|arc| arc.contains(chapter))
    }

    /// The next chapter number to generate.
    pub fn next_chapter(&self) -> u32 {
        self.cursor + 1
    }

    /// Whether every chapter of the story has been committed.
    pub fn is_complete(&self) -> bool {
        self.cursor >= TOTAL_CHAPTERS
    }

    /// Advance the cursor to a newly committed chapter number.
    ///
    /// Only the store calls this, inside its compare-and-set commit.
    pub fn set_cursor(&mut self, cursor: u32) {
        self.cursor = cursor;
    }
}
