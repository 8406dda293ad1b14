//! Shared view types crossing the engine boundary.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use scheherazade_core::StoryId;
use serde::{Deserialize, Serialize};

/// Lightweight listing row for a stored story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
pub struct StorySummary {
    /// Story identity
    story_id: StoryId,
    /// Story title
    #[new(into)]
    title: String,
    /// Name of the universe snapshot
    #[new(into)]
    universe: String,
    /// Protagonist name
    #[new(into)]
    protagonist: String,
    /// Last committed chapter number
    cursor: u32,
    /// Total chapters planned
    total_chapters: u32,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

/// One chapter-batch request, derived from caller input.
///
/// Validated against arc boundaries and the story cursor before any
/// generation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct BatchRequest {
    /// Story to generate for
    story_id: StoryId,
    /// One-based arc the chapters must belong to
    arc_index: u8,
    /// First chapter of the batch; must equal the story cursor + 1
    start_chapter: u32,
    /// Number of chapters (1..=50)
    count: u32,
}

impl BatchRequest {
    /// Last chapter of the batch (inclusive).
    pub fn end_chapter(&self) -> u32 {
        self.start_chapter + self.count.saturating_sub(1)
    }
}

/// Outcome of a completed `advance` call.
///
/// A failed advance reports the same numbers through
/// `EngineErrorKind::BatchHalted` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct AdvanceReport {
    /// Story that was advanced
    story_id: StoryId,
    /// Arc the batch ran in
    arc_index: u8,
    /// Chapters requested
    requested: u32,
    /// Chapters actually committed (equals `requested` on success)
    completed: u32,
    /// Story cursor after the batch
    cursor: u32,
}

/// Completion state of one arc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct ArcProgress {
    /// One-based arc index
    index: u8,
    /// Arc display name
    #[new(into)]
    name: String,
    /// Chapters committed within this arc
    completed: u32,
    /// Chapters this arc spans
    total: u32,
}

/// Generation progress for a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
pub struct StoryProgress {
    /// Story identity
    story_id: StoryId,
    /// Story title
    #[new(into)]
    title: String,
    /// Chapters committed so far
    completed: u32,
    /// Total chapters planned
    total: u32,
    /// Fraction of the story committed, 0.0..=1.0
    fraction: f64,
    /// Arc currently being generated, `None` when the story is complete
    current_arc: Option<u8>,
    /// Per-arc completion
    arcs: Vec<ArcProgress>,
}
