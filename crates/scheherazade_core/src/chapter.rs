//! Generated chapters.

use crate::{ChapterRecap, StoryId};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One generated chapter of a story.
///
/// Chapters are immutable once committed; regeneration appends a new
/// `version` rather than editing in place, so the full history stays
/// auditable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct Chapter {
    /// Owning story
    story_id: StoryId,
    /// Global chapter number (1..=1000, unique per story)
    number: u32,
    /// One-based index of the arc this chapter belongs to
    arc_index: u8,
    /// Chapter title, extracted from the text or synthesized
    title: String,
    /// Full generated prose
    text: String,
    /// Structured recap of this chapter's narrative delta
    recap: ChapterRecap,
    /// Universe characters mentioned in the text
    #[builder(default)]
    featured_characters: Vec<String>,
    /// Key plot-point sentences found by the discovery heuristic
    #[builder(default)]
    plot_points: Vec<String>,
    /// Word count of the prose
    word_count: usize,
    /// True iff the arc-local chapter number is a multiple of 10
    cliffhanger: bool,
    /// Closing tension line, when one was found on a cliffhanger chapter
    #[builder(default)]
    cliffhanger_line: Option<String>,
    /// Version number; regeneration appends, never overwrites
    #[builder(default = "1")]
    version: u32,
    /// Creation timestamp
    #[builder(default = "Utc::now()")]
    created_at: DateTime<Utc>,
}

impl Chapter {
    /// Create a chapter builder.
    pub fn builder() -> ChapterBuilder {
        ChapterBuilder::default()
    }

    /// Version number a regeneration of this chapter would receive.
    pub fn next_version(&self) -> u32 {
        self.version + 1
    }
}
