//! Chapter recaps: the structured narrative delta of one chapter.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A named plot thread opened by a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct PlotThread {
    /// Short stable identifier, e.g. "the-sealed-vault"
    #[new(into)]
    id: String,
    /// One-line description of the thread
    #[new(into)]
    description: String,
}

/// Structured summary of one chapter's narrative delta.
///
/// Two to four sentences covering what changed and who changed, plus the
/// plot threads the chapter opened or closed. Recaps are what the continuity
/// tracker folds; the full chapter text is never replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ChapterRecap {
    /// Global chapter number this recap describes
    chapter: u32,
    /// The 2-4 sentence summary
    summary: String,
    /// Threads this chapter opened
    opened: Vec<PlotThread>,
    /// Ids of threads this chapter resolved
    closed: Vec<String>,
}

impl ChapterRecap {
    /// Create a recap.
    pub fn new(
        chapter: u32,
        summary: impl Into<String>,
        opened: Vec<PlotThread>,
        closed: Vec<String>,
    ) -> Self {
        Self {
            chapter,
            summary: summary.into(),
            opened,
            closed,
        }
    }

    /// Render the recap as a single context line.
    pub fn as_context_line(&self) -> String {
        format!("Chapter {}: {}", self.chapter, self.summary.trim())
    }
}
