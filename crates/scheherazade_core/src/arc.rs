//! Arc structure: the fixed five-act skeleton of an epic story.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Number of arcs in every epic story.
pub const ARC_COUNT: u8 = 5;

/// Number of chapters in every arc.
pub const CHAPTERS_PER_ARC: u32 = 200;

/// Total chapters in an epic story.
pub const TOTAL_CHAPTERS: u32 = ARC_COUNT as u32 * CHAPTERS_PER_ARC;

/// The five fixed narrative positions, in story order.
///
/// Every epic follows the same macro-structure: awakening, rising conflict,
/// crucible, convergence, resolution. The position determines an arc's label,
/// theme, and chapter range; only the thematic brief varies per story.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ArcPosition {
    /// Discovery and introduction; the protagonist's destiny surfaces
    Awakening,
    /// First major conflicts; allies and enemies revealed
    RisingConflict,
    /// Greatest trials; transformation and loss
    Crucible,
    /// Gathering forces; the final confrontation approaches
    Convergence,
    /// Climax and new beginning
    Resolution,
}

impl ArcPosition {
    /// One-based arc index for this position.
    pub fn index(&self) -> u8 {
        match self {
            Self::Awakening => 1,
            Self::RisingConflict => 2,
            Self::Crucible => 3,
            Self::Convergence => 4,
            Self::Resolution => 5,
        }
    }

    /// Display title for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Awakening => "The Awakening",
            Self::RisingConflict => "The Rising Storm",
            Self::Crucible => "The Crucible",
            Self::Convergence => "The Convergence",
            Self::Resolution => "The Resolution",
        }
    }

    /// Thematic focus for this position.
    pub fn theme(&self) -> &'static str {
        match self {
            Self::Awakening => "Discovery and Introduction",
            Self::RisingConflict => "Challenges and Growth",
            Self::Crucible => "Trials and Transformation",
            Self::Convergence => "Preparation and Alliance",
            Self::Resolution => "Climax and New Beginning",
        }
    }
}

/// Inclusive chapter range for the arc at a one-based index.
///
/// # Examples
///
/// ```
/// use scheherazade_core::arc_range;
///
/// assert_eq!(arc_range(1), (1, 200));
/// assert_eq!(arc_range(5), (801, 1000));
/// ```
pub fn arc_range(index: u8) -> (u32, u32) {
    let start = (index as u32 - 1) * CHAPTERS_PER_ARC + 1;
    (start, start + CHAPTERS_PER_ARC - 1)
}

/// One-based arc index that a global chapter number belongs to.
pub fn arc_index_for(chapter: u32) -> u8 {
    ((chapter - 1) / CHAPTERS_PER_ARC) as u8 + 1
}

/// One arc of a planned story.
///
/// The chapter range and position are fixed by the planner's deterministic
/// partition; the `brief` is generated once from the premise and frozen. It
/// is the stable contract chapters in this arc must honor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ArcPlan {
    /// One-based arc index
    index: u8,
    /// Fixed narrative position
    position: ArcPosition,
    /// Display name, e.g. "The Awakening: ancient magic awakening"
    name: String,
    /// First chapter of this arc (inclusive)
    start_chapter: u32,
    /// Last chapter of this arc (inclusive)
    end_chapter: u32,
    /// Frozen thematic brief: entry conflict, expected growth, exit state
    brief: String,
}

impl ArcPlan {
    /// Create an arc plan at the deterministic range for its position.
    pub fn new(position: ArcPosition, theme: &str, brief: impl Into<String>) -> Self {
        let index = position.index();
        let (start_chapter, end_chapter) = arc_range(index);
        Self {
            index,
            position,
            name: format!("{}: {}", position.label(), theme),
            start_chapter,
            end_chapter,
            brief: brief.into(),
        }
    }

    /// Check whether a global chapter number falls inside this arc.
    pub fn contains(&self, chapter: u32) -> bool {
        chapter >= self.start_chapter && chapter <= self.end_chapter
    }

    /// One-based position of a global chapter number within this arc.
    pub fn arc_local(&self, chapter: u32) -> u32 {
        chapter - self.start_chapter + 1
    }

    /// Whether a chapter at this global number carries the cliffhanger flag.
    ///
    /// Cliffhangers land on every tenth arc-local chapter by convention.
    pub fn is_cliffhanger_slot(&self, chapter: u32) -> bool {
        self.contains(chapter) && self.arc_local(chapter) % 10 == 0
    }
}
