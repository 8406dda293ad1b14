//! Bounded prompt context for one chapter generation.

use crate::{ArcPlan, ContinuityState};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The bounded textual context handed to the generation backend for one
/// chapter.
///
/// Rendered from the continuity state and the arc brief. Its size depends
/// only on the fixed window K and the character/thread maps, never on how
/// many chapters the story already has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct PromptContext {
    /// Story title
    story_title: String,
    /// Arc display name
    arc_name: String,
    /// Frozen arc brief
    arc_brief: String,
    /// Global chapter number being generated
    chapter_number: u32,
    /// One-based position of the chapter within its arc
    arc_local: u32,
    /// Compressed summary of everything before the window
    summary: String,
    /// Verbatim recap lines for the window, oldest first
    recent: Vec<String>,
    /// "Name: status" lines for every tracked character
    characters: Vec<String>,
    /// "id: description" lines for every open thread
    open_threads: Vec<String>,
    /// Whether this chapter must end on a cliffhanger
    cliffhanger_due: bool,
}

impl PromptContext {
    /// Build the context for generating `chapter_number` of `arc`.
    pub fn assemble(
        story_title: &str,
        arc: &ArcPlan,
        state: &ContinuityState,
        chapter_number: u32,
    ) -> Self {
        Self {
            story_title: story_title.to_string(),
            arc_name: arc.name().clone(),
            arc_brief: arc.brief().clone(),
            chapter_number,
            arc_local: arc.arc_local(chapter_number),
            summary: state.summary().to_string(),
            recent: state.window().map(|r| r.as_context_line()).collect(),
            characters: state
                .characters()
                .iter()
                .map(|(name, status)| format!("{name}: {status}"))
                .collect(),
            open_threads: state
                .open_threads()
                .iter()
                .map(|(id, description)| format!("{id}: {description}"))
                .collect(),
            cliffhanger_due: arc.is_cliffhanger_slot(chapter_number),
        }
    }

    /// Render the context block for inclusion in a prompt.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "STORY: {} | ARC: {} | CHAPTER: {} ({} of 200 in arc)\n",
            self.story_title, self.arc_name, self.chapter_number, self.arc_local
        ));
        out.push_str(&format!("ARC BRIEF:\n{}\n", self.arc_brief.trim()));
        if !self.summary.is_empty() {
            out.push_str(&format!("STORY SO FAR (compressed):\n{}\n", self.summary.trim()));
        }
        if !self.recent.is_empty() {
            out.push_str("RECENT CHAPTERS:\n");
            for line in &self.recent {
                out.push_str(&format!("- {line}\n"));
            }
        }
        if !self.characters.is_empty() {
            out.push_str("CHARACTER STATUS:\n");
            for line in &self.characters {
                out.push_str(&format!("- {line}\n"));
            }
        }
        if !self.open_threads.is_empty() {
            out.push_str("OPEN THREADS:\n");
            for line in &self.open_threads {
                out.push_str(&format!("- {line}\n"));
            }
        }
        if self.cliffhanger_due {
            out.push_str(
                "This chapter falls on a cliffhanger slot: end it on a moment of \
                 unresolved tension.\n",
            );
        }
        out
    }
}
