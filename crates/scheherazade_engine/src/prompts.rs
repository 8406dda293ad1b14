//! Prompt assembly for backend calls.
//!
//! Every prompt the engine sends is built here, so the wire contract with
//! the backend (in particular the trailing recap block) lives in one place.

use scheherazade_core::{ArcPosition, ChapterRecap, PromptContext, Universe};

/// Marker opening the structured recap block at the end of a chapter.
pub(crate) const RECAP_MARKER: &str = "=== RECAP ===";

/// Prompt for one arc's thematic brief.
///
/// Conditioned on the previous arc's brief so the five briefs read as one
/// continuous escalation.
pub(crate) fn arc_brief_prompt(
    universe: &Universe,
    theme: &str,
    protagonist: &str,
    position: ArcPosition,
    previous_brief: Option<&str>,
) -> String {
    let mut prompt = format!(
        "You are planning arc {} of 5 (\"{}\") of an epic {} story set in the {} universe.\n\
         Main theme: {theme}\n\
         Protagonist: {protagonist}\n\
         Arc focus: {}\n",
        position.index(),
        position.label(),
        universe.genre(),
        universe.name(),
        position.theme(),
    );
    if !universe.main_characters().is_empty() {
        prompt.push_str(&format!(
            "Cast: {}\n",
            universe.main_characters().join(", ")
        ));
    }
    match previous_brief {
        Some(brief) => prompt.push_str(&format!(
            "The previous arc's brief, which this arc must follow from:\n{}\n",
            brief.trim()
        )),
        None => prompt.push_str("This is the opening arc of the story.\n"),
    }
    prompt.push_str(
        "Write a short thematic brief for this arc: the conflict the arc opens on, \
         the character growth expected across it, and the state the arc must end in. \
         Three to five sentences, prose only.",
    );
    prompt
}

/// Prompt for one chapter, built on the bounded context.
pub(crate) fn chapter_prompt(context: &PromptContext) -> String {
    format!(
        "Write chapter {} of the story below.\n\n{}\n\
         REQUIREMENTS:\n\
         - 1500-2500 words of prose with dialogue and character development\n\
         - Open by connecting to the most recent events\n\
         - Advance the arc's conflict; honor the arc brief\n\
         - Stay consistent with the character status and open threads above\n\n\
         After the prose, append exactly one block in this form:\n\
         {RECAP_MARKER}\n\
         <2-4 sentences: what changed, who changed>\n\
         opens: <thread-id> -- <one-line description>   (one line per newly opened thread, omit if none)\n\
         closes: <thread-id>                            (one line per resolved thread, omit if none)\n",
        context.chapter_number(),
        context.render(),
    )
}

/// Fallback prompt when a chapter arrived without its recap block.
pub(crate) fn recap_request_prompt(chapter_number: u32, chapter_text: &str) -> String {
    format!(
        "Summarize chapter {chapter_number} below as a recap block.\n\
         Reply with exactly:\n\
         {RECAP_MARKER}\n\
         <2-4 sentences: what changed, who changed>\n\
         opens: <thread-id> -- <one-line description>   (omit if none)\n\
         closes: <thread-id>                            (omit if none)\n\n\
         CHAPTER:\n{chapter_text}"
    )
}

/// Prompt compressing the oldest window entry into the cumulative summary.
pub(crate) fn compression_prompt(summary: &str, evicted: &ChapterRecap) -> String {
    let so_far = if summary.trim().is_empty() {
        "(nothing yet)"
    } else {
        summary.trim()
    };
    format!(
        "Merge the chapter recap into the running story summary. Keep every \
         plot-relevant fact, drop scene detail, and stay under 200 words. \
         Reply with the merged summary only.\n\n\
         RUNNING SUMMARY:\n{so_far}\n\n\
         RECAP TO MERGE:\n{}",
        evicted.as_context_line(),
    )
}
