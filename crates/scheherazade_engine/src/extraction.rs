//! Heuristics that pull structure out of generated prose.
//!
//! The backend is asked to follow the recap block contract, but generated
//! text drifts; everything here is written to degrade gracefully rather
//! than reject a chapter outright.

use regex::Regex;
use scheherazade_core::{ArcPlan, ChapterRecap, PlotThread, Universe};
use std::sync::LazyLock;

static RECAP_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*={2,}\s*RECAP\s*={2,}\s*$").expect("static pattern"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("static pattern"));

/// Keywords marking a sentence as a plot point.
const PLOT_KEYWORDS: [&str; 5] = ["discovered", "revealed", "decided", "confronted", "realized"];

/// Keywords marking a closing sentence as a cliffhanger beat.
const CLIFFHANGER_KEYWORDS: [&str; 4] = ["suddenly", "but then", "however", "unexpectedly"];

/// Extract the trailing recap block from generated chapter text.
///
/// Returns `None` when the marker is missing or the block has no summary
/// sentences; the caller then falls back to a dedicated recap call.
pub fn extract_recap(chapter: u32, text: &str) -> Option<ChapterRecap> {
    let marker = RECAP_SPLIT.find_iter(text).last()?;
    let body = &text[marker.end()..];
    parse_recap_body(chapter, body)
}

/// Parse a recap block body (the lines after the marker).
///
/// Also accepts a full response that still carries the marker, as the
/// fallback recap call does.
pub fn parse_recap_body(chapter: u32, body: &str) -> Option<ChapterRecap> {
    let body = match RECAP_SPLIT.find_iter(body).last() {
        Some(marker) => &body[marker.end()..],
        None => body,
    };

    let mut summary_lines = Vec::new();
    let mut opened = Vec::new();
    let mut closed = Vec::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = strip_prefix_ci(line, "opens:") {
            let (id, description) = match rest.split_once("--") {
                Some((id, description)) => (id.trim(), description.trim()),
                None => (rest.trim(), ""),
            };
            if !id.is_empty() {
                opened.push(PlotThread::new(id, description));
            }
        } else if let Some(rest) = strip_prefix_ci(line, "closes:") {
            let id = rest.trim();
            if !id.is_empty() {
                closed.push(id.to_string());
            }
        } else {
            summary_lines.push(line);
        }
    }

    let summary = summary_lines.join(" ");
    if summary.is_empty() {
        return None;
    }
    Some(ChapterRecap::new(chapter, summary, opened, closed))
}

/// Chapter prose with the trailing recap block removed.
pub fn strip_recap(text: &str) -> &str {
    match RECAP_SPLIT.find_iter(text).last() {
        Some(marker) => text[..marker.start()].trim_end(),
        None => text.trim_end(),
    }
}

/// Chapter title: the first line when it reads like a heading, otherwise a
/// synthesized one.
pub fn extract_title(text: &str, chapter: u32, arc: &ArcPlan) -> String {
    if let Some(first_line) = text.lines().find(|l| !l.trim().is_empty()) {
        let candidate = first_line.trim().trim_matches(['#', '*', ' ']);
        let lowered = candidate.to_lowercase();
        if candidate.len() < 100 && (lowered.contains("chapter") || lowered.contains("part")) {
            return candidate.to_string();
        }
    }
    format!("Chapter {}: {} Continues", chapter, arc.position().theme())
}

/// Universe characters mentioned anywhere in the text.
pub fn featured_characters(text: &str, universe: &Universe) -> Vec<String> {
    let lowered = text.to_lowercase();
    universe
        .main_characters()
        .iter()
        .filter(|name| lowered.contains(&name.to_lowercase()))
        .cloned()
        .collect()
}

/// Up to three sentences carrying a discovery keyword.
pub fn plot_points(text: &str) -> Vec<String> {
    sentences(text)
        .into_iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            PLOT_KEYWORDS.iter().any(|k| lowered.contains(k))
        })
        .take(3)
        .collect()
}

/// Cliffhanger beat from the closing sentences, when one exists.
pub fn cliffhanger_line(text: &str) -> Option<String> {
    let all = sentences(text);
    all.iter()
        .rev()
        .take(3)
        .find(|sentence| {
            let lowered = sentence.to_lowercase();
            CLIFFHANGER_KEYWORDS.iter().any(|k| lowered.contains(k))
        })
        .cloned()
}

/// Case-insensitive prefix strip.
fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        line.get(prefix.len()..)
    } else {
        None
    }
}

/// Split text into trimmed sentences.
fn sentences(text: &str) -> Vec<String> {
    SENTENCE_END
        .split(text)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
