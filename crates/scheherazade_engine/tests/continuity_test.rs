mod common;

use common::{ScriptedDriver, test_universe};
use scheherazade_core::{ArcPlan, ArcPosition, ChapterRecap, PlotThread, Story, StoryId};
use scheherazade_engine::{ContinuityTracker, GenerationSettings, RetryPolicy};
use scheherazade_error::{ContinuityErrorKind, ScheherazadeErrorKind};
use strum::IntoEnumIterator;

fn fast_retry() -> RetryPolicy {
    RetryPolicy::new(2, 1, 1)
}

fn test_story() -> Story {
    let arcs = ArcPosition::iter()
        .map(|position| ArcPlan::new(position, "theme", "brief"))
        .collect();
    Story::new(
        StoryId::random(),
        "Title",
        test_universe(),
        "theme",
        "Harry Potter",
        "summary",
        arcs,
    )
}

fn recap(chapter: u32) -> ChapterRecap {
    ChapterRecap::new(
        chapter,
        format!("Harry Potter pressed on in chapter {chapter}."),
        vec![PlotThread::new(
            format!("thread-{chapter}"),
            format!("Opened in chapter {chapter}"),
        )],
        vec![],
    )
}

#[tokio::test]
async fn initial_state_is_empty_with_seeded_protagonist() {
    let tracker = ContinuityTracker::new(10, GenerationSettings::default());
    let story = test_story();
    let state = tracker.initial_state(&story);

    assert_eq!(state.story_id(), *story.id());
    assert_eq!(state.window_len(), 0);
    assert_eq!(state.characters().len(), 1);
    assert!(state.characters().contains_key("Harry Potter"));
    assert!(state.open_threads().is_empty());
}

#[tokio::test]
async fn fold_appends_without_eviction_below_the_window() {
    let driver = ScriptedDriver::new();
    let tracker = ContinuityTracker::new(10, GenerationSettings::default());
    let story = test_story();
    let mut state = tracker.initial_state(&story);

    for chapter in 1..=5 {
        state = tracker
            .fold(&driver, &fast_retry(), story.universe(), &state, recap(chapter))
            .await
            .unwrap();
    }

    assert_eq!(state.window_len(), 5);
    assert!(state.summary().is_empty());
    // No compression calls were needed.
    assert_eq!(driver.calls(), 0);
}

#[tokio::test]
async fn window_stays_bounded_as_chapters_accumulate() {
    let driver = ScriptedDriver::new();
    let window = 3;
    let tracker = ContinuityTracker::new(window, GenerationSettings::default());
    let story = test_story();
    let mut state = tracker.initial_state(&story);

    for chapter in 1..=20 {
        state = tracker
            .fold(&driver, &fast_retry(), story.universe(), &state, recap(chapter))
            .await
            .unwrap();
        assert!(state.window_len() <= window);
    }

    assert_eq!(state.window_len(), window);
    assert!(!state.summary().is_empty());
    // One compression per fold past the window.
    assert_eq!(driver.calls(), 20 - window);

    // Context size tracks the window, not the chapter count.
    let arc = story.arc(1).unwrap();
    let context = tracker.context_for(&story, arc, &state, 21);
    assert_eq!(context.recent().len(), window);
}

#[tokio::test]
async fn fold_updates_character_status_and_threads() {
    let driver = ScriptedDriver::new();
    let tracker = ContinuityTracker::new(10, GenerationSettings::default());
    let story = test_story();
    let state = tracker.initial_state(&story);

    let folded = tracker
        .fold(
            &driver,
            &fast_retry(),
            story.universe(),
            &state,
            ChapterRecap::new(
                4,
                "Harry Potter found the vault. Hermione Granger decoded the runes.",
                vec![PlotThread::new("the-vault", "What lies inside the vault")],
                vec![],
            ),
        )
        .await
        .unwrap();

    assert!(folded.characters()["Harry Potter"].contains("found the vault"));
    assert!(folded.characters()["Hermione Granger"].contains("decoded the runes"));
    assert_eq!(
        folded.open_threads()["the-vault"],
        "What lies inside the vault"
    );

    // A later recap resolves the thread.
    let folded = tracker
        .fold(
            &driver,
            &fast_retry(),
            story.universe(),
            &folded,
            ChapterRecap::new(
                5,
                "The vault stood empty.",
                vec![],
                vec!["the-vault".to_string()],
            ),
        )
        .await
        .unwrap();
    assert!(folded.open_threads().is_empty());
}

#[tokio::test]
async fn failed_compression_leaves_state_untouched() {
    let driver = ScriptedDriver::failing_compression();
    let window = 2;
    let tracker = ContinuityTracker::new(window, GenerationSettings::default());
    let story = test_story();
    let mut state = tracker.initial_state(&story);

    // Fill the window without triggering compression.
    for chapter in 1..=window as u32 {
        state = tracker
            .fold(&driver, &fast_retry(), story.universe(), &state, recap(chapter))
            .await
            .unwrap();
    }
    let before = state.clone();

    // The next fold must compress, and compression fails.
    let err = tracker
        .fold(&driver, &fast_retry(), story.universe(), &state, recap(3))
        .await
        .unwrap_err();
    match err.kind() {
        ScheherazadeErrorKind::Continuity(e) => {
            assert!(matches!(e.kind, ContinuityErrorKind::Compression { chapter: 3, .. }))
        }
        other => panic!("unexpected error: {other}"),
    }

    // No partial mutation: the caller's state still reflects chapter 2.
    assert_eq!(state, before);
    assert_eq!(state.window_len(), window);
    assert!(state.summary().is_empty());
}

#[tokio::test]
async fn context_marks_cliffhanger_slots() {
    let tracker = ContinuityTracker::new(10, GenerationSettings::default());
    let story = test_story();
    let arc = story.arc(1).unwrap();
    let state = tracker.initial_state(&story);

    let context = tracker.context_for(&story, arc, &state, 10);
    assert!(*context.cliffhanger_due());
    assert!(context.render().contains("cliffhanger"));

    let context = tracker.context_for(&story, arc, &state, 11);
    assert!(!*context.cliffhanger_due());
    assert!(!context.render().contains("cliffhanger"));
}

#[tokio::test]
async fn context_render_carries_all_sections() {
    let driver = ScriptedDriver::new();
    let tracker = ContinuityTracker::new(10, GenerationSettings::default());
    let story = test_story();
    let mut state = tracker.initial_state(&story);
    state = tracker
        .fold(&driver, &fast_retry(), story.universe(), &state, recap(1))
        .await
        .unwrap();

    let arc = story.arc(1).unwrap();
    let rendered = tracker.context_for(&story, arc, &state, 2).render();
    assert!(rendered.contains("ARC BRIEF"));
    assert!(rendered.contains("RECENT CHAPTERS"));
    assert!(rendered.contains("Chapter 1:"));
    assert!(rendered.contains("CHARACTER STATUS"));
    assert!(rendered.contains("OPEN THREADS"));
    assert!(rendered.contains("thread-1"));
}
