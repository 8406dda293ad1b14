mod common;

use common::{ScriptedDriver, test_universe};
use scheherazade_core::{TOTAL_CHAPTERS, Universe};
use scheherazade_engine::{EpicPlanner, GenerationSettings, RetryPolicy};
use scheherazade_error::{
    BackendErrorKind, PremiseErrorKind, ScheherazadeErrorKind,
};
use scheherazade_interface::StoryStore;
use scheherazade_storage::InMemoryStoryStore;

fn fast_retry() -> RetryPolicy {
    RetryPolicy::new(3, 1, 1)
}

#[tokio::test]
async fn plan_partitions_one_thousand_chapters_into_five_arcs() {
    let driver = ScriptedDriver::new();
    let store = InMemoryStoryStore::new();
    let planner = EpicPlanner::new(&driver, &store, fast_retry(), GenerationSettings::default());

    let story = planner
        .plan(
            test_universe(),
            "ancient magic awakening",
            "Harry Potter",
            "The Ninth Gate",
        )
        .await
        .unwrap();

    let expected = [(1, 200), (201, 400), (401, 600), (601, 800), (801, 1000)];
    assert_eq!(story.arcs().len(), 5);
    for (arc, (start, end)) in story.arcs().iter().zip(expected) {
        assert_eq!(*arc.start_chapter(), start);
        assert_eq!(*arc.end_chapter(), end);
        assert!(!arc.brief().is_empty());
    }

    // No gaps, no overlaps, full coverage.
    let mut next = 1;
    for arc in story.arcs() {
        assert_eq!(*arc.start_chapter(), next);
        next = arc.end_chapter() + 1;
    }
    assert_eq!(next, TOTAL_CHAPTERS + 1);

    assert_eq!(*story.cursor(), 0);
    assert!(story.summary().contains("Harry Potter"));
}

#[tokio::test]
async fn plan_persists_story_and_initial_state() {
    let driver = ScriptedDriver::new();
    let store = InMemoryStoryStore::new();
    let planner = EpicPlanner::new(&driver, &store, fast_retry(), GenerationSettings::default());

    let story = planner
        .plan(test_universe(), "theme", "Harry Potter", "Title")
        .await
        .unwrap();

    let loaded = store.story(*story.id()).await.unwrap();
    assert_eq!(loaded, story);

    let state = store.continuity(*story.id()).await.unwrap();
    assert_eq!(state.window_len(), 0);
    assert!(state.characters().contains_key("Harry Potter"));
}

#[tokio::test]
async fn briefs_are_generated_sequentially_with_prior_context() {
    let driver = ScriptedDriver::new();
    let store = InMemoryStoryStore::new();
    let planner = EpicPlanner::new(&driver, &store, fast_retry(), GenerationSettings::default());

    planner
        .plan(test_universe(), "theme", "Harry Potter", "Title")
        .await
        .unwrap();

    let prompts = driver.prompts();
    assert_eq!(prompts.len(), 5);
    // The opening arc sees no predecessor; every later arc sees the one before.
    assert!(prompts[0].contains("opening arc"));
    for (i, prompt) in prompts.iter().enumerate().skip(1) {
        assert!(
            prompt.contains(&format!("Brief for arc {i}")),
            "arc {} prompt should quote arc {} brief",
            i + 1,
            i
        );
    }
}

#[tokio::test]
async fn premise_validation_rejects_bad_input() {
    let driver = ScriptedDriver::new();
    let store = InMemoryStoryStore::new();
    let planner = EpicPlanner::new(&driver, &store, fast_retry(), GenerationSettings::default());

    let empty_universe = Universe::builder()
        .name("Empty")
        .genre("None")
        .build()
        .unwrap();
    let err = planner
        .plan(empty_universe, "theme", "Someone", "Title")
        .await
        .unwrap_err();
    match err.kind() {
        ScheherazadeErrorKind::Premise(e) => {
            assert!(matches!(e.kind, PremiseErrorKind::NoCharacters(_)))
        }
        other => panic!("unexpected error: {other}"),
    }

    let cases = [
        ("  ", "Harry Potter", "Title", PremiseErrorKind::EmptyTheme),
        ("theme", "", "Title", PremiseErrorKind::EmptyProtagonist),
        ("theme", "Harry Potter", " ", PremiseErrorKind::EmptyTitle),
    ];
    for (theme, protagonist, title, expected) in cases {
        let err = planner
            .plan(test_universe(), theme, protagonist, title)
            .await
            .unwrap_err();
        match err.kind() {
            ScheherazadeErrorKind::Premise(e) => assert_eq!(e.kind, expected),
            other => panic!("unexpected error: {other}"),
        }
    }

    // Nothing reached the backend or the store.
    assert_eq!(driver.calls(), 0);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn transient_failures_are_retried_within_policy() {
    let driver = ScriptedDriver::failing_first(2);
    let store = InMemoryStoryStore::new();
    let planner = EpicPlanner::new(&driver, &store, fast_retry(), GenerationSettings::default());

    let story = planner
        .plan(test_universe(), "theme", "Harry Potter", "Title")
        .await
        .unwrap();
    assert_eq!(story.arcs().len(), 5);
    // Two failed attempts plus five successful brief calls.
    assert_eq!(driver.calls(), 7);
}

#[tokio::test]
async fn exhausted_retries_surface_as_backend_error() {
    let driver = ScriptedDriver::failing_first(100);
    let store = InMemoryStoryStore::new();
    let planner = EpicPlanner::new(&driver, &store, fast_retry(), GenerationSettings::default());

    let err = planner
        .plan(test_universe(), "theme", "Harry Potter", "Title")
        .await
        .unwrap_err();
    match err.kind() {
        ScheherazadeErrorKind::Backend(e) => {
            assert!(matches!(e.kind, BackendErrorKind::Exhausted { attempts: 3, .. }))
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(driver.calls(), 3);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn permanent_failures_are_not_retried() {
    let driver = ScriptedDriver::always_permanent();
    let store = InMemoryStoryStore::new();
    let planner = EpicPlanner::new(&driver, &store, fast_retry(), GenerationSettings::default());

    let err = planner
        .plan(test_universe(), "theme", "Harry Potter", "Title")
        .await
        .unwrap_err();
    match err.kind() {
        ScheherazadeErrorKind::Backend(e) => {
            assert!(matches!(e.kind, BackendErrorKind::Permanent(_)))
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(driver.calls(), 1);
}
