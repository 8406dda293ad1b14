mod common;

use common::{ScriptedDriver, test_universe};
use scheherazade_engine::{EngineConfig, RetryPolicy, StoryEngine};
use scheherazade_error::{EngineErrorKind, ScheherazadeErrorKind, ScheherazadeResult};
use scheherazade_interface::AdvanceReport;
use scheherazade_storage::InMemoryStoryStore;
use std::sync::Arc;
use std::time::Duration;

fn fast_config() -> EngineConfig {
    EngineConfig {
        retry: RetryPolicy::new(3, 1, 1),
        ..EngineConfig::default()
    }
}

fn is_story_busy(result: &ScheherazadeResult<AdvanceReport>) -> bool {
    matches!(
        result.as_ref().err().map(|e| e.kind()),
        Some(ScheherazadeErrorKind::Engine(e)) if matches!(e.kind, EngineErrorKind::StoryBusy(_))
    )
}

#[tokio::test]
async fn concurrent_advances_on_one_story_yield_one_success_one_busy() {
    let driver = ScriptedDriver::new().with_delay(Duration::from_millis(50));
    let store = InMemoryStoryStore::new();
    let engine = Arc::new(StoryEngine::with_config(driver, store, fast_config()));

    let story = engine
        .create_epic(test_universe(), "theme", "Harry Potter", "Title")
        .await
        .unwrap();
    let story_id = *story.id();

    let first = {
        let engine = Arc::clone(&engine);
        tokio::spawn(async move { engine.advance(story_id, 1, 3).await })
    };
    let second = {
        let engine = Arc::clone(&engine);
        tokio::spawn(async move { engine.advance(story_id, 1, 3).await })
    };

    let results = [first.await.unwrap(), second.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let busy = results.iter().filter(|r| is_story_busy(r)).count();
    assert_eq!(successes, 1, "exactly one advance must win the token");
    assert_eq!(busy, 1, "the loser must fail fast with StoryBusy");

    // The token was released: a follow-up advance continues from cursor 3.
    let report = engine.advance(story_id, 1, 2).await.unwrap();
    assert_eq!(*report.cursor(), 5);
}

#[tokio::test]
async fn advances_on_distinct_stories_run_independently() {
    let driver = ScriptedDriver::new().with_delay(Duration::from_millis(20));
    let store = InMemoryStoryStore::new();
    let engine = Arc::new(StoryEngine::with_config(driver, store, fast_config()));

    let first_story = engine
        .create_epic(test_universe(), "theme one", "Harry Potter", "First")
        .await
        .unwrap();
    let second_story = engine
        .create_epic(test_universe(), "theme two", "Hermione Granger", "Second")
        .await
        .unwrap();

    let first = {
        let engine = Arc::clone(&engine);
        let id = *first_story.id();
        tokio::spawn(async move { engine.advance(id, 1, 2).await })
    };
    let second = {
        let engine = Arc::clone(&engine);
        let id = *second_story.id();
        tokio::spawn(async move { engine.advance(id, 1, 2).await })
    };

    let first = first.await.unwrap().unwrap();
    let second = second.await.unwrap().unwrap();
    assert_eq!(*first.completed(), 2);
    assert_eq!(*second.completed(), 2);
}

#[tokio::test]
async fn progress_reflects_committed_chapters_only() {
    let driver = ScriptedDriver::new();
    let store = InMemoryStoryStore::new();
    let engine = StoryEngine::with_config(driver, store, fast_config());

    let story = engine
        .create_epic(test_universe(), "theme", "Harry Potter", "Title")
        .await
        .unwrap();

    let progress = engine.progress(*story.id()).await.unwrap();
    assert_eq!(*progress.completed(), 0);
    assert_eq!(*progress.current_arc(), Some(1));

    engine.advance(*story.id(), 1, 3).await.unwrap();

    let progress = engine.progress(*story.id()).await.unwrap();
    assert_eq!(*progress.completed(), 3);
    assert_eq!(*progress.total(), 1000);
    assert!((progress.fraction() - 0.003).abs() < f64::EPSILON);
    assert_eq!(*progress.current_arc(), Some(1));
    assert_eq!(progress.arcs().len(), 5);
    assert_eq!(*progress.arcs()[0].completed(), 3);
    assert_eq!(*progress.arcs()[1].completed(), 0);
}

#[tokio::test]
async fn listing_shows_every_planned_story() {
    let driver = ScriptedDriver::new();
    let store = InMemoryStoryStore::new();
    let engine = StoryEngine::with_config(driver, store, fast_config());

    let first = engine
        .create_epic(test_universe(), "theme one", "Harry Potter", "First")
        .await
        .unwrap();
    let second = engine
        .create_epic(test_universe(), "theme two", "Hermione Granger", "Second")
        .await
        .unwrap();

    let summaries = engine.list_stories().await.unwrap();
    assert_eq!(summaries.len(), 2);
    let ids: Vec<_> = summaries.iter().map(|s| *s.story_id()).collect();
    assert!(ids.contains(first.id()));
    assert!(ids.contains(second.id()));
    for summary in &summaries {
        assert_eq!(*summary.total_chapters(), 1000);
        assert_eq!(*summary.cursor(), 0);
    }
}

#[tokio::test]
async fn get_story_round_trips_through_the_store() {
    let driver = ScriptedDriver::new();
    let store = InMemoryStoryStore::new();
    let engine = StoryEngine::with_config(driver, store, fast_config());

    let planned = engine
        .create_epic(test_universe(), "theme", "Harry Potter", "Title")
        .await
        .unwrap();
    let loaded = engine.get_story(*planned.id()).await.unwrap();
    assert_eq!(loaded, planned);
}
