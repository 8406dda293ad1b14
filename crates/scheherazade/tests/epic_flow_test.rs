//! End-to-end flow through the facade surface.

use async_trait::async_trait;
use scheherazade::{
    GenerationRequest, InMemoryStoryStore, ScheherazadeDriver, ScheherazadeResult, StoryEngine,
    catalog_universe,
};

/// Minimal driver: answers every prompt shape the engine produces.
struct EchoDriver;

#[async_trait]
impl ScheherazadeDriver for EchoDriver {
    async fn generate(&self, req: &GenerationRequest) -> ScheherazadeResult<String> {
        if req.prompt.starts_with("Write chapter ") {
            let number = req
                .prompt
                .strip_prefix("Write chapter ")
                .and_then(|rest| rest.split_whitespace().next())
                .unwrap_or("0");
            return Ok(format!(
                "Chapter {number}: Onward\n\nHarry Potter pressed on.\n\n\
                 === RECAP ===\nHarry Potter pressed on in chapter {number}.\n"
            ));
        }
        Ok("A short planning response.".to_string())
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-1"
    }
}

#[tokio::test]
async fn create_then_advance_through_the_facade() {
    scheherazade::observability::init_observability().ok();

    let universe = catalog_universe("Harry Potter").expect("catalog universe exists");
    let engine = StoryEngine::new(EchoDriver, InMemoryStoryStore::new());

    let story = engine
        .create_epic(universe, "ancient magic awakening", "Harry Potter", "The Ninth Gate")
        .await
        .unwrap();
    assert_eq!(story.arcs().len(), 5);

    let report = engine.advance(*story.id(), 1, 2).await.unwrap();
    assert_eq!(*report.completed(), 2);

    let chapter = engine.get_chapter(*story.id(), 1).await.unwrap();
    assert!(chapter.text().contains("Harry Potter"));

    let stories = engine.list_stories().await.unwrap();
    assert_eq!(stories.len(), 1);
}
