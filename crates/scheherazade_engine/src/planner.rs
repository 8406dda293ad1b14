//! Epic planning: premise in, five-arc thousand-chapter skeleton out.

use crate::{GenerationSettings, RetryPolicy, prompts};
use scheherazade_core::{
    ArcPlan, ArcPosition, ContinuityState, GenerationRequest, Story, StoryId, Universe,
};
use scheherazade_error::{PremiseError, PremiseErrorKind, ScheherazadeResult};
use scheherazade_interface::{ScheherazadeDriver, StoryStore};
use strum::IntoEnumIterator;
use tracing::info;

/// Plans epic stories: partitions the thousand chapters into five fixed
/// arcs and generates one frozen thematic brief per arc.
///
/// Brief generation is strictly sequential; each arc's brief is conditioned
/// on the previous arc's, so the five briefs read as one escalation. This
/// is the only place briefs are produced — they are never regenerated.
pub struct EpicPlanner<'a, D, S> {
    driver: &'a D,
    store: &'a S,
    retry: RetryPolicy,
    settings: GenerationSettings,
}

impl<'a, D: ScheherazadeDriver, S: StoryStore> EpicPlanner<'a, D, S> {
    /// Create a planner over a driver and store.
    pub fn new(driver: &'a D, store: &'a S, retry: RetryPolicy, settings: GenerationSettings) -> Self {
        Self {
            driver,
            store,
            retry,
            settings,
        }
    }

    /// Plan and persist a new epic story.
    ///
    /// # Errors
    ///
    /// Returns `PremiseError` for an unusable premise, a backend error when
    /// brief generation exhausts its retries, or a store error when
    /// persistence fails.
    #[tracing::instrument(skip_all, fields(universe = %universe.name(), title))]
    pub async fn plan(
        &self,
        universe: Universe,
        theme: &str,
        protagonist: &str,
        title: &str,
    ) -> ScheherazadeResult<Story> {
        validate_premise(&universe, theme, protagonist, title)?;

        let mut arcs: Vec<ArcPlan> = Vec::with_capacity(ArcPosition::iter().count());
        let mut previous_brief: Option<String> = None;

        for position in ArcPosition::iter() {
            let request = GenerationRequest {
                prompt: prompts::arc_brief_prompt(
                    &universe,
                    theme,
                    protagonist,
                    position,
                    previous_brief.as_deref(),
                ),
                max_tokens: Some(self.settings.brief_max_tokens),
                temperature: Some(self.settings.brief_temperature),
            };
            let brief = self.retry.call(self.driver, &request).await?;
            let brief = brief.replace("```", "").trim().to_string();

            info!(arc = position.index(), "Arc brief generated");
            previous_brief = Some(brief.clone());
            arcs.push(ArcPlan::new(position, theme, brief));
        }

        let summary = format!(
            "An epic {} saga spanning 1000 chapters across 5 arcs, following {} through {}",
            universe.genre(),
            protagonist,
            theme
        );
        let story = Story::new(
            StoryId::random(),
            title,
            universe,
            theme,
            protagonist,
            summary,
            arcs,
        );
        let state = ContinuityState::initial(*story.id(), story.protagonist());

        self.store.create_story(&story, &state).await?;
        info!(story = %story.id(), "Epic story planned and persisted");
        Ok(story)
    }
}

/// Reject premises that cannot seed a story.
fn validate_premise(
    universe: &Universe,
    theme: &str,
    protagonist: &str,
    title: &str,
) -> ScheherazadeResult<()> {
    if universe.main_characters().is_empty() {
        return Err(
            PremiseError::new(PremiseErrorKind::NoCharacters(universe.name().clone())).into(),
        );
    }
    if theme.trim().is_empty() {
        return Err(PremiseError::new(PremiseErrorKind::EmptyTheme).into());
    }
    if protagonist.trim().is_empty() {
        return Err(PremiseError::new(PremiseErrorKind::EmptyProtagonist).into());
    }
    if title.trim().is_empty() {
        return Err(PremiseError::new(PremiseErrorKind::EmptyTitle).into());
    }
    Ok(())
}
