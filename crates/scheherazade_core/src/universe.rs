//! Fictional universe descriptions.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Static description of a fictional setting.
///
/// A universe is pure data. Once attached to a story it is copied in, never
/// referenced live, so later catalog edits cannot drift a story's canon.
///
/// # Examples
///
/// ```
/// use scheherazade_core::Universe;
///
/// let universe = Universe::builder()
///     .name("Harry Potter")
///     .genre("Fantasy")
///     .main_characters(vec!["Harry Potter".into(), "Hermione Granger".into()])
///     .themes(vec!["Magic".into(), "Friendship".into()])
///     .build()
///     .unwrap();
///
/// assert_eq!(universe.name(), "Harry Potter");
/// assert_eq!(universe.main_characters().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct Universe {
    /// Universe name, e.g. "Harry Potter"
    name: String,
    /// Genre, e.g. "Fantasy"
    genre: String,
    /// Main character names
    #[builder(default)]
    main_characters: Vec<String>,
    /// Notable locations
    #[builder(default)]
    locations: Vec<String>,
    /// Recurring themes
    #[builder(default)]
    themes: Vec<String>,
    /// Description of the magic or technology system, if any
    #[builder(default, setter(strip_option))]
    magic_system: Option<String>,
    /// Time period the universe is set in, if fixed
    #[builder(default, setter(strip_option))]
    time_period: Option<String>,
}

impl Universe {
    /// Create a universe builder.
    pub fn builder() -> UniverseBuilder {
        UniverseBuilder::default()
    }
}
