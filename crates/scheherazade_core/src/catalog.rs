//! Built-in catalog of well-known universes.
//!
//! These mirror the settings users most often generate against; anything not
//! listed here can be built with [`Universe::builder`](crate::Universe).

use crate::Universe;

/// All predefined universes.
pub fn catalog() -> Vec<Universe> {
    vec![
        harry_potter(),
        lord_of_the_rings(),
        game_of_thrones(),
        naruto(),
        marvel(),
    ]
}

/// Look up a predefined universe by name (case-insensitive).
pub fn catalog_universe(name: &str) -> Option<Universe> {
    catalog()
        .into_iter()
        .find(|u| u.name().eq_ignore_ascii_case(name))
}

fn harry_potter() -> Universe {
    Universe::builder()
        .name("Harry Potter")
        .genre("Fantasy")
        .main_characters(vec![
            "Harry Potter".into(),
            "Hermione Granger".into(),
            "Ron Weasley".into(),
            "Albus Dumbledore".into(),
            "Severus Snape".into(),
            "Draco Malfoy".into(),
        ])
        .locations(vec![
            "Hogwarts".into(),
            "Diagon Alley".into(),
            "Ministry of Magic".into(),
            "Grimmauld Place".into(),
            "The Burrow".into(),
        ])
        .themes(vec![
            "Magic".into(),
            "Friendship".into(),
            "Good vs Evil".into(),
            "Coming of Age".into(),
            "Sacrifice".into(),
        ])
        .magic_system("Wand-based magic with spells and potions")
        .time_period("Modern era (1990s-2000s)")
        .build()
        .expect("catalog universe is complete")
}

fn lord_of_the_rings() -> Universe {
    Universe::builder()
        .name("Lord of the Rings")
        .genre("High Fantasy")
        .main_characters(vec![
            "Frodo Baggins".into(),
            "Gandalf".into(),
            "Aragorn".into(),
            "Legolas".into(),
            "Gimli".into(),
            "Samwise Gamgee".into(),
        ])
        .locations(vec![
            "The Shire".into(),
            "Rivendell".into(),
            "Moria".into(),
            "Rohan".into(),
            "Gondor".into(),
            "Mordor".into(),
        ])
        .themes(vec![
            "Good vs Evil".into(),
            "Friendship".into(),
            "Sacrifice".into(),
            "Power Corruption".into(),
        ])
        .magic_system("Subtle magic through rings, wizards, and ancient powers")
        .time_period("Third Age of Middle-earth")
        .build()
        .expect("catalog universe is complete")
}

fn game_of_thrones() -> Universe {
    Universe::builder()
        .name("Game of Thrones")
        .genre("Dark Fantasy")
        .main_characters(vec![
            "Jon Snow".into(),
            "Daenerys Targaryen".into(),
            "Tyrion Lannister".into(),
            "Arya Stark".into(),
            "Sansa Stark".into(),
        ])
        .locations(vec![
            "Winterfell".into(),
            "King's Landing".into(),
            "The Wall".into(),
            "Dragonstone".into(),
            "Braavos".into(),
        ])
        .themes(vec![
            "Power Struggle".into(),
            "Political Intrigue".into(),
            "Family Honor".into(),
            "Survival".into(),
        ])
        .magic_system("Dragons, faceless men, warging, and ancient magic")
        .time_period("Medieval fantasy setting")
        .build()
        .expect("catalog universe is complete")
}

fn naruto() -> Universe {
    Universe::builder()
        .name("Naruto")
        .genre("Ninja Fantasy")
        .main_characters(vec![
            "Naruto Uzumaki".into(),
            "Sasuke Uchiha".into(),
            "Sakura Haruno".into(),
            "Kakashi Hatake".into(),
        ])
        .locations(vec![
            "Hidden Leaf Village".into(),
            "Hidden Sand Village".into(),
            "Valley of the End".into(),
        ])
        .themes(vec![
            "Friendship".into(),
            "Perseverance".into(),
            "Redemption".into(),
            "Legacy".into(),
        ])
        .magic_system("Chakra-based jutsu and ninja techniques")
        .time_period("Ninja world with modern elements")
        .build()
        .expect("catalog universe is complete")
}

fn marvel() -> Universe {
    Universe::builder()
        .name("Marvel Universe")
        .genre("Superhero")
        .main_characters(vec![
            "Spider-Man".into(),
            "Iron Man".into(),
            "Captain America".into(),
            "Thor".into(),
            "Black Widow".into(),
        ])
        .locations(vec![
            "New York City".into(),
            "Asgard".into(),
            "Wakanda".into(),
            "Stark Tower".into(),
        ])
        .themes(vec![
            "Responsibility".into(),
            "Heroism".into(),
            "Sacrifice".into(),
            "Identity".into(),
        ])
        .magic_system("Superpowers, technology, magic, and cosmic forces")
        .time_period("Modern era")
        .build()
        .expect("catalog universe is complete")
}
