//! The seeded eleven-episode season.

use crate::core::SkillCategory::*;

use super::{Episode, EpisodeCatalog};

/// Build the Season 5 challenge sequence.
#[must_use]
pub fn season_five_catalog() -> EpisodeCatalog {
    EpisodeCatalog::new(vec![
        Episode::new(
            1,
            "RuPaullywood or Bust",
            "Create a Hollywood glamour look from garbage.",
            &[Design],
        ),
        Episode::new(
            2,
            "Lip Sync Extravaganza",
            "Reenact iconic moments from past seasons.",
            &[Lipsync, Acting],
        ),
        Episode::new(3, "Draggle Rock", "Star in a kids TV show.", &[Acting, Improv]),
        Episode::new(
            4,
            "Black Swan",
            "Perform a ballet inspired by RuPaul's life.",
            &[Dancing],
        ),
        Episode::new(
            5,
            "Snatch Game",
            "Celebrity impersonation game show.",
            &[Comedy, Improv],
        ),
        Episode::new(
            6,
            "Can I Get an Amen?",
            "Record a 'We Are the World' style anthem.",
            &[Singing],
        ),
        Episode::new(7, "RuPaul Roast", "Roast RuPaul and the judges.", &[Comedy]),
        Episode::new(
            8,
            "Scent of a Drag Queen",
            "Create and market a signature perfume.",
            &[Branding],
        ),
        Episode::new(
            9,
            "Telenovela Drama",
            "Overact in a dramatic Spanish soap opera.",
            &[Acting],
        ),
        Episode::new(
            10,
            "Super Troopers",
            "Turn veterans into drag sisters.",
            &[Makeover],
        ),
        Episode::new(
            11,
            "Sugar Ball",
            "Create three looks for the Sugar Ball.",
            &[Design],
        ),
    ])
}
