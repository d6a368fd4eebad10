//! Seeded Season 5 cast.
//!
//! Skill levels are static per season; only track records and status
//! change once the episodes start.

use crate::core::SkillCategory::*;
use crate::core::Skills;

use super::registry::CastRegistry;

/// Build the fourteen-queen Season 5 roster.
#[must_use]
pub fn season_five_cast() -> CastRegistry {
    let mut cast = CastRegistry::new();

    cast.register_auto(
        "Jinkx Monsoon",
        "The lovable underdog",
        Skills::new()
            .with(Acting, 10)
            .with(Comedy, 10)
            .with(Singing, 10)
            .with(Improv, 9)
            .with(Branding, 8)
            .with(Lipsync, 7)
            .with(Dancing, 5)
            .with(Design, 4)
            .with(Makeover, 6),
    );
    cast.register_auto(
        "Alaska",
        "Out of the shadow",
        Skills::new()
            .with(Acting, 9)
            .with(Comedy, 9)
            .with(Branding, 10)
            .with(Improv, 8)
            .with(Singing, 7)
            .with(Lipsync, 6)
            .with(Dancing, 4)
            .with(Design, 6)
            .with(Makeover, 7),
    );
    cast.register_auto(
        "Roxxxy Andrews",
        "Pageant perfection",
        Skills::new()
            .with(Design, 10)
            .with(Makeover, 10)
            .with(Dancing, 7)
            .with(Lipsync, 8)
            .with(Branding, 5)
            .with(Acting, 4)
            .with(Comedy, 3)
            .with(Improv, 3)
            .with(Singing, 2),
    );
    cast.register_auto(
        "Detox",
        "Too cool for school",
        Skills::new()
            .with(Design, 8)
            .with(Acting, 7)
            .with(Comedy, 7)
            .with(Lipsync, 9)
            .with(Branding, 7)
            .with(Dancing, 6)
            .with(Improv, 5)
            .with(Makeover, 6)
            .with(Singing, 4),
    );
    cast.register_auto(
        "Coco Montrese",
        "The lipsync assassin",
        Skills::new()
            .with(Lipsync, 10)
            .with(Dancing, 9)
            .with(Makeover, 7)
            .with(Acting, 5)
            .with(Comedy, 6)
            .with(Design, 5)
            .with(Branding, 4)
            .with(Improv, 3)
            .with(Singing, 3),
    );
    cast.register_auto(
        "Alyssa Edwards",
        "Unintentional comedy gold",
        Skills::new()
            .with(Dancing, 10)
            .with(Lipsync, 8)
            .with(Branding, 8)
            .with(Acting, 4)
            .with(Comedy, 4)
            .with(Improv, 3)
            .with(Design, 3)
            .with(Makeover, 4)
            .with(Singing, 2),
    );
    cast.register_auto(
        "Ivy Winters",
        "Miss congeniality",
        Skills::new()
            .with(Design, 9)
            .with(Singing, 7)
            .with(Dancing, 6)
            .with(Makeover, 8)
            .with(Acting, 5)
            .with(Comedy, 4)
            .with(Improv, 4)
            .with(Lipsync, 5)
            .with(Branding, 4),
    );
    cast.register_auto(
        "Jade Jolie",
        "Taylor Swift wannabe",
        Skills::new()
            .with(Acting, 6)
            .with(Lipsync, 7)
            .with(Comedy, 5)
            .with(Dancing, 5)
            .with(Design, 5)
            .with(Makeover, 4)
            .with(Improv, 4)
            .with(Branding, 3)
            .with(Singing, 3),
    );
    cast.register_auto(
        "Lineysha Sparx",
        "Language barrier beauty",
        Skills::new()
            .with(Design, 9)
            .with(Makeover, 8)
            .with(Dancing, 7)
            .with(Lipsync, 6)
            .with(Acting, 3)
            .with(Comedy, 2)
            .with(Improv, 2)
            .with(Branding, 3)
            .with(Singing, 2),
    );
    cast.register_auto(
        "Honey Mahogany",
        "Caftan queen",
        Skills::new()
            .with(Singing, 8)
            .with(Acting, 5)
            .with(Comedy, 4)
            .with(Branding, 5)
            .with(Design, 4)
            .with(Lipsync, 3)
            .with(Dancing, 3)
            .with(Improv, 3)
            .with(Makeover, 4),
    );
    cast.register_auto(
        "Vivienne Pinay",
        "Fishiest queen",
        Skills::new()
            .with(Makeover, 8)
            .with(Design, 6)
            .with(Branding, 6)
            .with(Acting, 3)
            .with(Comedy, 2)
            .with(Lipsync, 4)
            .with(Dancing, 3)
            .with(Improv, 2)
            .with(Singing, 2),
    );
    cast.register_auto(
        "Monica B. Hillz",
        "Truth teller",
        Skills::new()
            .with(Dancing, 7)
            .with(Lipsync, 7)
            .with(Design, 5)
            .with(Makeover, 4)
            .with(Acting, 3)
            .with(Comedy, 2)
            .with(Improv, 2)
            .with(Branding, 3)
            .with(Singing, 2),
    );
    cast.register_auto(
        "Serena ChaCha",
        "Art school dropout",
        Skills::new()
            .with(Design, 6)
            .with(Acting, 4)
            .with(Dancing, 5)
            .with(Lipsync, 5)
            .with(Comedy, 3)
            .with(Improv, 2)
            .with(Branding, 2)
            .with(Makeover, 3)
            .with(Singing, 2),
    );
    cast.register_auto(
        "Penny Tration",
        "Fan favorite vote",
        Skills::new()
            .with(Comedy, 6)
            .with(Acting, 5)
            .with(Lipsync, 5)
            .with(Branding, 5)
            .with(Design, 3)
            .with(Dancing, 3)
            .with(Improv, 3)
            .with(Makeover, 2)
            .with(Singing, 2),
    );

    cast
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SkillCategory;

    #[test]
    fn test_seed_cast_has_fourteen_active_queens() {
        let cast = season_five_cast();
        assert_eq!(cast.len(), 14);
        assert_eq!(cast.active_count(), 14);
    }

    #[test]
    fn test_seed_cast_skill_values() {
        let cast = season_five_cast();

        let jinkx = cast.iter().find(|c| c.name == "Jinkx Monsoon").unwrap();
        assert_eq!(jinkx.skills.get(SkillCategory::Comedy), 10);
        assert_eq!(jinkx.skills.get(SkillCategory::Design), 4);

        let roxxxy = cast.iter().find(|c| c.name == "Roxxxy Andrews").unwrap();
        assert_eq!(roxxxy.skills.get(SkillCategory::Design), 10);
    }

    #[test]
    fn test_seed_cast_ids_are_unique() {
        let cast = season_five_cast();
        let mut ids: Vec<_> = cast.iter().map(|c| c.id).collect();
        ids.sort_by_key(|id| id.raw());
        ids.dedup();
        assert_eq!(ids.len(), 14);
    }
}
