//! Cast registry for contestant lookup.
//!
//! The `CastRegistry` stores the season's roster. It provides fast
//! lookup by `ContestantId`, preserves promo order for iteration, and
//! exposes the active subset the scoring and drama components work on.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Contestant, ContestantId, Skills};

/// Roster of contestants with ID lookup.
///
/// Iteration order is registration (promo) order.
///
/// ## Example
///
/// ```
/// use runway_sim::cast::CastRegistry;
/// use runway_sim::core::Skills;
///
/// let mut cast = CastRegistry::new();
/// let id = cast.register_auto("Test Queen", "the underdog", Skills::new());
///
/// assert_eq!(cast.get(id).unwrap().name, "Test Queen");
/// assert_eq!(cast.active_count(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CastRegistry {
    roster: Vec<Contestant>,
    index: FxHashMap<ContestantId, usize>,
    next_id: u32,
}

impl CastRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a contestant.
    ///
    /// Panics if a contestant with the same ID already exists.
    pub fn register(&mut self, contestant: Contestant) {
        if self.index.contains_key(&contestant.id) {
            panic!("Contestant with ID {:?} already registered", contestant.id);
        }
        self.next_id = self.next_id.max(contestant.id.raw() + 1);
        self.index.insert(contestant.id, self.roster.len());
        self.roster.push(contestant);
    }

    /// Register a contestant with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(
        &mut self,
        name: impl Into<String>,
        storyline: impl Into<String>,
        skills: Skills,
    ) -> ContestantId {
        let id = ContestantId::new(self.next_id);
        self.register(Contestant::new(id, name, storyline, skills));
        id
    }

    /// Get a contestant by ID.
    #[must_use]
    pub fn get(&self, id: ContestantId) -> Option<&Contestant> {
        self.index.get(&id).map(|&i| &self.roster[i])
    }

    /// Get a mutable contestant by ID.
    pub fn get_mut(&mut self, id: ContestantId) -> Option<&mut Contestant> {
        self.index.get(&id).map(|&i| &mut self.roster[i])
    }

    /// Check whether an ID is registered.
    #[must_use]
    pub fn contains(&self, id: ContestantId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of registered contestants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Iterate over all contestants in promo order.
    pub fn iter(&self) -> impl Iterator<Item = &Contestant> {
        self.roster.iter()
    }

    /// Iterate mutably over all contestants in promo order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Contestant> {
        self.roster.iter_mut()
    }

    /// Iterate over the still-competing contestants in promo order.
    pub fn active(&self) -> impl Iterator<Item = &Contestant> {
        self.roster.iter().filter(|c| c.is_active())
    }

    /// Number of still-competing contestants.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// IDs of the still-competing contestants in promo order.
    #[must_use]
    pub fn active_ids(&self) -> Vec<ContestantId> {
        self.active().map(|c| c.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SkillCategory;

    #[test]
    fn test_register_auto_assigns_sequential_ids() {
        let mut cast = CastRegistry::new();
        let a = cast.register_auto("A", "", Skills::new());
        let b = cast.register_auto("B", "", Skills::new());

        assert_eq!(a, ContestantId::new(0));
        assert_eq!(b, ContestantId::new(1));
        assert_eq!(cast.len(), 2);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut cast = CastRegistry::new();
        let skills = Skills::new();
        cast.register(Contestant::new(ContestantId::new(7), "A", "", skills));
        cast.register(Contestant::new(ContestantId::new(7), "B", "", skills));
    }

    #[test]
    fn test_lookup_and_mutation() {
        let mut cast = CastRegistry::new();
        let id = cast.register_auto(
            "Queen",
            "",
            Skills::new().with(SkillCategory::Design, 9),
        );

        assert!(cast.contains(id));
        assert!(!cast.contains(ContestantId::new(99)));

        cast.get_mut(id).unwrap().eliminate(1);
        assert!(!cast.get(id).unwrap().is_active());
    }

    #[test]
    fn test_active_filtering() {
        let mut cast = CastRegistry::new();
        let a = cast.register_auto("A", "", Skills::new());
        let _b = cast.register_auto("B", "", Skills::new());
        let c = cast.register_auto("C", "", Skills::new());

        cast.get_mut(a).unwrap().eliminate(1);

        assert_eq!(cast.active_count(), 2);
        assert_eq!(cast.active_ids(), vec![ContestantId::new(1), c]);
    }

    #[test]
    fn test_iteration_preserves_promo_order() {
        let mut cast = CastRegistry::new();
        cast.register_auto("First", "", Skills::new());
        cast.register_auto("Second", "", Skills::new());
        cast.register_auto("Third", "", Skills::new());

        let names: Vec<_> = cast.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}
