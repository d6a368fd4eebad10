//! Episode definitions and the season catalog.
//!
//! Episodes are immutable once defined: a 1-based ordinal, a title, a
//! description, and the non-empty set of skill categories that weight
//! that episode's scoring.

pub mod catalog;

pub use catalog::season_five_catalog;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::SkillCategory;

/// One episode of the season.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// 1-based ordinal matching catalog position.
    pub number: u32,
    /// Episode title.
    pub title: String,
    /// Challenge description.
    pub description: String,
    /// Skill categories weighting this episode's scoring. Never empty.
    pub challenge: SmallVec<[SkillCategory; 2]>,
}

impl Episode {
    /// Create a new episode.
    ///
    /// Panics if `challenge` is empty; every episode scores at least
    /// one category.
    #[must_use]
    pub fn new(
        number: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        challenge: &[SkillCategory],
    ) -> Self {
        assert!(!challenge.is_empty(), "episode {number} has no challenge categories");
        Self {
            number,
            title: title.into(),
            description: description.into(),
            challenge: SmallVec::from_slice(challenge),
        }
    }
}

/// Ordered, immutable list of the season's episodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeCatalog {
    episodes: Vec<Episode>,
}

impl EpisodeCatalog {
    /// Create a catalog from an ordered episode list.
    ///
    /// Panics unless episode ordinals are 1-based and strictly match
    /// their catalog positions.
    #[must_use]
    pub fn new(episodes: Vec<Episode>) -> Self {
        for (idx, episode) in episodes.iter().enumerate() {
            assert_eq!(
                episode.number as usize,
                idx + 1,
                "episode ordinal {} does not match catalog position {}",
                episode.number,
                idx + 1
            );
        }
        Self { episodes }
    }

    /// Get an episode by zero-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Episode> {
        self.episodes.get(index)
    }

    /// Number of episodes in the season.
    #[must_use]
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Whether any episode follows the given zero-based index.
    #[must_use]
    pub fn has_next(&self, index: usize) -> bool {
        index + 1 < self.episodes.len()
    }

    /// Iterate over the episodes in order.
    pub fn iter(&self) -> impl Iterator<Item = &Episode> {
        self.episodes.iter()
    }
}
