//! Backstage drama generation.
//!
//! Drama events are pure flavor: they reference one or two active
//! contestants, never gate phase progression, and are regenerated each
//! episode rather than persisted to anyone's track record.

pub mod templates;

pub use templates::DRAMA_TEMPLATES;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Contestant, ContestantId, SeasonRng};

/// One generated backstage moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DramaEvent {
    /// Rendered quote with contestant names substituted.
    pub quote: String,
    /// Contestants referenced: one entry for solo templates, two for
    /// pair templates.
    pub involved: SmallVec<[ContestantId; 2]>,
}

/// Generate this episode's drama events.
///
/// Produces `clamp(floor(active / 1.5), 4, 6)` events; fewer than two
/// active contestants yields none, since pair templates need a distinct
/// second party. Selection of contestants and templates is uniform over
/// the injected RNG.
#[must_use]
pub fn generate_drama(active: &[&Contestant], rng: &mut SeasonRng) -> Vec<DramaEvent> {
    if active.len() < 2 {
        return Vec::new();
    }

    let event_count = ((active.len() as f64 / 1.5) as usize).clamp(4, 6);
    let mut events = Vec::with_capacity(event_count);

    for _ in 0..event_count {
        let first = active[rng.gen_index(active.len())];
        // Resample until distinct; terminates because active.len() >= 2.
        let second = loop {
            let candidate = active[rng.gen_index(active.len())];
            if candidate.id != first.id {
                break candidate;
            }
        };

        let template = DRAMA_TEMPLATES[rng.gen_index(DRAMA_TEMPLATES.len())];
        let is_pair = template.contains("{Q2}");
        let quote = template
            .replace("{Q1}", &first.name)
            .replace("{Q2}", &second.name);

        let mut involved = SmallVec::new();
        involved.push(first.id);
        if is_pair {
            involved.push(second.id);
        }

        events.push(DramaEvent { quote, involved });
    }

    events
}
