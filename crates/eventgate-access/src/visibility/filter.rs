//! Event filtering.
//!
//! Output is an order-preserving subsequence of the input. Empty criteria
//! return every event, and filtering twice with the same criteria is a no-op.

use eventgate_core::{tier_includes, Event};

use super::criteria::FilterCriteria;

pub fn filter_events<'a>(events: &'a [Event], criteria: &FilterCriteria) -> Vec<&'a Event> {
    let term = criteria.normalized_term();
    let category = criteria.normalized_category();
    events
        .iter()
        .filter(|event| {
            matches_prepared(event, term.as_deref(), category.as_deref(), criteria)
        })
        .collect()
}

/// Same as [`filter_events`], cloning the matches.
pub fn filter_events_owned(events: &[Event], criteria: &FilterCriteria) -> Vec<Event> {
    filter_events(events, criteria).into_iter().cloned().collect()
}

/// Whether a single event passes every criterion.
pub fn event_matches(event: &Event, criteria: &FilterCriteria) -> bool {
    let term = criteria.normalized_term();
    let category = criteria.normalized_category();
    matches_prepared(event, term.as_deref(), category.as_deref(), criteria)
}

fn matches_prepared(
    event: &Event,
    term: Option<&str>,
    category: Option<&str>,
    criteria: &FilterCriteria,
) -> bool {
    if let Some(term) = term {
        let hit = event
            .searchable_fields()
            .any(|field| field.to_lowercase().contains(term));
        if !hit {
            return false;
        }
    }

    if let Some(category) = category {
        if event.category.trim().to_lowercase() != category {
            return false;
        }
    }

    match criteria.tier_ceiling {
        Some(ceiling) => tier_includes(ceiling, event.tier),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventgate_core::Tier;

    fn sample() -> Vec<Event> {
        vec![
            Event::new("Yoga Retreat", "health"),
            Event::new("Code Jam", "tech"),
        ]
    }

    #[test]
    fn search_scenario() {
        let events = sample();
        let out = filter_events(&events, &FilterCriteria::new().search("yoga"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Yoga Retreat");
    }

    #[test]
    fn category_is_trimmed_and_case_insensitive() {
        let events = vec![
            Event::new("A", " Tech "),
            Event::new("B", "technology"),
        ];
        let out = filter_events(&events, &FilterCriteria::new().category("TECH"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "A");
    }

    #[test]
    fn ceiling_uses_hierarchy() {
        let events = vec![
            Event::new("free", "x").with_tier(Tier::Free),
            Event::new("gold", "x").with_tier(Tier::Gold),
            Event::new("silver", "x").with_tier(Tier::Silver),
        ];
        let out = filter_events(&events, &FilterCriteria::new().tier_ceiling(Tier::Silver));
        let titles: Vec<&str> = out.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["free", "silver"]);
    }
}
