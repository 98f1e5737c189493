//! Search-box suggestions.
//!
//! Candidates are deduplicated by `(kind, value)` in first-seen order, then
//! ranked with a stable sort: prefix matches first, then higher counts.
//! Equal keys keep first-seen order, so output is deterministic for a given
//! input order.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use serde::Serialize;

use eventgate_core::config::SearchConfig;
use eventgate_core::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Title,
    Category,
    Group,
    Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub value: String,
    pub count: usize,
}

pub fn build_suggestions(events: &[Event], term: &str, config: &SearchConfig) -> Vec<Suggestion> {
    let term = term.trim().to_lowercase();
    if term.chars().count() < config.min_term_chars {
        return Vec::new();
    }

    let mut ordered: Vec<Suggestion> = Vec::new();
    let mut index: FxHashMap<(SuggestionKind, String), usize> = FxHashMap::default();

    for event in events {
        for (kind, value) in candidates(event) {
            let value = value.trim();
            if value.is_empty() || !value.to_lowercase().contains(&term) {
                continue;
            }
            match index.entry((kind, value.to_string())) {
                Entry::Occupied(slot) => ordered[*slot.get()].count += 1,
                Entry::Vacant(slot) => {
                    slot.insert(ordered.len());
                    ordered.push(Suggestion {
                        kind,
                        value: value.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // sort_by is stable; ties keep first-seen order.
    ordered.sort_by(|a, b| {
        let a_prefix = a.value.to_lowercase().starts_with(&term);
        let b_prefix = b.value.to_lowercase().starts_with(&term);
        b_prefix.cmp(&a_prefix).then(b.count.cmp(&a.count))
    });
    ordered.truncate(config.max_suggestions);
    ordered
}

fn candidates(event: &Event) -> impl Iterator<Item = (SuggestionKind, &str)> {
    [
        Some((SuggestionKind::Title, event.title.as_str())),
        Some((SuggestionKind::Category, event.category.as_str())),
        event.group_name.as_deref().map(|g| (SuggestionKind::Group, g)),
        event.city.as_deref().map(|c| (SuggestionKind::Location, c)),
        event.venue.as_deref().map(|v| (SuggestionKind::Location, v)),
        event.address.as_deref().map(|a| (SuggestionKind::Location, a)),
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_term_yields_nothing() {
        let events = vec![Event::new("Yoga", "health")];
        assert!(build_suggestions(&events, "y", &SearchConfig::default()).is_empty());
        assert!(build_suggestions(&events, "  y  ", &SearchConfig::default()).is_empty());
    }

    #[test]
    fn counts_duplicates() {
        let events = vec![
            Event::new("Morning Yoga", "health"),
            Event::new("Evening Run", "health"),
        ];
        let out = build_suggestions(&events, "heal", &SearchConfig::default());
        assert_eq!(
            out,
            vec![Suggestion {
                kind: SuggestionKind::Category,
                value: "health".to_string(),
                count: 2,
            }]
        );
    }

    #[test]
    fn same_value_different_kind_kept_apart() {
        let events = vec![Event::new("Music", "music")];
        let out = build_suggestions(&events, "mus", &SearchConfig::default());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].kind, SuggestionKind::Title);
        assert_eq!(out[1].kind, SuggestionKind::Category);
    }

    #[test]
    fn serializes_kind_as_type() {
        let s = Suggestion {
            kind: SuggestionKind::Location,
            value: "Lisbon".to_string(),
            count: 3,
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["type"], "location");
        assert_eq!(json["count"], 3);
    }
}
