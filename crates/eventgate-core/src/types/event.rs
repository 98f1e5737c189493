//! Event record as read by the visibility filter.
//! Owned by the persistence layer; this crate never mutates one.

use serde::{Deserialize, Serialize};

use crate::tier::levels::{deserialize_lenient, EventTier};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-text tag string, e.g. `"outdoors, wellness"`.
    pub tags: String,
    pub category: String,
    pub group_name: Option<String>,
    pub venue: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub is_online: bool,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub tier: EventTier,
}

impl Event {
    /// Minimal event with a title and category, everything else empty.
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_tier(mut self, tier: EventTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group_name = Some(group.into());
        self
    }

    pub fn with_location(
        mut self,
        venue: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        self.venue = Some(venue.into());
        self.address = Some(address.into());
        self.city = Some(city.into());
        self
    }

    pub fn online(mut self) -> Self {
        self.is_online = true;
        self
    }

    /// Text fields the free-text search looks at.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.title.as_str()),
            Some(self.description.as_str()),
            Some(self.tags.as_str()),
            Some(self.category.as_str()),
            self.group_name.as_deref(),
            self.venue.as_deref(),
            self.address.as_deref(),
            self.city.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::Tier;

    #[test]
    fn deserializes_persisted_record() {
        let json = r#"{
            "id": "evt-1",
            "title": "Yoga Retreat",
            "category": "health",
            "groupName": "Morning Movers",
            "city": "Lisbon",
            "tier": "gold"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "Yoga Retreat");
        assert_eq!(event.group_name.as_deref(), Some("Morning Movers"));
        assert_eq!(event.tier, Tier::Gold);
        assert!(!event.is_online);
    }

    #[test]
    fn unknown_or_missing_tier_is_free() {
        let unknown: Event = serde_json::from_str(r#"{"title":"x","tier":"vip"}"#).unwrap();
        assert_eq!(unknown.tier, Tier::Free);
        let missing: Event = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert_eq!(missing.tier, Tier::Free);
        let null: Event = serde_json::from_str(r#"{"title":"x","tier":null}"#).unwrap();
        assert_eq!(null.tier, Tier::Free);
    }

    #[test]
    fn searchable_fields_skip_absent_location() {
        let event = Event::new("Code Jam", "tech").with_tags("rust");
        let fields: Vec<&str> = event.searchable_fields().collect();
        assert_eq!(fields, vec!["Code Jam", "", "rust", "tech"]);
    }
}
