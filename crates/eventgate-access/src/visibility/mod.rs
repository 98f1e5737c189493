//! Event visibility — filtering and search suggestions over an in-memory list.

pub mod criteria;
pub mod filter;
pub mod suggestions;

pub use criteria::FilterCriteria;
pub use filter::{event_matches, filter_events, filter_events_owned};
pub use suggestions::{build_suggestions, Suggestion, SuggestionKind};
