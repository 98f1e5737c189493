//! Shared constants.

/// Annotation marking a student membership. Only valid on silver.
pub const STUDENT_MARKER: &str = "(student)";

/// Annotation marking a mentor membership. Only valid on platinum.
pub const MENTOR_MARKER: &str = "(mentor)";

/// Query value meaning "no filter" for category and tier selectors.
pub const DEFAULT_ANY_SENTINEL: &str = "all";

/// Suggestions returned by the search box at most.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

/// Search terms shorter than this produce no suggestions.
pub const DEFAULT_MIN_SUGGESTION_CHARS: usize = 2;

/// Route of the membership upsell page.
pub const DEFAULT_UPGRADE_ROUTE: &str = "/premium";

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "EVENTGATE_LOG";
