//! Default values for the select query and the search app.

pub const DEFAULT_QUERY: &str = "*";
pub const DEFAULT_START: u64 = 0;
pub const DEFAULT_ROWS: u64 = 20;
pub const DEFAULT_SORT_FIELD: &str = "score";

pub const DEFAULT_HIGHLIGHT_FIELD: &str = "tm_rendered_item";
pub const HIGHLIGHT_SIMPLE_PREFIX: &str = "<strong>";
pub const HIGHLIGHT_SIMPLE_POSTFIX: &str = "</strong>";

/// -1 lets Solr return every facet value.
pub const DEFAULT_FACET_LIMIT: i64 = -1;
pub const DEFAULT_FACET_SORT: &str = "index";

/// Browser and shared cache lifetime used when none is configured, in seconds.
pub const DEFAULT_CACHE_MAX_AGE: u64 = 3600;

pub const DEFAULT_SEARCH_APP_PATH: &str = "/search-app";
pub const DEFAULT_NO_RESULTS_TEXT: &str = "Your search yielded no results.";
pub const DEFAULT_SEARCH_PROMPT_TEXT: &str = "Please enter a search term.";
pub const DEFAULT_PAGE_BUTTONS: u64 = 5;
