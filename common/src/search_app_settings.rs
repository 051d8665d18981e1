//! Settings handed to the front-end search app.

use serde::{Deserialize, Serialize};

use crate::search_const::{
    DEFAULT_NO_RESULTS_TEXT, DEFAULT_PAGE_BUTTONS, DEFAULT_ROWS, DEFAULT_SEARCH_APP_PATH,
    DEFAULT_SEARCH_PROMPT_TEXT,
};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchAppSettings {
    pub path: String,
    pub index_id: String,
    pub has_site_name_property: bool,
    /// Only show results from this site until the user unchecks it in the
    /// "Site name" facet. Ignored unless the index has a site name property.
    pub set_search_site: bool,
    pub no_results_text: String,
    pub search_prompt_text: String,
    pub rows: u64,
    pub page_buttons: u64,
    pub server_url: String,
    pub proxy_url: String,
}

impl Default for SearchAppSettings {
    fn default() -> Self {
        SearchAppSettings {
            path: DEFAULT_SEARCH_APP_PATH.to_string(),
            index_id: String::new(),
            has_site_name_property: false,
            set_search_site: false,
            no_results_text: DEFAULT_NO_RESULTS_TEXT.to_string(),
            search_prompt_text: DEFAULT_SEARCH_PROMPT_TEXT.to_string(),
            rows: DEFAULT_ROWS,
            page_buttons: DEFAULT_PAGE_BUTTONS,
            server_url: String::new(),
            proxy_url: String::new(),
        }
    }
}

impl SearchAppSettings {
    pub fn default_to_this_site(&self) -> bool {
        self.has_site_name_property && self.set_search_site
    }
}
