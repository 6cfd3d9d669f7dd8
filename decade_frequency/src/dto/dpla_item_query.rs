use crate::common::*;

use crate::model::{decade::decade_window::*, search::{api_key::*, search_term::*}};

pub const DATE_AFTER_PARAM: &str = "sourceResource.date.after";
pub const DATE_BEFORE_PARAM: &str = "sourceResource.date.before";

#[doc = "One date-bounded item count query against the DPLA items endpoint"]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct DplaItemQuery {
    pub term: String,
    pub date_after: i32,
    pub date_before: i32,
}

impl DplaItemQuery {
    pub fn from_window(term: &SearchTerm, window: &DecadeWindow) -> Self {
        Self::new(
            term.as_str().to_string(),
            *window.start_year(),
            *window.end_year(),
        )
    }

    #[doc = r#"
        Builds `base_url?api_key=..&q=..&sourceResource.date.after=..&sourceResource.date.before=..`.
        The key and the term are percent-encoded.
    "#]
    pub fn to_request_url(&self, base_url: &str, api_key: &ApiKey) -> String {
        format!(
            "{}?api_key={}&q={}&{}={}&{}={}",
            base_url.trim_end_matches('?'),
            encode(api_key.expose()),
            encode(&self.term),
            DATE_AFTER_PARAM,
            self.date_after,
            DATE_BEFORE_PARAM,
            self.date_before
        )
    }
}
