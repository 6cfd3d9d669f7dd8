use crate::common::*;

use crate::dto::decade_count_map::*;
use crate::enums::decade_notice::*;
use crate::model::search::search_term::*;

#[doc = r#"
    Result of one collection run.

    # Fields
    * `term` - the search term that was queried
    * `counts` - one entry per decade of the range, ascending
    * `notices` - per-decade diagnostics, in the order they happened
"#]
#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct FrequencyReport {
    pub term: SearchTerm,
    pub counts: DecadeCountMap,
    pub notices: Vec<DecadeNotice>,
}

impl FrequencyReport {
    #[cfg(test)]
    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }
}
