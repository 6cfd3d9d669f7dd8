use crate::common::*;

use crate::dto::frequency_report::*;
use crate::model::{
    decade::decade_range::*,
    search::{api_key::*, search_term::*},
};

#[async_trait]
pub trait FrequencyService: Send + Sync {
    #[doc = r#"
        Queries the item count of `term` for every decade of `range`, one request at a
        time in ascending order.

        # Arguments
        * `term` - search term, sent verbatim
        * `api_key` - upstream credential
        * `range` - decades to query

        # Returns
        * `FrequencyReport` - exactly one entry per decade, failed decades as missing
          values plus a notice
        * `anyhow::Error` - transport-level failure only
    "#]
    async fn collect_decade_frequency(
        &self,
        term: &SearchTerm,
        api_key: &ApiKey,
        range: &DecadeRange,
    ) -> anyhow::Result<FrequencyReport>;

    #[doc = "Same as `collect_decade_frequency` over the default [1800, 2010) range"]
    async fn collect_default_decades(
        &self,
        term: &SearchTerm,
        api_key: &ApiKey,
    ) -> anyhow::Result<FrequencyReport> {
        self.collect_decade_frequency(term, api_key, &DecadeRange::default())
            .await
    }
}
