use crate::common::*;

use crate::dto::{dpla_item_query::*, dpla_raw_response::*};
use crate::model::search::api_key::*;

#[async_trait]
pub trait DplaRepository: Send + Sync {
    #[doc = r#"
        Issues one GET against the items endpoint.

        A non-200 status is returned as `Ok`, and the caller decides what to do with it.
        Only transport faults (no connection, timeout, unreadable body) are `Err`.
    "#]
    async fn get_item_count_query(
        &self,
        query: &DplaItemQuery,
        api_key: &ApiKey,
    ) -> Result<DplaRawResponse, anyhow::Error>;
}
