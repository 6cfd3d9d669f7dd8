use crate::common::*;

use crate::model::{configs::dpla_config::*, search::api_key::*};

use crate::dto::{dpla_item_query::*, dpla_raw_response::*};

use crate::traits::repository_traits::dpla_repository::*;

#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct DplaRepositoryImpl {
    client: Client,
    base_url: String,
}

impl DplaRepositoryImpl {
    pub fn new(dpla_config: &DplaConfig) -> Result<Self, anyhow::Error> {
        let mut builder: reqwest::ClientBuilder = Client::builder();

        if let Some(timeout_sec) = dpla_config.request_timeout_sec() {
            builder = builder.timeout(Duration::from_secs(*timeout_sec));
        }

        let client: Client = builder
            .build()
            .context("[DplaRepositoryImpl->new] failed to build the HTTP client")?;

        Ok(DplaRepositoryImpl {
            client,
            base_url: dpla_config.base_url().to_string(),
        })
    }
}

#[async_trait]
impl DplaRepository for DplaRepositoryImpl {
    #[doc = "Function that EXECUTES a DPLA item count query"]
    async fn get_item_count_query(
        &self,
        query: &DplaItemQuery,
        api_key: &ApiKey,
    ) -> Result<DplaRawResponse, anyhow::Error> {
        let url: String = query.to_request_url(&self.base_url, api_key);

        let response: reqwest::Response =
            self.client.get(&url).send().await.with_context(|| {
                format!(
                    "[DplaRepositoryImpl->get_item_count_query] request failed for date range {}-{}",
                    query.date_after(),
                    query.date_before()
                )
            })?;

        let status_code: u16 = response.status().as_u16();

        let body: String = response.text().await.with_context(|| {
            format!(
                "[DplaRepositoryImpl->get_item_count_query] failed to read response body (status {})",
                status_code
            )
        })?;

        Ok(DplaRawResponse::new(status_code, body))
    }
}
