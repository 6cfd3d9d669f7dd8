use crate::common::*;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::dto::{dpla_item_query::*, dpla_raw_response::*};
use crate::model::search::api_key::*;
use crate::traits::repository_traits::dpla_repository::*;

#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Response { status_code: u16, body: String },
    TransportFailure,
}

#[doc = r#"
    In-memory `DplaRepository` answering from a per-decade script. Decades without a
    script entry get `{"count": 0}`. Every query is recorded in arrival order.
"#]
#[derive(Debug, Default)]
pub struct ScriptedDplaRepository {
    replies: HashMap<i32, ScriptedReply>,
    received: Mutex<Vec<(DplaItemQuery, String)>>,
}

impl ScriptedDplaRepository {
    pub fn reply_json(mut self, decade: i32, status_code: u16, body: Value) -> Self {
        self.replies.insert(
            decade,
            ScriptedReply::Response {
                status_code,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn reply_raw(mut self, decade: i32, status_code: u16, body: &str) -> Self {
        self.replies.insert(
            decade,
            ScriptedReply::Response {
                status_code,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn fail_transport(mut self, decade: i32) -> Self {
        self.replies.insert(decade, ScriptedReply::TransportFailure);
        self
    }

    pub fn received(&self) -> Vec<(DplaItemQuery, String)> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl DplaRepository for ScriptedDplaRepository {
    async fn get_item_count_query(
        &self,
        query: &DplaItemQuery,
        api_key: &ApiKey,
    ) -> Result<DplaRawResponse, anyhow::Error> {
        self.received
            .lock()
            .unwrap()
            .push((query.clone(), api_key.expose().to_string()));

        match self.replies.get(query.date_after()) {
            Some(ScriptedReply::Response { status_code, body }) => {
                Ok(DplaRawResponse::new(*status_code, body.clone()))
            }
            Some(ScriptedReply::TransportFailure) => Err(anyhow!(
                "[ScriptedDplaRepository->get_item_count_query] connection refused"
            )),
            None => Ok(DplaRawResponse::new(200, json!({ "count": 0 }).to_string())),
        }
    }
}
