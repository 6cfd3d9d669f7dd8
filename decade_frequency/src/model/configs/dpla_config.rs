use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct DplaConfig {
    pub base_url: String,
    #[serde(default)]
    pub request_timeout_sec: Option<u64>,
}

impl Default for DplaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.dp.la/v2/items".to_string(),
            request_timeout_sec: None,
        }
    }
}
