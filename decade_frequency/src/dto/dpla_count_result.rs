use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    The part of a DPLA items response this program reads.

    # Fields
    * `count` - number of matching items, `None` when the field is absent or not a
      non-negative integer
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct DplaCountResult {
    pub count: Option<u64>,
}

impl FromResponseBody for DplaCountResult {
    fn from_response_body(body: &Value) -> Result<Self, anyhow::Error> {
        let object: &serde_json::Map<String, Value> = body.as_object().ok_or_else(|| {
            anyhow!("[DplaCountResult->from_response_body] response body is not a JSON object")
        })?;

        let count: Option<u64> = object.get("count").and_then(|v| v.as_u64());

        Ok(DplaCountResult::new(count))
    }
}
