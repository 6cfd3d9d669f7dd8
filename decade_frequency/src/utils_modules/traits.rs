use crate::common::*;

/* upstream JSON body → domain type */
pub trait FromResponseBody
where
    Self: Sized,
{
    fn from_response_body(body: &Value) -> Result<Self, anyhow::Error>;
}
