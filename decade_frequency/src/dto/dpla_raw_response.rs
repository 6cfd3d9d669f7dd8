use crate::common::*;

#[doc = "Status code and untouched body of one DPLA item request"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct DplaRawResponse {
    pub status_code: u16,
    pub body: String,
}

impl DplaRawResponse {
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }
}
