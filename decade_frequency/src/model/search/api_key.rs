use crate::common::*;

#[doc = r#"
    Opaque DPLA credential. It is injected by the caller and passed to the upstream
    verbatim. It is never validated locally, and `Debug` never prints it.
"#]
#[derive(Clone, PartialEq, Eq, new)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
