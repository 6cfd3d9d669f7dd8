use crate::common::*;

#[doc = "Non-empty search term, passed to the upstream `q` parameter as given"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: impl Into<String>) -> anyhow::Result<Self> {
        let term: String = term.into();

        if term.trim().is_empty() {
            return Err(anyhow!("[SearchTerm->new] search term must not be empty"));
        }

        Ok(Self(term))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
