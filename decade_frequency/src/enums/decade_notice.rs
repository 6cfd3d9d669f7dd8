use crate::common::*;

#[doc = "Per-decade diagnostic. The decade it names is recorded as a missing value."]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecadeNotice {
    HttpStatus { decade: i32, status_code: u16 },
    InvalidBody { decade: i32, reason: String },
    MissingCount { decade: i32 },
}

impl DecadeNotice {
    #[cfg(test)]
    pub fn decade(&self) -> i32 {
        match self {
            DecadeNotice::HttpStatus { decade, .. }
            | DecadeNotice::InvalidBody { decade, .. }
            | DecadeNotice::MissingCount { decade } => *decade,
        }
    }
}

impl fmt::Display for DecadeNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecadeNotice::HttpStatus {
                decade,
                status_code,
            } => write!(f, "decade {}: request failed with status {}", decade, status_code),
            DecadeNotice::InvalidBody { decade, reason } => {
                write!(f, "decade {}: response body could not be parsed ({})", decade, reason)
            }
            DecadeNotice::MissingCount { decade } => {
                write!(f, "decade {}: response has no 'count' field", decade)
            }
        }
    }
}
