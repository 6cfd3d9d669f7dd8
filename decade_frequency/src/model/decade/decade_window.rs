use crate::common::*;

/* inclusive ten-year span [start_year, start_year + 9] */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct DecadeWindow {
    start_year: i32,
    end_year: i32,
}

impl DecadeWindow {
    pub fn new(start_year: i32) -> Self {
        Self {
            start_year,
            end_year: start_year + 9,
        }
    }
}

impl fmt::Display for DecadeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_year, self.end_year)
    }
}
