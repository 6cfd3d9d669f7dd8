use crate::common::*;

use crate::model::decade::decade_window::*;

pub const DECADE_STEP: i32 = 10;
pub const DEFAULT_START_YEAR: i32 = 1800;
pub const DEFAULT_END_YEAR: i32 = 2010;

#[doc = r#"
    Half-open range of decade starts `[start_year, end_year)` stepping by ten years.

    The upper bound is exclusive, so the default `[1800, 2010)` yields the 21 decades
    1800, 1810, ..., 2000.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct DecadeRange {
    start_year: i32,
    end_year: i32,
}

impl DecadeRange {
    #[doc = r#"
        Builds a validated range.

        # Errors
        * `start_year` is not a multiple of ten
        * `end_year` is not after `start_year`
        * the span is not a whole number of decades
    "#]
    pub fn new(start_year: i32, end_year: i32) -> anyhow::Result<Self> {
        if start_year % DECADE_STEP != 0 {
            return Err(anyhow!(
                "[DecadeRange->new] start year must be a multiple of {}: {}",
                DECADE_STEP,
                start_year
            ));
        }

        if end_year <= start_year {
            return Err(anyhow!(
                "[DecadeRange->new] end year ({}) must be greater than start year ({})",
                end_year,
                start_year
            ));
        }

        if (end_year - start_year) % DECADE_STEP != 0 {
            return Err(anyhow!(
                "[DecadeRange->new] range [{}, {}) is not a whole number of decades",
                start_year,
                end_year
            ));
        }

        Ok(Self {
            start_year,
            end_year,
        })
    }

    pub fn decade_count(&self) -> usize {
        ((self.end_year - self.start_year) / DECADE_STEP) as usize
    }

    #[doc = "Windows in ascending order"]
    pub fn windows(&self) -> impl Iterator<Item = DecadeWindow> + '_ {
        (self.start_year..self.end_year)
            .step_by(DECADE_STEP as usize)
            .map(DecadeWindow::new)
    }
}

impl Default for DecadeRange {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
        }
    }
}

impl fmt::Display for DecadeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_year, self.end_year)
    }
}
