use crate::common::*;

use crate::dto::decade_count_map::*;
use crate::model::search::search_term::*;
use crate::utils_modules::text_utils::*;

pub const X_AXIS_DESC: &str = "Decade";
pub const Y_AXIS_DESC: &str = "Number of Items";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct HistogramBar {
    pub decade: i32,
    pub height: u64,
    pub missing: bool,
}

#[doc = r#"
    Everything the renderer draws, computed without touching a drawing backend.

    Bars follow the order of the `DecadeCountMap` they were built from. A missing count
    becomes a zero-height bar flagged `missing`.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct HistogramPlan {
    title: String,
    x_desc: String,
    y_desc: String,
    bars: Vec<HistogramBar>,
}

impl HistogramPlan {
    pub fn build(term: &SearchTerm, counts: &DecadeCountMap) -> anyhow::Result<Self> {
        if counts.is_empty() {
            return Err(anyhow!(
                "[HistogramPlan->build] Cannot generate chart with empty data"
            ));
        }

        let bars: Vec<HistogramBar> = counts
            .entries()
            .iter()
            .map(|entry| {
                HistogramBar::new(
                    *entry.decade(),
                    entry.count().unwrap_or(0),
                    entry.count().is_none(),
                )
            })
            .collect();

        Ok(Self {
            title: format!(
                "Number of Items per Decade for '{}'",
                capitalize(term.as_str().trim())
            ),
            x_desc: X_AXIS_DESC.to_string(),
            y_desc: Y_AXIS_DESC.to_string(),
            bars,
        })
    }

    #[doc = "X-axis tick labels, one per bar"]
    pub fn x_ticks(&self) -> Vec<String> {
        self.bars.iter().map(|bar| bar.decade.to_string()).collect()
    }

    pub fn max_height(&self) -> u64 {
        self.bars.iter().map(|bar| bar.height).max().unwrap_or(0)
    }

    #[doc = "Y-axis upper bound with 10% headroom above the tallest bar, never below 1"]
    pub fn y_upper_bound(&self) -> u64 {
        let max_val: u64 = self.max_height();
        let padding: u64 = ((max_val as f64) * 0.1).max(1.0) as u64;

        max_val + padding
    }
}
