use crate::common::*;

use crate::dto::{decade_count_map::*, histogram_plan::*};
use crate::model::search::search_term::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "Bars, ticks, axis descriptions and title for `counts`, without drawing"]
    fn build_histogram_plan(
        &self,
        term: &SearchTerm,
        counts: &DecadeCountMap,
    ) -> anyhow::Result<HistogramPlan>;

    #[doc = r#"
        Draw a bar chart of `counts` and save it as an image file
        # Arguments
        * `term` - search term, shown capitalized in the title
        * `counts` - ascending decade → count mapping; missing values are drawn as zero
        * `output_path` - where the image is written (`.svg` for SVG, PNG otherwise)

        # Returns
        * `PathBuf` - path of the written image
    "#]
    async fn render_histogram(
        &self,
        term: &SearchTerm,
        counts: &DecadeCountMap,
        output_path: &Path,
    ) -> anyhow::Result<PathBuf>;
}
