use crate::common::*;

use crate::model::{
    decade::decade_range::*,
    search::{api_key::*, search_term::*},
};

use crate::dto::frequency_report::*;

use crate::traits::service_traits::{chart_service::*, frequency_service::*};

#[derive(Debug, new)]
pub struct MainController<F: FrequencyService, C: ChartService> {
    frequency_service: F,
    chart_service: C,
}

impl<F: FrequencyService, C: ChartService> MainController<F, C> {
    #[doc = r#"
        One collect-then-render pass.

        1. Queries DPLA once per decade of `range` for `term`
        2. Logs a short summary (notices are logged as they happen)
        3. Draws the decade histogram to `output_path`

        # Arguments
        * `term` - search term
        * `api_key` - DPLA credential
        * `range` - decades to cover
        * `output_path` - chart image destination

        # Returns
        * `(FrequencyReport, PathBuf)` - the collected counts and the written chart path
        * `anyhow::Error` - transport failure during collection, or an I/O / drawing failure
    "#]
    pub async fn main_task(
        &self,
        term: &SearchTerm,
        api_key: &ApiKey,
        range: &DecadeRange,
        output_path: &Path,
    ) -> anyhow::Result<(FrequencyReport, PathBuf)> {
        /* 1. 연대별 문서 수 수집 */
        let report: FrequencyReport = if *range == DecadeRange::default() {
            self.frequency_service
                .collect_default_decades(term, api_key)
                .await?
        } else {
            self.frequency_service
                .collect_decade_frequency(term, api_key, range)
                .await?
        };

        /* 2. 수집 결과 요약 */
        info!("{}", Self::report_summary(&report));

        /* 3. 히스토그램 생성 */
        let chart_path: PathBuf = self
            .chart_service
            .render_histogram(term, report.counts(), output_path)
            .await?;

        Ok((report, chart_path))
    }

    #[doc = "One-line summary of a collection run; notices are only counted here"]
    fn report_summary(report: &FrequencyReport) -> String {
        format!(
            "Collected {} decade(s) for '{}': {} missing, {} notice(s)",
            report.counts().len(),
            report.term(),
            report.counts().missing_decades().len(),
            report.notices().len()
        )
    }
}
