use crate::common::*;

use crate::traits::{repository_traits::dpla_repository::*, service_traits::frequency_service::*};

use crate::utils_modules::{io_utils::*, traits::*};

use crate::model::{
    decade::decade_range::*,
    search::{api_key::*, search_term::*},
};

use crate::dto::{
    decade_count_map::*, dpla_count_result::*, dpla_item_query::*, dpla_raw_response::*,
    frequency_report::*,
};

use crate::enums::decade_notice::*;

#[derive(Debug, new)]
pub struct FrequencyServiceImpl<R: DplaRepository> {
    dpla_repo: Arc<R>,
}

impl<R: DplaRepository> FrequencyServiceImpl<R> {
    #[doc = r#"
        Turns one raw DPLA response into the count recorded for its decade.

        1. A status other than 200 → missing value + `HttpStatus` notice
        2. A body that is not a JSON object → missing value + `InvalidBody` notice
        3. No integer `count` field → missing value + `MissingCount` notice
        4. Otherwise the count itself, with no notice

        # Arguments
        * `decade` - start year of the queried window
        * `response` - status code and body as received

        # Returns
        * `(Option<u64>, Option<DecadeNotice>)`
    "#]
    fn extract_decade_count(
        decade: i32,
        response: &DplaRawResponse,
    ) -> (Option<u64>, Option<DecadeNotice>) {
        if !response.is_ok() {
            return (
                None,
                Some(DecadeNotice::HttpStatus {
                    decade,
                    status_code: *response.status_code(),
                }),
            );
        }

        let count_result: anyhow::Result<DplaCountResult> = parse_json_body(response.body())
            .and_then(|body| DplaCountResult::from_response_body(&body));

        match count_result {
            Ok(result) => match result.count() {
                Some(count) => (Some(*count), None),
                None => (None, Some(DecadeNotice::MissingCount { decade })),
            },
            Err(e) => (
                None,
                Some(DecadeNotice::InvalidBody {
                    decade,
                    reason: e.to_string(),
                }),
            ),
        }
    }
}

#[async_trait]
impl<R: DplaRepository> FrequencyService for FrequencyServiceImpl<R> {
    async fn collect_decade_frequency(
        &self,
        term: &SearchTerm,
        api_key: &ApiKey,
        range: &DecadeRange,
    ) -> anyhow::Result<FrequencyReport> {
        let mut counts: DecadeCountMap = DecadeCountMap::with_capacity(range.decade_count());
        let mut notices: Vec<DecadeNotice> = Vec::new();

        info!(
            "Collecting decade counts for '{}' over {} ({} decades)",
            term,
            range,
            range.decade_count()
        );

        for window in range.windows() {
            let decade: i32 = *window.start_year();
            let query: DplaItemQuery = DplaItemQuery::from_window(term, &window);

            /* transport faults abort the whole run */
            let response: DplaRawResponse = self
                .dpla_repo
                .get_item_count_query(&query, api_key)
                .await
                .with_context(|| {
                    format!(
                        "[FrequencyServiceImpl->collect_decade_frequency] decade {} aborted the collection",
                        window
                    )
                })?;

            let (count, notice) = Self::extract_decade_count(decade, &response);

            match &notice {
                Some(DecadeNotice::HttpStatus { status_code, .. }) => {
                    error!(
                        "[FrequencyServiceImpl->collect_decade_frequency] Error: {} (decade {})",
                        status_code, window
                    );
                }
                Some(other) => {
                    warn!("[FrequencyServiceImpl->collect_decade_frequency] {}", other);
                }
                None => {
                    info!("{} -> {:?}", window, count);
                }
            }

            if let Some(notice) = notice {
                notices.push(notice);
            }

            counts.insert(decade, count)?;
        }

        Ok(FrequencyReport::new(term.clone(), counts, notices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::scripted_dpla_repository::*;

    fn build_service(
        repo: ScriptedDplaRepository,
    ) -> (
        FrequencyServiceImpl<ScriptedDplaRepository>,
        Arc<ScriptedDplaRepository>,
    ) {
        let repo: Arc<ScriptedDplaRepository> = Arc::new(repo);
        (FrequencyServiceImpl::new(Arc::clone(&repo)), repo)
    }

    fn jazz() -> SearchTerm {
        SearchTerm::new("jazz").unwrap()
    }

    fn key() -> ApiKey {
        ApiKey::new("test-key".to_string())
    }

    #[tokio::test]
    async fn default_range_yields_one_entry_per_decade() {
        let (service, repo) = build_service(ScriptedDplaRepository::default());

        let report: FrequencyReport = service
            .collect_default_decades(&jazz(), &key())
            .await
            .unwrap();

        let expected: Vec<i32> = (1800..2010).step_by(10).collect();
        assert_eq!(report.counts().len(), 21);
        assert_eq!(report.counts().decades(), expected);
        assert_eq!(repo.received().len(), 21);
        assert!(!report.has_notices());
    }

    #[tokio::test]
    async fn entry_count_matches_range_span() {
        for (start, end) in [(1800, 2010), (1920, 1960), (2000, 2010), (1850, 1950)] {
            let (service, _) = build_service(ScriptedDplaRepository::default());
            let range: DecadeRange = DecadeRange::new(start, end).unwrap();

            let report: FrequencyReport = service
                .collect_decade_frequency(&jazz(), &key(), &range)
                .await
                .unwrap();

            let expected: Vec<i32> = (start..end).step_by(10).collect();
            assert_eq!(report.counts().len(), ((end - start) / 10) as usize);
            assert_eq!(report.counts().decades(), expected);
        }
    }

    #[tokio::test]
    async fn queries_are_bounded_by_each_decade_in_order() {
        let (service, repo) = build_service(ScriptedDplaRepository::default());
        let range: DecadeRange = DecadeRange::new(1920, 1960).unwrap();

        service
            .collect_decade_frequency(&jazz(), &key(), &range)
            .await
            .unwrap();

        let received: Vec<(DplaItemQuery, String)> = repo.received();
        let bounds: Vec<(i32, i32)> = received
            .iter()
            .map(|(q, _)| (*q.date_after(), *q.date_before()))
            .collect();

        assert_eq!(bounds, vec![(1920, 1929), (1930, 1939), (1940, 1949), (1950, 1959)]);
        assert!(received.iter().all(|(q, k)| q.term() == "jazz" && k == "test-key"));
    }

    #[tokio::test]
    async fn count_from_successful_response_is_recorded() {
        let (service, _) = build_service(
            ScriptedDplaRepository::default().reply_json(1920, 200, json!({ "count": 42 })),
        );

        let report: FrequencyReport = service
            .collect_default_decades(&jazz(), &key())
            .await
            .unwrap();

        assert_eq!(report.counts().get(1920), Some(Some(42)));
    }

    #[tokio::test]
    async fn failed_status_does_not_abort_the_run() {
        let (service, _) = build_service(
            ScriptedDplaRepository::default().reply_raw(1930, 500, "Internal Server Error"),
        );

        let report: FrequencyReport = service
            .collect_default_decades(&jazz(), &key())
            .await
            .unwrap();

        assert_eq!(report.counts().len(), 21);
        assert_eq!(report.counts().get(1930), Some(None));
        assert_eq!(report.counts().get(1940), Some(Some(0)));
        assert_eq!(
            report.notices(),
            &vec![DecadeNotice::HttpStatus {
                decade: 1930,
                status_code: 500
            }]
        );
    }

    #[tokio::test]
    async fn status_other_than_200_counts_as_failure() {
        let (service, _) = build_service(
            ScriptedDplaRepository::default().reply_json(1900, 204, json!({ "count": 5 })),
        );
        let range: DecadeRange = DecadeRange::new(1900, 1910).unwrap();

        let report: FrequencyReport = service
            .collect_decade_frequency(&jazz(), &key(), &range)
            .await
            .unwrap();

        assert_eq!(report.counts().get(1900), Some(None));
        assert_eq!(report.notices()[0].decade(), 1900);
    }

    #[tokio::test]
    async fn missing_count_field_is_a_missing_value() {
        let (service, _) = build_service(
            ScriptedDplaRepository::default().reply_json(1800, 200, json!({ "docs": [] })),
        );

        let report: FrequencyReport = service
            .collect_default_decades(&jazz(), &key())
            .await
            .unwrap();

        assert_eq!(report.counts().get(1800), Some(None));
        assert_eq!(report.counts().missing_decades(), vec![1800]);
        assert_eq!(report.notices(), &vec![DecadeNotice::MissingCount { decade: 1800 }]);
    }

    #[tokio::test]
    async fn malformed_body_is_a_missing_value() {
        let (service, _) = build_service(
            ScriptedDplaRepository::default().reply_raw(1850, 200, "<html>oops</html>"),
        );

        let report: FrequencyReport = service
            .collect_default_decades(&jazz(), &key())
            .await
            .unwrap();

        assert_eq!(report.counts().len(), 21);
        assert_eq!(report.counts().get(1850), Some(None));
        assert!(matches!(
            report.notices().as_slice(),
            [DecadeNotice::InvalidBody { decade: 1850, .. }]
        ));
    }

    #[tokio::test]
    async fn zero_is_distinct_from_missing() {
        let (service, _) = build_service(
            ScriptedDplaRepository::default()
                .reply_json(1920, 200, json!({ "count": 0 }))
                .reply_json(1930, 200, json!({})),
        );
        let range: DecadeRange = DecadeRange::new(1920, 1940).unwrap();

        let report: FrequencyReport = service
            .collect_decade_frequency(&jazz(), &key(), &range)
            .await
            .unwrap();

        assert_eq!(report.counts().get(1920), Some(Some(0)));
        assert_eq!(report.counts().get(1930), Some(None));
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let (service, repo) = build_service(ScriptedDplaRepository::default().fail_transport(1940));

        let result: anyhow::Result<FrequencyReport> =
            service.collect_default_decades(&jazz(), &key()).await;

        assert!(result.is_err());
        /* 1800..=1940 were issued, nothing after the failure */
        assert_eq!(repo.received().len(), 15);
    }

    #[tokio::test]
    async fn repeated_runs_query_again() {
        let (service, repo) = build_service(ScriptedDplaRepository::default());
        let range: DecadeRange = DecadeRange::new(1990, 2010).unwrap();

        service.collect_decade_frequency(&jazz(), &key(), &range).await.unwrap();
        service.collect_decade_frequency(&jazz(), &key(), &range).await.unwrap();

        assert_eq!(repo.received().len(), 4);
    }

    #[tokio::test]
    async fn jazz_between_1920_and_1960() {
        let (service, _) = build_service(
            ScriptedDplaRepository::default()
                .reply_json(1920, 200, json!({ "count": 310 }))
                .reply_json(1930, 200, json!({ "count": 1204 }))
                .reply_raw(1940, 503, "")
                .reply_json(1950, 200, json!({ "count": 2211 })),
        );
        let range: DecadeRange = DecadeRange::new(1920, 1960).unwrap();

        let report: FrequencyReport = service
            .collect_decade_frequency(&jazz(), &key(), &range)
            .await
            .unwrap();

        let pairs: Vec<(i32, Option<u64>)> = report
            .counts()
            .entries()
            .iter()
            .map(|e| (*e.decade(), *e.count()))
            .collect();

        assert_eq!(
            pairs,
            vec![(1920, Some(310)), (1930, Some(1204)), (1940, None), (1950, Some(2211))]
        );
    }
}
