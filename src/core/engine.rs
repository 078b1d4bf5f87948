use crate::core::aggregator::summarize;
use crate::core::{AggregateSummary, Clock, ContributionSource, DateInterval, MarkupExtractor};
use crate::utils::error::Result;
use std::sync::Arc;

/// 抓取 → 擷取 → 計算區間 → 加總
///
/// 每次呼叫只抓取一次，不重試；除了抓取之外的步驟都不會失敗。
#[derive(Clone)]
pub struct ContributionEngine {
    source: Arc<dyn ContributionSource>,
    extractor: Arc<dyn MarkupExtractor>,
    clock: Arc<dyn Clock>,
}

impl ContributionEngine {
    pub fn new(
        source: Arc<dyn ContributionSource>,
        extractor: Arc<dyn MarkupExtractor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            extractor,
            clock,
        }
    }

    #[tracing::instrument(skip(self), fields(degraded))]
    pub async fn run(&self, name: &str, day_count: f64) -> Result<AggregateSummary> {
        // Extract
        let markup = self.source.fetch(name).await?;
        tracing::debug!("Fetched contributions page ({} bytes)", markup.len());

        let records = self.extractor.extract(&markup);
        tracing::debug!("Extracted {} day cells", records.len());

        // Transform
        let interval = DateInterval::trailing(day_count, self.clock.as_ref());
        tracing::debug!("Window: [{}, {})", interval.to, interval.from);

        // Aggregate
        let summary = summarize(&records, &interval);
        tracing::Span::current().record("degraded", summary.degraded);

        if summary.is_degraded() {
            tracing::warn!(
                "⚠️ {} of {} day cells had a non-numeric level and were counted as 0",
                summary.degraded,
                summary.matched
            );
        }

        tracing::info!(
            "✅ {} points over {} days ({} cells in window)",
            summary.points,
            day_count,
            summary.matched
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extractor::CalendarGraphExtractor;
    use crate::utils::error::ContribError;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct StaticSource {
        markup: Option<String>,
        calls: AtomicUsize,
    }

    impl StaticSource {
        fn page(markup: &str) -> Self {
            Self {
                markup: Some(markup.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn missing() -> Self {
            Self {
                markup: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ContributionSource for StaticSource {
        async fn fetch(&self, name: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.markup.clone().ok_or_else(|| ContribError::NotFound {
                name: name.to_string(),
            })
        }
    }

    fn engine_with(source: Arc<StaticSource>) -> ContributionEngine {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 6, 9, 0, 0).unwrap());
        ContributionEngine::new(
            source,
            Arc::new(CalendarGraphExtractor::new()),
            Arc::new(clock),
        )
    }

    const PAGE: &str = r#"
<svg class="js-calendar-graph-svg">
  <g>
    <rect data-date="2023-12-31" data-level="9"></rect>
    <rect data-date="2024-01-01" data-level="3"></rect>
    <rect data-date="2024-01-05" data-level="2"></rect>
    <rect data-date="2024-01-06" data-level="4"></rect>
  </g>
</svg>
"#;

    #[tokio::test]
    async fn test_run_sums_trailing_window() {
        let source = Arc::new(StaticSource::page(PAGE));
        let engine = engine_with(source.clone());

        let summary = engine.run("octocat", 5.0).await.unwrap();

        // [2024-01-01, 2024-01-06)
        assert_eq!(summary.points, 5);
        assert_eq!(summary.matched, 2);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_without_graph_yields_zero() {
        let source = Arc::new(StaticSource::page("<html><body>nothing</body></html>"));
        let summary = engine_with(source).run("octocat", 30.0).await.unwrap();
        assert_eq!(summary, AggregateSummary::default());
    }

    #[tokio::test]
    async fn test_run_propagates_not_found_without_retry() {
        let source = Arc::new(StaticSource::missing());
        let engine = engine_with(source.clone());

        let err = engine.run("doesnotexist", 30.0).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
