//! Discovery of the recently published forecast runs.
//!
//! The latest run is the first of (today 12z, today 00z, yesterday 12z,
//! yesterday 00z) whose canonical image exists. From there the chain is
//! extended backwards in 12 hour steps until `max_runs` are known or a run is
//! missing. Probes are issued one at a time so the priority order holds.

use crate::error::ViewerError;
use crate::probe::RunProber;
use crate::run::Run;
use crate::url::UrlBuilder;
use chrono::NaiveDate;
use log::{debug, info};

/// Find the newest published run among the four candidates for `today`.
pub async fn find_latest_run<P: RunProber>(
    prober: &P,
    urls: &UrlBuilder,
    today: NaiveDate,
) -> Result<Run, ViewerError> {
    for candidate in Run::latest_candidates(today) {
        let url = urls.probe_url(&candidate);
        debug!("Trying run {}: {}", candidate, url);
        if prober.exists(&url).await {
            info!("Latest run is {}", candidate);
            return Ok(candidate);
        }
    }
    Err(ViewerError::NoForecastAvailable)
}

/// Build the run list, newest first. Never empty on success.
pub async fn discover_runs<P: RunProber>(
    prober: &P,
    urls: &UrlBuilder,
    today: NaiveDate,
    max_runs: usize,
) -> Result<Vec<Run>, ViewerError> {
    let latest = find_latest_run(prober, urls, today).await?;
    let mut runs = vec![latest];

    while runs.len() < max_runs {
        let Some(last) = runs.last() else { break };
        let older = last.previous();
        let url = urls.probe_url(&older);
        if !prober.exists(&url).await {
            debug!("Run {} not published, stopping", older);
            break;
        }
        runs.push(older);
    }

    info!(
        "Discovered {} run(s): {}",
        runs.len(),
        runs.iter().map(|r| r.to_string()).collect::<Vec<_>>().join(", ")
    );
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MAX_RUNS;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Answers from a fixed set of published run stamps and records every probe.
    struct ScriptedProber {
        published: HashSet<String>,
        probed: RefCell<Vec<String>>,
    }

    impl ScriptedProber {
        fn new(published: &[&str]) -> Self {
            Self {
                published: published.iter().map(|s| s.to_string()).collect(),
                probed: RefCell::new(Vec::new()),
            }
        }

        fn probe_count(&self) -> usize {
            self.probed.borrow().len()
        }
    }

    impl RunProber for ScriptedProber {
        async fn exists(&self, url: &str) -> bool {
            self.probed.borrow_mut().push(url.to_string());
            self.published.iter().any(|stamp| url.contains(&format!("_{}_", stamp)))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn stamps(runs: &[Run]) -> Vec<String> {
        runs.iter().map(|r| r.to_string()).collect()
    }

    #[tokio::test]
    async fn test_latest_is_first_success_in_priority_order() {
        // Both of today's runs exist; 12z wins because it is probed first.
        let prober = ScriptedProber::new(&["20250314-1200", "20250314-0000"]);
        let run = find_latest_run(&prober, &UrlBuilder::default(), today()).await.unwrap();
        assert_eq!(run.to_string(), "20250314-1200");
        assert_eq!(prober.probe_count(), 1);
    }

    #[tokio::test]
    async fn test_falls_back_to_yesterday() {
        let prober = ScriptedProber::new(&["20250313-0000"]);
        let run = find_latest_run(&prober, &UrlBuilder::default(), today()).await.unwrap();
        assert_eq!(run.to_string(), "20250313-0000");
        assert_eq!(prober.probe_count(), 4);
    }

    #[tokio::test]
    async fn test_no_forecast_available() {
        let prober = ScriptedProber::new(&["20250310-0000"]);
        let result = discover_runs(&prober, &UrlBuilder::default(), today(), MAX_RUNS).await;
        assert_eq!(result, Err(ViewerError::NoForecastAvailable));
        assert_eq!(prober.probe_count(), 4);
    }

    #[tokio::test]
    async fn test_collects_up_to_max_runs() {
        let prober = ScriptedProber::new(&[
            "20250314-0000",
            "20250313-1200",
            "20250313-0000",
            "20250312-1200",
            "20250312-0000",
            "20250311-1200",
            "20250311-0000",
        ]);
        let runs = discover_runs(&prober, &UrlBuilder::default(), today(), MAX_RUNS).await.unwrap();
        assert_eq!(
            stamps(&runs),
            vec![
                "20250314-0000",
                "20250313-1200",
                "20250313-0000",
                "20250312-1200",
                "20250312-0000",
                "20250311-1200",
            ]
        );
        // 2 probes for the latest run, then one per older run
        assert_eq!(prober.probe_count(), 2 + 5);
    }

    #[tokio::test]
    async fn test_stops_at_first_gap() {
        // 20250313-1200 is missing, so 20250313-0000 is never reached
        let prober = ScriptedProber::new(&["20250314-1200", "20250314-0000", "20250313-0000"]);
        let runs = discover_runs(&prober, &UrlBuilder::default(), today(), MAX_RUNS).await.unwrap();
        assert_eq!(stamps(&runs), vec!["20250314-1200", "20250314-0000"]);
        assert_eq!(prober.probe_count(), 3);
    }

    #[tokio::test]
    async fn test_single_run_is_valid() {
        let prober = ScriptedProber::new(&["20250314-1200"]);
        let runs = discover_runs(&prober, &UrlBuilder::default(), today(), MAX_RUNS).await.unwrap();
        assert_eq!(runs.len(), 1);
    }
}
