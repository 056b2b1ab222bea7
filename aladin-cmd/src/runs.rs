//! Run discovery against the live image server.

use aladin_core::config::ViewerConfig;
use aladin_core::discovery::discover_runs;
use aladin_core::probe::RunProber;
use aladin_core::url::UrlBuilder;
use chrono::{NaiveDate, Utc};
use log::{debug, info};

/// Probes with an HTTP `HEAD` request; anything but a 2xx is "absent".
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()?;
        Ok(Self { client })
    }
}

impl RunProber for HttpProber {
    async fn exists(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                debug!("HEAD {} -> {}", url, response.status());
                response.status().is_success()
            }
            Err(e) => {
                debug!("HEAD {} failed: {}", url, e);
                false
            }
        }
    }
}

/// Discover runs and print them with the URL of their first frame.
pub async fn run_discovery(
    config: &ViewerConfig,
    date: Option<&str>,
    max_runs: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let today = match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("Invalid date {}: {}", d, e))?,
        None => Utc::now().date_naive(),
    };
    let max_runs = max_runs.unwrap_or(config.max_runs).max(1);
    let urls = UrlBuilder::from_config(config);

    info!("Discovering up to {} runs as of {} on {}", max_runs, today, config.base_url);

    let prober = HttpProber::new()?;
    let runs = discover_runs(&prober, &urls, today, max_runs).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&runs)?);
    } else {
        for (i, run) in runs.iter().enumerate() {
            println!("{} {} {}", i, run, urls.probe_url(run));
        }
    }
    Ok(())
}
