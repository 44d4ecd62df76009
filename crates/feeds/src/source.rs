use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::{fmt, path::PathBuf, sync::Arc, time::Duration};

use crate::FeedError;

/// Every feed the viewer reads, with its path relative to the feed base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeedKind {
    Airports,
    Metars,
    Tafs,
    StationNames,
    Sigmets,
    Boundary,
    Winds,
}

impl FeedKind {
    pub const ALL: [FeedKind; 7] = [
        FeedKind::Airports,
        FeedKind::Metars,
        FeedKind::Tafs,
        FeedKind::StationNames,
        FeedKind::Sigmets,
        FeedKind::Boundary,
        FeedKind::Winds,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            FeedKind::Airports => "map/airport.csv",
            FeedKind::Metars => "currentwx/metar.csv",
            FeedKind::Tafs => "currentwx/taf.xml",
            FeedKind::StationNames => "map/stations.xml",
            FeedKind::Sigmets => "currentwx/isigmet.json",
            FeedKind::Boundary => "map/INDIA_STATES.geojson",
            FeedKind::Winds => "currentwx/850wind.json",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeedKind::Airports => "airports",
            FeedKind::Metars => "metars",
            FeedKind::Tafs => "tafs",
            FeedKind::StationNames => "station names",
            FeedKind::Sigmets => "sigmets",
            FeedKind::Boundary => "boundary",
            FeedKind::Winds => "winds",
        };
        write!(f, "{}", name)
    }
}

/// Read-only access to the raw feed documents.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_text(&self, path: &str) -> Result<String, FeedError>;

    async fn fetch_feed(&self, kind: FeedKind) -> Result<String, FeedError> {
        self.fetch_text(kind.path()).await
    }
}

/// Pulls feeds over HTTP from a base URL. Failed requests are not retried;
/// the next scheduled refresh is the only recovery.
pub struct HttpFeedSource {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpFeedSource {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FeedError> {
        let url = self.url(path);
        debug!("requesting: {}", url);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FeedError::Status {
                path: path.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Reads feeds from a directory laid out like the published feed tree.
pub struct DirFeedSource {
    root: PathBuf,
}

impl DirFeedSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FeedSource for DirFeedSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FeedError> {
        let full = self.root.join(path.trim_start_matches('/'));
        debug!("reading: {}", full.display());
        Ok(tokio::fs::read_to_string(full).await?)
    }
}

/// Picks an HTTP source for `http(s)://` bases and a directory source otherwise.
pub fn feed_source_for(
    base: &str,
    user_agent: &str,
    timeout: Duration,
) -> Result<Arc<dyn FeedSource>, FeedError> {
    if base.starts_with("http://") || base.starts_with("https://") {
        Ok(Arc::new(HttpFeedSource::new(base, user_agent, timeout)?))
    } else {
        Ok(Arc::new(DirFeedSource::new(base)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_source_joins_paths_without_double_slashes() {
        let source =
            HttpFeedSource::new("https://example.org/wx/", "wxmap-test", Duration::from_secs(5))
                .unwrap();
        assert_eq!(
            source.url(FeedKind::Metars.path()),
            "https://example.org/wx/currentwx/metar.csv"
        );
        assert_eq!(source.url("/map/airport.csv"), "https://example.org/wx/map/airport.csv");
    }

    #[tokio::test]
    async fn dir_source_reads_feed_files() {
        let root = std::env::temp_dir().join(format!("wxmap-feeds-{}", std::process::id()));
        std::fs::create_dir_all(root.join("currentwx")).unwrap();
        std::fs::write(root.join("currentwx/isigmet.json"), "[]").unwrap();

        let source = DirFeedSource::new(&root);
        let body = source.fetch_feed(FeedKind::Sigmets).await.unwrap();
        assert_eq!(body, "[]");

        let missing = source.fetch_feed(FeedKind::Tafs).await;
        assert!(matches!(missing, Err(FeedError::Io(_))));

        std::fs::remove_dir_all(&root).unwrap();
    }
}
