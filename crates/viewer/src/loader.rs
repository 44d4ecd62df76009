use log::{debug, error, info};
use std::sync::Arc;
use tokio::task::JoinHandle;
use wxmap_feeds::{
    parse_airports, parse_boundary, parse_metars, parse_sigmets, parse_station_names, parse_tafs,
    parse_winds, FeedError, FeedKind, FeedSource,
};

use crate::store::{Feed, FeedData, LayerStore};

/// Fetches and parses feeds, then commits the results into the layer store.
#[derive(Clone)]
pub struct FeedLoader {
    source: Arc<dyn FeedSource>,
    store: Arc<LayerStore>,
    domestic_firs: Arc<Vec<String>>,
}

impl FeedLoader {
    pub fn new(
        source: Arc<dyn FeedSource>,
        store: Arc<LayerStore>,
        domestic_firs: Vec<String>,
    ) -> Self {
        Self {
            source,
            store,
            domestic_firs: Arc::new(domestic_firs),
        }
    }

    pub fn store(&self) -> &Arc<LayerStore> {
        &self.store
    }

    /// Runs one load to completion. Failures are logged and leave the
    /// layer's previous records in place. Returns true if new records were
    /// committed.
    pub async fn load(&self, feed: Feed) -> bool {
        let ticket = self.store.begin(feed).await;
        let committed = match self.fetch(feed).await {
            Ok(data) => {
                let count = data.len();
                let committed = self.store.commit(ticket, data).await;
                if committed {
                    info!("loaded {} ({} records)", feed, count);
                } else {
                    debug!(
                        "discarding stale {} result (sequence {})",
                        feed, ticket.sequence
                    );
                }
                committed
            }
            Err(e) => {
                error!("error loading {}: {}", feed, e);
                false
            }
        };
        self.store.finish(ticket);
        committed
    }

    /// Starts a load in the background.
    pub fn spawn(&self, feed: Feed) -> JoinHandle<bool> {
        let loader = self.clone();
        tokio::spawn(async move { loader.load(feed).await })
    }

    async fn fetch(&self, feed: Feed) -> Result<FeedData, FeedError> {
        let data = match feed {
            Feed::Airports => {
                let text = self.source.fetch_feed(FeedKind::Airports).await?;
                FeedData::Airports(parse_airports(&text)?)
            }
            Feed::Metars => {
                let text = self.source.fetch_feed(FeedKind::Metars).await?;
                FeedData::Metars(parse_metars(&text)?)
            }
            Feed::Tafs => {
                // Both documents must arrive; either failing fails the load.
                let (tafs, names) = futures::try_join!(
                    self.source.fetch_feed(FeedKind::Tafs),
                    self.source.fetch_feed(FeedKind::StationNames),
                )?;
                let names = parse_station_names(&names)?;
                FeedData::Tafs(parse_tafs(&tafs, &names)?)
            }
            Feed::Sigmets => {
                let text = self.source.fetch_feed(FeedKind::Sigmets).await?;
                FeedData::Sigmets(parse_sigmets(&text, &self.domestic_firs)?)
            }
            Feed::Boundary => {
                let text = self.source.fetch_feed(FeedKind::Boundary).await?;
                FeedData::Boundary(parse_boundary(&text)?)
            }
            Feed::Winds => {
                let text = self.source.fetch_feed(FeedKind::Winds).await?;
                FeedData::Winds(parse_winds(&text)?)
            }
        };
        Ok(data)
    }
}
