//! Latest committed records per feed.
//!
//! Every load takes a ticket with a per-feed sequence number when it starts.
//! A finished load only replaces the stored records if its sequence is newer
//! than the one already committed, so a slow response can never overwrite a
//! fresher one.

use serde::Serialize;
use serde_json::Value;
use std::{
    collections::HashMap,
    fmt,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};
use tokio::sync::RwLock;
use wxmap_feeds::{AirportRecord, MetarRecord, SigmetRecord, TafRecord};

/// Unit of loading: one or more feed documents that refresh together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feed {
    Airports,
    Metars,
    Tafs,
    Sigmets,
    Boundary,
    Winds,
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Feed::Airports => "airports",
            Feed::Metars => "metars",
            Feed::Tafs => "tafs",
            Feed::Sigmets => "sigmets",
            Feed::Boundary => "boundary",
            Feed::Winds => "winds",
        };
        write!(f, "{}", name)
    }
}

/// Parsed records for one feed, ready to commit.
#[derive(Debug, Clone)]
pub enum FeedData {
    Airports(Vec<AirportRecord>),
    Metars(Vec<MetarRecord>),
    Tafs(Vec<TafRecord>),
    Sigmets(Vec<SigmetRecord>),
    Boundary(Value),
    Winds(Value),
}

impl FeedData {
    pub fn feed(&self) -> Feed {
        match self {
            FeedData::Airports(_) => Feed::Airports,
            FeedData::Metars(_) => Feed::Metars,
            FeedData::Tafs(_) => Feed::Tafs,
            FeedData::Sigmets(_) => Feed::Sigmets,
            FeedData::Boundary(_) => Feed::Boundary,
            FeedData::Winds(_) => Feed::Winds,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FeedData::Airports(records) => records.len(),
            FeedData::Metars(records) => records.len(),
            FeedData::Tafs(records) => records.len(),
            FeedData::Sigmets(records) => records.len(),
            FeedData::Boundary(value) | FeedData::Winds(value) => {
                value.as_array().map(Vec::len).unwrap_or(1)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handed out when a load starts; presented again to commit its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub feed: Feed,
    pub sequence: u64,
}

/// A committed collection and the sequence of the load that produced it.
/// Sequence 0 means nothing has been committed yet.
#[derive(Debug)]
pub struct Committed<T> {
    pub sequence: u64,
    pub records: Arc<T>,
}

impl<T: Default> Default for Committed<T> {
    fn default() -> Self {
        Self {
            sequence: 0,
            records: Arc::new(T::default()),
        }
    }
}

impl<T> Clone for Committed<T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> Committed<T> {
    pub fn is_loaded(&self) -> bool {
        self.sequence > 0
    }
}

/// Point-in-time copy of every layer collection.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub airports: Committed<Vec<AirportRecord>>,
    pub metars: Committed<Vec<MetarRecord>>,
    pub tafs: Committed<Vec<TafRecord>>,
    pub sigmets: Committed<Vec<SigmetRecord>>,
    pub boundary: Committed<Option<Value>>,
    pub winds: Committed<Option<Value>>,
}

impl Snapshot {
    pub fn sequence(&self, feed: Feed) -> u64 {
        match feed {
            Feed::Airports => self.airports.sequence,
            Feed::Metars => self.metars.sequence,
            Feed::Tafs => self.tafs.sequence,
            Feed::Sigmets => self.sigmets.sequence,
            Feed::Boundary => self.boundary.sequence,
            Feed::Winds => self.winds.sequence,
        }
    }
}

#[derive(Default)]
struct Inner {
    issued: HashMap<Feed, u64>,
    committed: Snapshot,
}

#[derive(Default)]
pub struct LayerStore {
    inner: RwLock<Inner>,
    loading: AtomicUsize,
}

impl LayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load: issues the next sequence for `feed` and counts it as
    /// in flight until `finish` is called.
    pub async fn begin(&self, feed: Feed) -> Ticket {
        let mut inner = self.inner.write().await;
        let sequence = inner.issued.entry(feed).or_insert(0);
        *sequence += 1;
        self.loading.fetch_add(1, Ordering::SeqCst);
        Ticket {
            feed,
            sequence: *sequence,
        }
    }

    pub fn finish(&self, _ticket: Ticket) {
        self.loading.fetch_sub(1, Ordering::SeqCst);
    }

    /// Replaces the feed's records if the ticket is newer than what is
    /// stored. Returns whether the data was committed.
    pub async fn commit(&self, ticket: Ticket, data: FeedData) -> bool {
        if ticket.feed != data.feed() {
            return false;
        }
        let mut inner = self.inner.write().await;
        if ticket.sequence <= inner.committed.sequence(ticket.feed) {
            return false;
        }

        let sequence = ticket.sequence;
        let committed = &mut inner.committed;
        match data {
            FeedData::Airports(records) => committed.airports = fresh(sequence, records),
            FeedData::Metars(records) => committed.metars = fresh(sequence, records),
            FeedData::Tafs(records) => committed.tafs = fresh(sequence, records),
            FeedData::Sigmets(records) => committed.sigmets = fresh(sequence, records),
            FeedData::Boundary(value) => committed.boundary = fresh(sequence, Some(value)),
            FeedData::Winds(value) => committed.winds = fresh(sequence, Some(value)),
        }
        true
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.inner.read().await.committed.clone()
    }

    pub fn loading(&self) -> usize {
        self.loading.load(Ordering::SeqCst)
    }
}

fn fresh<T>(sequence: u64, records: T) -> Committed<T> {
    Committed {
        sequence,
        records: Arc::new(records),
    }
}
