/// Failure to fetch or decode one whole feed document.
///
/// Row-level problems (a missing coordinate, an unparseable number) never
/// surface here; parsers drop those rows and keep going.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("error sending request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("feed {path} responded with status {status}")]
    Status { path: String, status: u16 },
    #[error("error reading feed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse csv feed: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to parse xml feed: {0}")]
    Xml(#[from] serde_xml_rs::Error),
    #[error("failed to parse json feed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid feed document: {0}")]
    Invalid(String),
}
