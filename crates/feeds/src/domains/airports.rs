use log::debug;
use serde::Deserialize;

use super::{coordinate, csv_reader, non_empty};
use crate::FeedError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AirportRow {
    latitude: Option<String>,
    longitude: Option<String>,
    stnid: Option<String>,
    stn: Option<String>,
    icao: Option<String>,
}

/// One airport from the airport list.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportRecord {
    pub station_id: String,
    pub icao: Option<String>,
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl AirportRow {
    fn into_record(self) -> Option<AirportRecord> {
        let latitude = coordinate(self.latitude.as_deref())?;
        let longitude = coordinate(self.longitude.as_deref())?;
        let station_id = non_empty(self.stnid)?;
        Some(AirportRecord {
            station_id,
            icao: non_empty(self.icao),
            name: non_empty(self.stn),
            latitude,
            longitude,
        })
    }
}

/// Parses the airport CSV (`latitude, longitude, stnid, stn, icao`).
/// Rows without coordinates or a station id are skipped.
pub fn parse_airports(text: &str) -> Result<Vec<AirportRecord>, FeedError> {
    let mut reader = csv_reader(text);
    reader.headers()?;

    let mut airports = vec![];
    for row in reader.deserialize::<AirportRow>() {
        match row {
            Ok(row) => {
                if let Some(airport) = row.into_record() {
                    airports.push(airport);
                }
            }
            Err(e) => debug!("skipping unreadable airport row: {}", e),
        }
    }
    Ok(airports)
}
