//! Pure conversions from raw feed values to display strings and colors.

use std::fmt;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};

use crate::tables::weather_icon_file;

pub const METERS_PER_STATUTE_MILE: f64 = 1609.34;

/// Placeholder for any missing display value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Sky condition summarised from the reported cloud layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyCondition {
    Overcast,
    Cloudy,
    PartlyCloudy,
    Fair,
    ClearFine,
}

impl SkyCondition {
    pub fn label(&self) -> &'static str {
        match self {
            SkyCondition::Overcast => "OVC",
            SkyCondition::Cloudy => "CLOUDY",
            SkyCondition::PartlyCloudy => "PCLOUDY",
            SkyCondition::Fair => "FAIR",
            SkyCondition::ClearFine => "CLR/FINE",
        }
    }
}

impl fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies the first three cover slots. CAVOK in the raw report wins
/// over anything the layers say; two BKN layers count as overcast.
pub fn sky_cover<'a, I>(raw_text: &str, covers: I) -> SkyCondition
where
    I: IntoIterator<Item = &'a str>,
{
    if raw_text.contains("CAVOK") {
        return SkyCondition::ClearFine;
    }
    let covers: Vec<&str> = covers
        .into_iter()
        .take(3)
        .filter(|c| !c.is_empty())
        .collect();

    if covers.iter().filter(|c| **c == "BKN").count() >= 2 {
        return SkyCondition::Overcast;
    }
    if covers.contains(&"OVC") {
        SkyCondition::Overcast
    } else if covers.contains(&"BKN") {
        SkyCondition::Cloudy
    } else if covers.contains(&"SCT") {
        SkyCondition::PartlyCloudy
    } else if covers.contains(&"FEW") {
        SkyCondition::Fair
    } else {
        SkyCondition::ClearFine
    }
}

/// Relative URL of the icon for a weather string or sky label.
pub fn weather_icon_url(condition: &str) -> String {
    format!("/static/icon/{}", weather_icon_file(condition))
}

fn parse_feed_time(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339)
        .ok()
        .or_else(|| {
            PrimitiveDateTime::parse(
                value,
                format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
            )
            .ok()
            .map(PrimitiveDateTime::assume_utc)
        })
        .map(|t| t.to_offset(UtcOffset::UTC))
}

/// `dd/mm/yyyy hh:mm UTC`, used in general popups. Empty input is "N/A";
/// input that is not a timestamp is shown as-is.
pub fn format_date_time(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    parse_feed_time(value)
        .and_then(|t| {
            t.format(format_description!(
                "[day]/[month]/[year] [hour]:[minute] UTC"
            ))
            .ok()
        })
        .unwrap_or_else(|| value.to_string())
}

/// `dd-Mon-hh:00Z`, used in compact forecast-table cells.
pub fn format_forecast_time(value: &str) -> String {
    parse_feed_time(value.trim())
        .and_then(|t| {
            t.format(format_description!("[day]-[month repr:short]-[hour]:00Z"))
                .ok()
        })
        .unwrap_or_else(|| value.to_string())
}

/// `dd Mon yyyy hh:mm` for SIGMET validity epochs; zero or absent is "N/A".
pub fn format_epoch(unix: Option<i64>) -> String {
    unix.filter(|secs| *secs != 0)
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .and_then(|t| {
            t.format(format_description!(
                "[day] [month repr:short] [year] [hour]:[minute]"
            ))
            .ok()
        })
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Statute miles to whole meters.
pub fn visibility_meters(statute_miles: f64) -> i64 {
    (statute_miles * METERS_PER_STATUTE_MILE).round() as i64
}

/// Severity band used to color wind, gust and visibility cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Caution,
    Severe,
}

impl Severity {
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Severity::Normal => None,
            Severity::Caution => Some("orange"),
            Severity::Severe => Some("red"),
        }
    }

    /// Inline style for a table cell; empty for normal values.
    pub fn style(&self) -> String {
        self.color()
            .map(|c| format!("color: {};", c))
            .unwrap_or_default()
    }
}

pub fn wind_severity(knots: f64) -> Severity {
    if knots >= 30.0 {
        Severity::Severe
    } else if knots >= 20.0 {
        Severity::Caution
    } else {
        Severity::Normal
    }
}

pub fn visibility_severity(meters: f64) -> Severity {
    if meters < 2000.0 {
        Severity::Severe
    } else if meters < 5000.0 {
        Severity::Caution
    } else {
        Severity::Normal
    }
}

/// Color for a weather string; the first matching hazard token wins.
pub fn weather_color(wx: &str) -> Option<&'static str> {
    const TOKENS: [(&[&str], &str); 4] = [
        (&["TS"], "red"),
        (&["RA"], "blue"),
        (&["BR", "FG"], "gray"),
        (&["HZ"], "orange"),
    ];
    TOKENS
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| wx.contains(n)))
        .map(|(_, color)| *color)
}

pub fn weather_style(wx: &str) -> String {
    weather_color(wx)
        .map(|c| format!("color: {};", c))
        .unwrap_or_default()
}
