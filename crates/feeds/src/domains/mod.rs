mod airports;
mod boundary;
mod metars;
mod sigmets;
mod tafs;
mod winds;

pub use airports::*;
pub use boundary::*;
pub use metars::*;
pub use sigmets::*;
pub use tafs::*;
pub use winds::*;

/// Trims a raw field and treats blank text as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a latitude/longitude field; anything that is not a finite number is absent.
pub(crate) fn coordinate(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parses a numeric field, tolerating the `10+` style used for visibility.
pub(crate) fn number(value: Option<&str>) -> Option<f64> {
    value
        .map(|v| v.trim().trim_end_matches('+'))
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

pub(crate) fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes())
}
