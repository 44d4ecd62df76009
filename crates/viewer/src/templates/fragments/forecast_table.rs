use maud::{html, Markup};
use wxmap_feeds::{
    format::{format_forecast_time, visibility_severity, weather_style, wind_severity},
    ForecastPeriod, TafRecord, NOT_AVAILABLE,
};

/// Visibility assumed for a change group that reports none.
pub const DEFAULT_VISIBILITY_M: i64 = 10_000;

fn knots(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn forecast_row(period: &ForecastPeriod) -> Markup {
    let wind_style = wind_severity(period.wind_speed_kt.unwrap_or(0.0)).style();
    let gust_style = wind_severity(period.wind_gust_kt.unwrap_or(0.0)).style();
    let visibility = period.visibility_m.unwrap_or(DEFAULT_VISIBILITY_M);
    let visibility_style = visibility_severity(visibility as f64).style();

    html! {
        tr {
            td { (format_forecast_time(&period.time_from)) }
            td { (format_forecast_time(&period.time_to)) }
            td { (period.change) }
            td style=(wind_style) {
                (period.wind_dir) "°/ "
                span style=(gust_style) {
                    (knots(period.wind_speed_kt)) " / G " (knots(period.wind_gust_kt))
                }
            }
            td style=(visibility_style) { (visibility) "m" }
            td style=(weather_style(&period.weather)) { (period.weather) }
        }
    }
}

/// Compact per-station forecast table. Only change groups with both a
/// start and an end time are listed.
pub fn forecast_table(taf: &TafRecord) -> Markup {
    let periods: Vec<&ForecastPeriod> = taf
        .periods
        .iter()
        .filter(|p| p.time_from != NOT_AVAILABLE && p.time_to != NOT_AVAILABLE)
        .collect();

    html! {
        @if periods.is_empty() {
            p { "No forecast data available for this station." }
        } @else {
            div style="width: 100%; max-height: 200px; overflow-y: auto;" {
                table style="width: 100%; border-collapse: collapse;" {
                    thead {
                        tr style="background-color: #f2f2f2;" {
                            th { "Time From" }
                            th { "Time To" }
                            th { "Change" }
                            th { "Wind (kt)" }
                            th { "Visibility" }
                            th { "Weather" }
                        }
                    }
                    tbody {
                        @for period in periods {
                            (forecast_row(period))
                        }
                    }
                }
            }
        }
    }
}
