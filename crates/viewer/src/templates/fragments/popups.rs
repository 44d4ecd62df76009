use maud::{html, Markup};
use wxmap_feeds::{
    format::{format_date_time, format_epoch, visibility_meters, weather_style},
    AirportRecord, MetarRecord, SigmetHazard, SigmetRecord, SkyLayer, TafRecord, NOT_AVAILABLE,
};

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

/// Present cloud slots as `"SCT 2000 BKN 8000"`, "N/A" when none reported.
pub fn cloud_summary(layers: &[SkyLayer]) -> String {
    let parts: Vec<String> = layers
        .iter()
        .filter(|layer| !layer.is_empty())
        .map(|layer| {
            [layer.cover.as_deref(), layer.base_ft_agl.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    if parts.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        parts.join(" ")
    }
}

pub fn airport_popup(airport: &AirportRecord) -> Markup {
    html! {
        strong { (or_na(airport.name.as_deref())) }
        br;
        b { "ICAO:" } " " (or_na(airport.icao.as_deref()))
        br;
        b { "Station ID:" } " " (airport.station_id)
    }
}

pub fn metar_popup(metar: &MetarRecord) -> Markup {
    let category = metar.flight_category;
    let visibility = metar
        .visibility_statute_mi
        .map(|mi| format!("{}m", visibility_meters(mi)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    html! {
        strong { (or_na(metar.station_id.as_deref())) }
        br;
        (metar.raw_text)
        hr;
        b { "Category:" } " "
        span style=(format!("color:{}", category.color())) { (category.label()) }
        br;
        b { "Time:" } " " (format_date_time(metar.observation_time.as_deref().unwrap_or_default()))
        br;
        b { "Wind:" } " "
        (or_na(metar.wind_dir_degrees.as_deref())) "° / "
        (or_na(metar.wind_speed_kt.as_deref())) " kt"
        br;
        b { "Visibility:" } " " (visibility)
        br;
        b { "Weather:" } " " (or_na(metar.wx_string.as_deref()))
        br;
        b { "Clouds:" } " " (cloud_summary(&metar.sky))
        br;
        b { "Temp/Dew Point:" } " "
        (or_na(metar.temp_c.as_deref())) "°C / "
        (or_na(metar.dewpoint_c.as_deref())) " °C"
    }
}

/// Popup on the weather icon: condition plus the first three cloud slots.
pub fn weather_popup(metar: &MetarRecord) -> Markup {
    html! {
        strong { (or_na(metar.station_id.as_deref())) }
        hr;
        b { "Weather:" } " " (metar.display_condition())
        br;
        b { "Clouds:" } " " (cloud_summary(&metar.sky[..3]))
    }
}

pub fn taf_popup(taf: &TafRecord) -> Markup {
    html! {
        h3 { "Station: " (taf.station_id) }
        h3 { "Station Name: " (taf.station_name) }
        p {
            "Valid: " (format_date_time(&taf.valid_time_from))
            " to " (format_date_time(&taf.valid_time_to))
        }
        div class="raw-text-container" { (taf.raw_text) }
        h4 { "Forecast Details" }
        table {
            thead {
                tr {
                    th { "Time From" }
                    th { "Time To" }
                    th { "Change" }
                    th { "Wind (kt)" }
                    th { "Weather" }
                    th { "Visibility (m)" }
                }
            }
            tbody {
                @for period in &taf.periods {
                    tr {
                        td { (format_date_time(&period.time_from)) }
                        td { (format_date_time(&period.time_to)) }
                        td { (period.change) }
                        td { (period.wind) }
                        td style=(weather_style(&period.weather)) { (period.weather) }
                        td { (period.visibility()) }
                    }
                }
                @if taf.periods.is_empty() {
                    tr {
                        td colspan="6" { "No forecast data available for this station." }
                    }
                }
            }
        }
    }
}

pub fn sigmet_popup(sigmet: &SigmetRecord) -> Markup {
    html! {
        strong { (sigmet.title()) }
        br;
        strong { "FIR:" } " " (sigmet.fir_name)
        br;
        strong { "Valid:" }
        br;
        (format_epoch(sigmet.valid_from)) "Z → " (format_epoch(sigmet.valid_to)) "Z"
        br;
        @match sigmet.hazard {
            SigmetHazard::Thunderstorm => {
                strong { "Thunderstorm Type:" } " " (sigmet.qualifier) br;
                strong { "Movement:" } " " (sigmet.movement()) br;
                strong { "Trend:" } " " (sigmet.trend.label()) br;
            }
            SigmetHazard::Icing | SigmetHazard::Turbulence => {
                strong { "Severity:" } " " (sigmet.qualifier) br;
                strong { "Trend:" } " " (sigmet.trend.label()) br;
            }
            _ => {}
        }
        details {
            summary { "Raw SIGMET" }
            pre { (or_na(sigmet.raw_text.as_deref())) }
        }
    }
}

/// Hazard icon with the qualifier underneath, drawn at the polygon centroid.
pub fn sigmet_label(sigmet: &SigmetRecord) -> Markup {
    html! {
        div style="text-align:center;" {
            img src=(format!("/static/icons/{}", sigmet.hazard.icon())) width="16" height="16";
            div style=(format!(
                "font-size:10px; font-weight:bold; color:{}; text-shadow:1px 1px 2px #fff;",
                sigmet.hazard.color()
            )) {
                (sigmet.qualifier)
            }
        }
    }
}

pub fn no_sigmet_notice() -> Markup {
    html! {
        div style="font-weight:bold; background:white; padding:6px 12px; border-radius:5px; box-shadow:0 0 6px #888;" {
            "No SIGMET found over India"
        }
    }
}
