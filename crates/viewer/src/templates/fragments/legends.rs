use maud::{html, Markup};
use wxmap_feeds::{FlightCategory, SigmetHazard, SigmetRecord};

/// One legend line per distinct hazard code, in the order first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardEntry {
    pub code: String,
    pub label: String,
    pub color: &'static str,
    pub icon: &'static str,
}

pub fn hazard_entries(sigmets: &[SigmetRecord]) -> Vec<HazardEntry> {
    let mut entries: Vec<HazardEntry> = vec![];
    for sigmet in sigmets {
        if entries.iter().any(|e| e.code == sigmet.hazard_code) {
            continue;
        }
        let hazard: SigmetHazard = sigmet.hazard;
        entries.push(HazardEntry {
            code: sigmet.hazard_code.clone(),
            label: hazard
                .label()
                .map(str::to_string)
                .unwrap_or_else(|| sigmet.hazard_code.clone()),
            color: hazard.color(),
            icon: hazard.icon(),
        });
    }
    entries
}

pub fn metar_legend() -> Markup {
    let categories = [
        FlightCategory::Vfr,
        FlightCategory::Mvfr,
        FlightCategory::Ifr,
        FlightCategory::Lifr,
    ];
    html! {
        div class="flight-category-legend leaflet-control" {
            strong { "Flight Category" }
            @for category in categories {
                div {
                    span style=(format!("color:{}", category.color())) { "■" }
                    " " (category.label())
                }
            }
        }
    }
}

/// `None` means the SIGMET feed has not been loaded successfully.
pub fn sigmet_legend(sigmets: Option<&[SigmetRecord]>) -> Markup {
    html! {
        div class="sigmet-legend leaflet-control" {
            @match sigmets {
                None => {
                    strong { "Legend unavailable" }
                },
                Some(sigmets) => {
                    strong { "Hazards" }
                    br;
                    @let entries = hazard_entries(sigmets);
                    @if entries.is_empty() {
                        div style="font-size:10px;" { "No active SIGMETs" }
                    }
                    @for entry in &entries {
                        div style="margin-bottom:6px; display:flex; align-items:center;" {
                            img src=(format!("/static/icons/{}", entry.icon)) width="16" height="16" style="margin-right:6px;";
                            span style=(format!("color:{}; font-weight:bold;", entry.color)) {
                                (entry.label) " (" (entry.code) ")"
                            }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxmap_feeds::parse_sigmets;

    const FEED: &str = r#"[
        {"geom": "AREA", "hazard": "TURB", "coords": [{"lat": 1, "lon": 1}]},
        {"geom": "AREA", "hazard": "TS", "coords": [{"lat": 1, "lon": 1}]},
        {"geom": "AREA", "hazard": "TURB", "coords": [{"lat": 1, "lon": 1}]},
        {"geom": "AREA", "hazard": "DS", "coords": [{"lat": 1, "lon": 1}]}
    ]"#;

    #[test]
    fn hazards_are_distinct_in_first_seen_order() {
        let sigmets = parse_sigmets(FEED, &[]).unwrap();
        let entries = hazard_entries(&sigmets);
        let codes: Vec<&str> = entries.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["TURB", "TS", "DS"]);
        assert_eq!(entries[0].label, "Turbulence");
        assert_eq!(entries[2].label, "DS");
        assert_eq!(entries[2].color, "brown");
    }

    #[test]
    fn sigmet_legend_states() {
        let sigmets = parse_sigmets(FEED, &[]).unwrap();
        let html = sigmet_legend(Some(sigmets.as_slice())).into_string();
        assert!(html.contains("Thunderstorm (TS)"));
        assert!(!html.contains("No active SIGMETs"));

        let empty = sigmet_legend(Some(&[][..])).into_string();
        assert!(empty.contains("No active SIGMETs"));

        let missing = sigmet_legend(None).into_string();
        assert!(missing.contains("Legend unavailable"));
    }

    #[test]
    fn metar_legend_lists_four_categories() {
        let html = metar_legend().into_string();
        for label in ["VFR", "MVFR", "IFR", "LIFR"] {
            assert!(html.contains(&format!(" {}</div>", label)));
        }
        assert!(html.contains("color:#aa00aa"));
    }
}
