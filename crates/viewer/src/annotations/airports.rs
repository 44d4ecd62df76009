use wxmap_feeds::AirportRecord;

use super::{Annotation, DivIcon, PathStyle, Popup, Position};
use crate::templates::fragments::airport_popup;

/// Two annotations per airport: a non-interactive id label and a tiny dot
/// carrying the popup.
pub fn airport_annotations(airports: &[AirportRecord]) -> Vec<Annotation> {
    airports
        .iter()
        .flat_map(|airport| {
            let position = Position(airport.latitude, airport.longitude);
            [
                Annotation::DivMarker {
                    position,
                    icon: DivIcon {
                        class_name: Some("station-label".to_string()),
                        html: maud::html! { (airport.station_id) }.into_string(),
                        icon_size: Some([100, 20]),
                        icon_anchor: Some([15, 10]),
                    },
                    title: None,
                    interactive: false,
                },
                Annotation::CircleMarker {
                    position,
                    style: PathStyle {
                        radius: Some(0.1),
                        color: "#fff".to_string(),
                        fill_color: Some("#0078d4".to_string()),
                        weight: 0.1,
                        opacity: Some(1.0),
                        fill_opacity: 0.8,
                        class_name: Some("airport-marker".to_string()),
                    },
                    popup: Some(Popup::new(airport_popup(airport).into_string())),
                },
            ]
        })
        .collect()
}
