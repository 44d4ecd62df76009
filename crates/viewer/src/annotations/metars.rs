use wxmap_feeds::{format::weather_icon_url, MetarRecord};

use super::{Annotation, ImageIcon, PathStyle, Popup, Position};
use crate::templates::fragments::{metar_popup, weather_popup};

/// Flight-category dots for the METAR layer, one per record.
pub fn metar_markers(metars: &[MetarRecord]) -> Vec<Annotation> {
    metars
        .iter()
        .map(|metar| Annotation::CircleMarker {
            position: Position(metar.latitude, metar.longitude),
            style: PathStyle {
                radius: Some(3.0),
                color: "#000".to_string(),
                fill_color: Some(metar.flight_category.color().to_string()),
                weight: 1.0,
                opacity: Some(1.0),
                fill_opacity: 0.8,
                class_name: None,
            },
            popup: Some(Popup::new(metar_popup(metar).into_string())),
        })
        .collect()
}

/// Weather icons for the Weather layer, one per record.
pub fn weather_markers(metars: &[MetarRecord]) -> Vec<Annotation> {
    metars
        .iter()
        .map(|metar| Annotation::IconMarker {
            position: Position(metar.latitude, metar.longitude),
            icon: ImageIcon {
                icon_url: weather_icon_url(&metar.display_condition()),
                icon_size: [18, 18],
            },
            popup: Some(Popup::new(weather_popup(metar).into_string())),
        })
        .collect()
}
