use wxmap_feeds::TafRecord;

use super::{Annotation, PathStyle, Popup, Position};
use crate::templates::fragments::taf_popup;

/// Widest a TAF popup may grow; the forecast table needs the room.
pub const TAF_POPUP_MAX_WIDTH: u32 = 700;

pub fn taf_markers(tafs: &[TafRecord]) -> Vec<Annotation> {
    tafs.iter()
        .map(|taf| Annotation::CircleMarker {
            position: Position(taf.latitude, taf.longitude),
            style: PathStyle {
                radius: Some(4.0),
                color: "#000".to_string(),
                fill_color: Some("#800080".to_string()),
                weight: 1.0,
                opacity: Some(1.0),
                fill_opacity: 0.8,
                class_name: None,
            },
            popup: Some(Popup {
                html: taf_popup(taf).into_string(),
                max_width: Some(TAF_POPUP_MAX_WIDTH),
            }),
        })
        .collect()
}
