use wxmap_feeds::{any_domestic, SigmetRecord};

use super::{Annotation, DivIcon, PathStyle, Popup, Position};
use crate::templates::fragments::{no_sigmet_notice, sigmet_label, sigmet_popup};

/// Where the "no SIGMET" notice is pinned, roughly the middle of India.
pub const NO_SIGMET_POSITION: Position = Position(22.5, 82.0);

/// A polygon plus a centroid label per SIGMET. When no record falls in a
/// domestic FIR and the layer is on the map, a single notice is added.
pub fn sigmet_annotations(sigmets: &[SigmetRecord], layer_active: bool) -> Vec<Annotation> {
    let mut annotations = Vec::with_capacity(sigmets.len() * 2 + 1);

    for sigmet in sigmets {
        let color = sigmet.hazard.color().to_string();
        annotations.push(Annotation::Polygon {
            vertices: sigmet.vertices.iter().copied().map(Position::from).collect(),
            style: PathStyle {
                color,
                weight: 1.0,
                fill_opacity: 0.2,
                ..Default::default()
            },
            popup: Some(Popup::new(sigmet_popup(sigmet).into_string())),
        });
        annotations.push(Annotation::DivMarker {
            position: sigmet.centroid().into(),
            icon: DivIcon {
                class_name: Some("sigmet-icon-label".to_string()),
                html: sigmet_label(sigmet).into_string(),
                icon_size: Some([20, 20]),
                icon_anchor: Some([10, 10]),
            },
            title: Some(sigmet.title()),
            interactive: true,
        });
    }

    if layer_active && !any_domestic(sigmets) {
        annotations.push(Annotation::DivMarker {
            position: NO_SIGMET_POSITION,
            icon: DivIcon {
                html: no_sigmet_notice().into_string(),
                ..Default::default()
            },
            title: None,
            interactive: true,
        });
    }

    annotations
}
