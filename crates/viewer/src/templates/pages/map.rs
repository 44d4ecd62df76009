use maud::{html, Markup};
use wxmap_feeds::ForecastElement;

use crate::{
    controls::{BaseMap, LayerId, ViewerState},
    templates::{
        fragments::slider_control,
        layouts::{base, PageConfig},
    },
};

pub struct MapPageData<'a> {
    pub state: &'a ViewerState,
    pub loading: usize,
}

pub fn map_page(api_base: &str, data: &MapPageData) -> Markup {
    let config = PageConfig {
        title: "Aviation Weather Map",
        api_base,
    };

    base(&config, map_content(data))
}

fn map_content(data: &MapPageData) -> Markup {
    let state = data.state;
    html! {
        div id="map" {}

        aside id="sidePanel" class="side-panel" {
            section class="panel-section" {
                h3 { "Base map" }
                @for base_map in BaseMap::ALL {
                    label class="panel-option" {
                        input type="radio" name="baseMap" value=(serde_key(base_map))
                            checked[state.layers.base_map == base_map];
                        " " (base_map.label())
                    }
                }
            }

            section class="panel-section" {
                h3 { "Layers" }
                @for layer in LayerId::ALL {
                    label class="panel-option" {
                        input type="checkbox" class="layer-toggle" data-layer=(layer.key())
                            checked[state.layers.is_active(layer)];
                        " " (layer.label())
                    }
                }
            }

            section class="panel-section" {
                h3 { "Forecast" }
                @for element in ForecastElement::ALL {
                    label class="panel-option" {
                        input type="checkbox" class="forecast-toggle" data-element=(element.key())
                            checked[state.slider.element() == Some(element)];
                        " " (element.raster().name)
                    }
                }
            }
        }

        div id="metarLegend" class="legend-slot" hidden[!state.layers.is_active(LayerId::Metar)] {}
        div id="sigmetLegend" class="legend-slot" hidden[!state.layers.is_active(LayerId::Sigmet)] {}

        div id="timeDimensionControl" class="time-dimension leaflet-control"
            hidden[!state.layers.time_dimension_visible()] {
            "Satellite / radar time"
        }

        (slider_control(&state.slider))

        div id="loadingIndicator" class="loading-indicator" hidden[data.loading == 0] {
            "Loading…"
        }
    }
}

fn serde_key(base_map: BaseMap) -> &'static str {
    match base_map {
        BaseMap::Dark => "dark",
        BaseMap::Light => "light",
    }
}
