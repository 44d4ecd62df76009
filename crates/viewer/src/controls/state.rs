use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wxmap_feeds::ForecastElement;

use super::{
    layers::{BaseMap, LayerId, LayerState},
    slider::{ForecastSlider, Playback, IMAGE_BOUNDS, MAX_INDEX},
};
use crate::store::Feed;

/// Everything the page can ask the viewer to do.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    LayerToggle { layer: LayerId, active: bool },
    SelectBaseMap { base_map: BaseMap },
    ForecastToggle { element: ForecastElement, active: bool },
    SliderStep { index: u8 },
    SliderBack,
    SliderForward,
    Play,
    Pause,
    PlayToggle,
    Tick,
}

/// Side effects requested by a state transition, run by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    LoadFeed(Feed),
    StartTicker,
    StopTicker,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    pub layers: LayerState,
    pub slider: ForecastSlider,
}

impl ViewerState {
    pub fn apply(mut self, command: Command) -> (Self, Vec<Effect>) {
        let mut effects = vec![];

        match command {
            Command::LayerToggle { layer, active } => {
                if self.layers.set(layer, active) && active {
                    match layer {
                        LayerId::Airports => effects.push(Effect::LoadFeed(Feed::Airports)),
                        LayerId::Sigmet => effects.push(Effect::LoadFeed(Feed::Sigmets)),
                        _ => {}
                    }
                }
            }
            Command::SelectBaseMap { base_map } => self.layers.base_map = base_map,
            Command::ForecastToggle {
                element,
                active: true,
            } => {
                if self.slider.pause() {
                    effects.push(Effect::StopTicker);
                }
                self.slider.select(element);
            }
            Command::ForecastToggle {
                element,
                active: false,
            } => {
                if self.slider.deselect(element) && self.slider.pause() {
                    effects.push(Effect::StopTicker);
                }
            }
            Command::SliderStep { index } => self.slider.step_to(index),
            Command::SliderBack => self.slider.back(),
            Command::SliderForward => self.slider.forward(),
            Command::Play => {
                if self.slider.play() {
                    effects.push(Effect::StartTicker);
                }
            }
            Command::Pause => {
                if self.slider.pause() {
                    effects.push(Effect::StopTicker);
                }
            }
            Command::PlayToggle => {
                let next = if self.slider.is_playing() {
                    Command::Pause
                } else {
                    Command::Play
                };
                return self.apply(next);
            }
            Command::Tick => {
                if self.slider.tick() {
                    effects.push(Effect::StopTicker);
                }
            }
        }

        (self, effects)
    }

    pub fn view(&self, loading: usize) -> StateView {
        let layers = LayerId::ALL
            .into_iter()
            .map(|layer| (layer.key(), self.layers.is_active(layer)))
            .collect();

        let raster = self.slider.element().zip(self.slider.raster_url()).map(
            |(element, url)| RasterView {
                url,
                opacity: element.raster().opacity,
                bounds: IMAGE_BOUNDS,
            },
        );

        StateView {
            base_map: self.layers.base_map,
            base_map_url: self.layers.base_map.tile_url(),
            layers,
            time_dimension_visible: self.layers.time_dimension_visible(),
            legends: LegendsView {
                metar: self.layers.is_active(LayerId::Metar),
                sigmet: self.layers.is_active(LayerId::Sigmet),
            },
            slider: SliderView {
                visible: self.slider.visible(),
                element: self.slider.element(),
                index: self.slider.index(),
                max_index: MAX_INDEX,
                hour: self.slider.hour(),
                playback: self.slider.playback(),
                caption: self.slider.caption(),
                raster,
            },
            loading,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StateView {
    pub base_map: BaseMap,
    pub base_map_url: &'static str,
    pub layers: BTreeMap<&'static str, bool>,
    pub time_dimension_visible: bool,
    pub legends: LegendsView,
    pub slider: SliderView,
    /// Feed loads currently in flight.
    pub loading: usize,
}

#[derive(Debug, Serialize)]
pub struct LegendsView {
    pub metar: bool,
    pub sigmet: bool,
}

#[derive(Debug, Serialize)]
pub struct SliderView {
    pub visible: bool,
    pub element: Option<ForecastElement>,
    pub index: u8,
    pub max_index: u8,
    pub hour: u32,
    pub playback: Playback,
    pub caption: Option<String>,
    pub raster: Option<RasterView>,
}

#[derive(Debug, Serialize)]
pub struct RasterView {
    pub url: String,
    pub opacity: f64,
    pub bounds: [[f64; 2]; 2],
}
