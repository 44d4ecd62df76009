use serde::Serialize;
use wxmap_feeds::ForecastElement;

pub const MAX_INDEX: u8 = 40;
pub const HOURS_PER_STEP: u32 = 6;
/// Index a freshly selected element opens at (12 h).
pub const DEFAULT_INDEX: u8 = 2;

/// Geographic extent every forecast raster is drawn over.
pub const IMAGE_BOUNDS: [[f64; 2]; 2] = [[-7.75, 30.0], [47.75, 130.0]];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Playback {
    #[default]
    Paused,
    Playing,
}

pub fn hour_for(index: u8) -> u32 {
    u32::from(index) * HOURS_PER_STEP
}

/// `"{name} Day {d} {hh}:00 Z"`
pub fn caption(name: &str, hour: u32) -> String {
    format!("{} Day {} {:02}:00 Z", name, hour / 24 + 1, hour % 24)
}

/// Relative URL of the raster for an element at a forecast hour.
pub fn raster_url(element: ForecastElement, hour: u32) -> String {
    let raster = element.raster();
    format!("/images/{}/{}h_{}", raster.folder, hour, raster.suffix)
}

/// Forecast element selection and hour scrubbing. At most one element is
/// selected; the slider is only shown while one is.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSlider {
    element: Option<ForecastElement>,
    index: u8,
    playback: Playback,
}

impl Default for ForecastSlider {
    fn default() -> Self {
        Self {
            element: None,
            index: DEFAULT_INDEX,
            playback: Playback::Paused,
        }
    }
}

impl ForecastSlider {
    pub fn element(&self) -> Option<ForecastElement> {
        self.element
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn hour(&self) -> u32 {
        hour_for(self.index)
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == Playback::Playing
    }

    pub fn visible(&self) -> bool {
        self.element.is_some()
    }

    pub fn caption(&self) -> Option<String> {
        self.element
            .map(|element| caption(element.raster().name, self.hour()))
    }

    pub fn raster_url(&self) -> Option<String> {
        self.element.map(|element| raster_url(element, self.hour()))
    }

    /// Returns true if playback was running and is now stopped.
    pub fn pause(&mut self) -> bool {
        let was_playing = self.is_playing();
        self.playback = Playback::Paused;
        was_playing
    }

    /// Returns true if playback started. Without a selected element, or when
    /// already playing, nothing happens.
    pub fn play(&mut self) -> bool {
        if self.element.is_none() || self.is_playing() {
            return false;
        }
        self.playback = Playback::Playing;
        true
    }

    /// Selecting replaces any previous element and reopens at 12 h.
    pub fn select(&mut self, element: ForecastElement) {
        self.element = Some(element);
        self.index = DEFAULT_INDEX;
    }

    /// Deselecting an element that is not the selected one is a no-op.
    pub fn deselect(&mut self, element: ForecastElement) -> bool {
        if self.element != Some(element) {
            return false;
        }
        self.element = None;
        true
    }

    pub fn step_to(&mut self, index: u8) {
        self.index = index.min(MAX_INDEX);
    }

    pub fn back(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn forward(&mut self) {
        self.step_to(self.index.saturating_add(1));
    }

    /// One playback step. Returns true when playback stopped on this tick:
    /// either the slider was already at the end, or it just reached it.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        if self.index < MAX_INDEX {
            self.index += 1;
        }
        if self.index >= MAX_INDEX {
            self.pause();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(element: ForecastElement) -> ForecastSlider {
        let mut slider = ForecastSlider::default();
        slider.select(element);
        slider
    }

    #[test]
    fn index_maps_to_six_hour_steps() {
        assert_eq!(hour_for(0), 0);
        assert_eq!(hour_for(2), 12);
        assert_eq!(hour_for(MAX_INDEX), 240);
    }

    #[test]
    fn captions_roll_over_days() {
        assert_eq!(caption("Rain", 0), "Rain Day 1 00:00 Z");
        assert_eq!(caption("Rain", 30), "Rain Day 2 06:00 Z");
        assert_eq!(caption("PM10", 240), "PM10 Day 11 00:00 Z");
    }

    #[test]
    fn raster_url_uses_folder_hours_and_suffix() {
        let slider = selected(ForecastElement::Rain);
        assert_eq!(slider.raster_url().as_deref(), Some("/images/rain/12h_raint.png"));
        assert_eq!(
            raster_url(ForecastElement::CatFl300, 36),
            "/images/turbulence/36h_300hPa_turbulence.png"
        );
        assert_eq!(ForecastSlider::default().raster_url(), None);
    }

    #[test]
    fn steps_stay_in_bounds() {
        let mut slider = selected(ForecastElement::Clouds);
        slider.step_to(0);
        slider.back();
        assert_eq!(slider.index(), 0);
        slider.step_to(200);
        assert_eq!(slider.index(), MAX_INDEX);
        slider.forward();
        assert_eq!(slider.index(), MAX_INDEX);
    }

    #[test]
    fn play_requires_an_element() {
        let mut slider = ForecastSlider::default();
        assert!(!slider.play());
        assert_eq!(slider.playback(), Playback::Paused);

        let mut slider = selected(ForecastElement::Rain);
        assert!(slider.play());
        assert!(!slider.play());
        assert!(slider.is_playing());
    }

    #[test]
    fn playback_stops_on_reaching_the_end() {
        let mut slider = selected(ForecastElement::Rain);
        slider.step_to(MAX_INDEX - 2);
        slider.play();

        assert!(!slider.tick());
        assert_eq!(slider.index(), MAX_INDEX - 1);
        assert!(slider.tick());
        assert_eq!(slider.index(), MAX_INDEX);
        assert!(!slider.is_playing());
    }

    #[test]
    fn tick_at_end_pauses_and_stays() {
        let mut slider = selected(ForecastElement::Rain);
        slider.step_to(MAX_INDEX);
        slider.play();
        assert!(slider.tick());
        assert_eq!(slider.index(), MAX_INDEX);
        assert_eq!(slider.hour(), 240);
        assert!(!slider.is_playing());
    }

    #[test]
    fn tick_while_paused_does_nothing() {
        let mut slider = selected(ForecastElement::Rain);
        assert!(!slider.tick());
        assert_eq!(slider.index(), DEFAULT_INDEX);
    }
}
