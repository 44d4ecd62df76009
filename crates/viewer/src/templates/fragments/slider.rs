use maud::{html, Markup};

use crate::controls::{ForecastSlider, MAX_INDEX};

/// Forecast-hour control. Hidden until an element is selected; the page
/// script keeps it in sync with `/state` afterwards.
pub fn slider_control(slider: &ForecastSlider) -> Markup {
    let play_label = if slider.is_playing() { "❚❚" } else { "▶" };
    html! {
        div id="timeSliderControl" class="time-slider leaflet-control" hidden[!slider.visible()] {
            div class="time-slider-buttons" {
                button id="sliderBack" type="button" title="Back" { "◀◀" }
                button id="sliderPlay" type="button" title="Play/Pause" { (play_label) }
                button id="sliderForward" type="button" title="Forward" { "▶▶" }
            }
            input id="timeSlider" type="range" min="0" max=(MAX_INDEX) step="1" value=(slider.index());
            span id="sliderCaption" class="time-slider-caption" {
                (slider.caption().unwrap_or_default())
            }
        }
    }
}
