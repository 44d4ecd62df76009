//! Fixed lookup tables: weather codes to icons, categories and hazards to
//! colors and labels, forecast elements to raster locations.
//!
//! Every table is a `match` with an explicit fallback arm.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon shown when a weather code has no entry of its own.
pub const CLEAR_ICON: &str = "clear-night.svg";

/// Icon file for a METAR weather string or sky-cover label.
pub fn weather_icon_file(condition: &str) -> &'static str {
    match condition {
        "TS" | "TS HZ" | "TSRA" | "+TSRA" | "-TSRA" | "VCTS" => "thunderstorms.svg",
        "DZ" | "+DZ" | "-DZ" | "-DZ BR" | "DZ VCSH" | "-RA DZ" | "-RA BR" | "VCRA" => {
            "rainy-1.svg"
        }
        "RA" | "-RA" | "+RA BR" | "RA BR" | "+RA" | "SHRA" | "-SHRA" | "+SHRA" | "VCSH" => {
            "rainy-3.svg"
        }
        "SN" | "+SN" => "snowy-3.svg",
        "-SN" => "snowy-2.svg",
        "BR" | "FG" | "MIFG" => "fog.svg",
        "HZ" | "FU" => "haze.svg",
        "DU" | "DS" | "DRDU" | "BLDU" | "PO" => "dust.svg",
        "CLR" | "CAVOK" => CLEAR_ICON,
        "FAIR" => "cloudy-1-night.svg",
        "PCLOUDY" => "cloudy-2-night.svg",
        "CLOUDY" => "cloudy-3-night.svg",
        "OVC" => "cloudy.svg",
        _ => CLEAR_ICON,
    }
}

/// VFR/MVFR/IFR/LIFR classification of a METAR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightCategory {
    Vfr,
    Mvfr,
    Ifr,
    Lifr,
    Unknown,
}

impl FlightCategory {
    pub const ALL: [FlightCategory; 5] = [
        FlightCategory::Vfr,
        FlightCategory::Mvfr,
        FlightCategory::Ifr,
        FlightCategory::Lifr,
        FlightCategory::Unknown,
    ];

    /// Parses the feed value. Absent or unrecognized values are `Unknown`.
    pub fn from_feed(value: Option<&str>) -> Self {
        match value.map(str::trim).unwrap_or("Unknown") {
            "VFR" => FlightCategory::Vfr,
            "MVFR" => FlightCategory::Mvfr,
            "IFR" => FlightCategory::Ifr,
            "LIFR" => FlightCategory::Lifr,
            _ => FlightCategory::Unknown,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FlightCategory::Vfr => "#00aa00",
            FlightCategory::Mvfr => "#0000ff",
            FlightCategory::Ifr => "#ff0000",
            FlightCategory::Lifr => "#aa00aa",
            FlightCategory::Unknown => "#aaaaaa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlightCategory::Vfr => "VFR",
            FlightCategory::Mvfr => "MVFR",
            FlightCategory::Ifr => "IFR",
            FlightCategory::Lifr => "LIFR",
            FlightCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// SIGMET hazard type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigmetHazard {
    Thunderstorm,
    Icing,
    Turbulence,
    VolcanicAsh,
    MountainWave,
    TropicalCyclone,
    Unknown,
}

impl SigmetHazard {
    pub fn from_code(code: &str) -> Self {
        match code {
            "TS" => SigmetHazard::Thunderstorm,
            "ICE" => SigmetHazard::Icing,
            "TURB" => SigmetHazard::Turbulence,
            "VA" => SigmetHazard::VolcanicAsh,
            "MTW" => SigmetHazard::MountainWave,
            "TC" => SigmetHazard::TropicalCyclone,
            _ => SigmetHazard::Unknown,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SigmetHazard::Thunderstorm => "red",
            SigmetHazard::Icing => "dodgerblue",
            SigmetHazard::Turbulence => "purple",
            SigmetHazard::VolcanicAsh => "gray",
            SigmetHazard::MountainWave => "olive",
            SigmetHazard::TropicalCyclone => "orange",
            SigmetHazard::Unknown => "brown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SigmetHazard::Thunderstorm => "Tstorms.png",
            SigmetHazard::Icing => "SevIcing.png",
            SigmetHazard::Turbulence => "SevTurb.png",
            SigmetHazard::VolcanicAsh => "VolErruption.png",
            SigmetHazard::MountainWave => "Mountain.png",
            SigmetHazard::TropicalCyclone => "TropCyclone.png",
            SigmetHazard::Unknown => "default.png",
        }
    }

    /// Human label, `None` for hazards without a table entry.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            SigmetHazard::Thunderstorm => Some("Thunderstorm"),
            SigmetHazard::Icing => Some("Icing"),
            SigmetHazard::Turbulence => Some("Turbulence"),
            SigmetHazard::VolcanicAsh => Some("Volcanic Ash"),
            SigmetHazard::MountainWave => Some("Mountain Wave"),
            SigmetHazard::TropicalCyclone => Some("Tropical Cyclone"),
            SigmetHazard::Unknown => None,
        }
    }
}

/// Intensity trend reported in a SIGMET `chng` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigmetTrend {
    Intensifying,
    Weakening,
    NoChange,
    Unknown,
}

impl SigmetTrend {
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("INTSF") => SigmetTrend::Intensifying,
            Some("WKN") => SigmetTrend::Weakening,
            Some("NC") => SigmetTrend::NoChange,
            _ => SigmetTrend::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SigmetTrend::Intensifying => "Intensifying",
            SigmetTrend::Weakening => "Weakening",
            SigmetTrend::NoChange => "No Change",
            SigmetTrend::Unknown => "Unknown",
        }
    }
}

/// Gridded forecast products available as raster overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForecastElement {
    Rain,
    Clouds,
    CloudLayer,
    ConvectiveClouds,
    RadarReflectivity,
    WindShear,
    #[serde(rename = "CAT_FL180")]
    CatFl180,
    #[serde(rename = "CAT_FL300")]
    CatFl300,
    #[serde(rename = "CAT_FT450")]
    CatFt450,
    #[serde(rename = "Icing_FT140")]
    IcingFt140,
    #[serde(rename = "Icing_FL180")]
    IcingFl180,
    #[serde(rename = "Icing_FL240")]
    IcingFl240,
    WindEnergyPotential,
    SolarPowerPotential,
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
}

/// Where an element's rasters live and how they are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterSpec {
    pub folder: &'static str,
    pub suffix: &'static str,
    pub opacity: f64,
    pub name: &'static str,
}

impl ForecastElement {
    pub const ALL: [ForecastElement; 16] = [
        ForecastElement::Rain,
        ForecastElement::Clouds,
        ForecastElement::CloudLayer,
        ForecastElement::ConvectiveClouds,
        ForecastElement::RadarReflectivity,
        ForecastElement::WindShear,
        ForecastElement::CatFl180,
        ForecastElement::CatFl300,
        ForecastElement::CatFt450,
        ForecastElement::IcingFt140,
        ForecastElement::IcingFl180,
        ForecastElement::IcingFl240,
        ForecastElement::WindEnergyPotential,
        ForecastElement::SolarPowerPotential,
        ForecastElement::Pm25,
        ForecastElement::Pm10,
    ];

    /// Key used on the wire and in the element picker.
    pub fn key(&self) -> &'static str {
        match self {
            ForecastElement::Rain => "Rain",
            ForecastElement::Clouds => "Clouds",
            ForecastElement::CloudLayer => "CloudLayer",
            ForecastElement::ConvectiveClouds => "ConvectiveClouds",
            ForecastElement::RadarReflectivity => "RadarReflectivity",
            ForecastElement::WindShear => "WindShear",
            ForecastElement::CatFl180 => "CAT_FL180",
            ForecastElement::CatFl300 => "CAT_FL300",
            ForecastElement::CatFt450 => "CAT_FT450",
            ForecastElement::IcingFt140 => "Icing_FT140",
            ForecastElement::IcingFl180 => "Icing_FL180",
            ForecastElement::IcingFl240 => "Icing_FL240",
            ForecastElement::WindEnergyPotential => "WindEnergyPotential",
            ForecastElement::SolarPowerPotential => "SolarPowerPotential",
            ForecastElement::Pm25 => "PM2.5",
            ForecastElement::Pm10 => "PM10",
        }
    }

    pub fn raster(&self) -> RasterSpec {
        let (folder, suffix, opacity, name) = match self {
            ForecastElement::Rain => ("rain", "raint.png", 0.9, "Rain"),
            ForecastElement::Clouds => ("clouds", "tcldt.png", 0.9, "Clouds"),
            ForecastElement::CloudLayer => ("cloudlayer", "cldt.png", 0.9, "Cloud Layer"),
            ForecastElement::ConvectiveClouds => {
                ("convection", "CB.png", 0.9, "Convective Clouds")
            }
            ForecastElement::RadarReflectivity => {
                ("radref", "radart.png", 0.9, "Radar Reflectivity")
            }
            ForecastElement::WindShear => ("WindShear", "llwst.png", 0.7, "Wind Shear"),
            ForecastElement::CatFl180 => ("turbulence", "500hPa_turbulence.png", 0.9, "CAT FL180"),
            ForecastElement::CatFl300 => ("turbulence", "300hPa_turbulence.png", 0.9, "CAT FL300"),
            ForecastElement::CatFt450 => ("turbulence", "200hPa_turbulence.png", 0.9, "CAT FT450"),
            ForecastElement::IcingFt140 => ("icing", "600mb_icet.png", 0.9, "Icing FT140"),
            ForecastElement::IcingFl180 => ("icing", "500mb_icet.png", 0.9, "Icing FL180"),
            ForecastElement::IcingFl240 => ("icing", "400mb_icet.png", 0.9, "Icing FL240"),
            ForecastElement::WindEnergyPotential => {
                ("windpower", "wipt.png", 0.9, "WindPowerDensity")
            }
            ForecastElement::SolarPowerPotential => {
                ("solar", "solpt.png", 0.9, "SolarPowerPotential")
            }
            ForecastElement::Pm25 => ("PM2.5", "pmft.png", 0.9, "PM2.5"),
            ForecastElement::Pm10 => ("PM10", "pmct.png", 0.9, "PM10"),
        };
        RasterSpec {
            folder,
            suffix,
            opacity,
            name,
        }
    }
}
