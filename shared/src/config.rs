//! Runtime configuration, delivered by the shell with [`Event::Mount`].
//!
//! Every field has a default, so a shell may send `{}` or only the fields it
//! wants to change.
//!
//! [`Event::Mount`]: crate::Event::Mount

use serde::{Deserialize, Serialize};

use crate::capabilities::ValidatedUrl;
use crate::error::ConfigError;

pub const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:3000/";
pub const DEFAULT_GEOGRAPHY_PATH: &str = "./countries.geo.json";
pub const DEFAULT_COUNTRIES_PATH: &str = "./countries.json";
pub const DEFAULT_GLOBE_IMAGE_PATH: &str = "./earth-image.jpg";
pub const DEFAULT_BACKGROUND_IMAGE_PATH: &str = "./night-sky.png";
pub const DEFAULT_TIMINGS_ENDPOINT: &str = "https://api.aladhan.com/v1/timingsByCity";
/// Islamic Society of North America.
pub const DEFAULT_CALCULATION_METHOD: u8 = 2;
pub const DEFAULT_HEX_RESOLUTION: u8 = 3;
pub const DEFAULT_HEX_MARGIN: f64 = 0.3;

/// Which prayer-times response is allowed to replace the displayed schedule
/// when requests overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOrdering {
    /// Whichever response arrives last is shown, even if it answers an older
    /// request.
    #[default]
    LastResponseWins,
    /// Responses to anything but the newest request are dropped.
    LatestRequestWins,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileColoring {
    /// A fresh uniformly random colour for every tile on every render.
    #[default]
    RandomPerRender,
    /// One colour per region, derived from its name when geography loads.
    StableByRegion,
}

/// How region names from the geography file are matched against the country
/// list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMatching {
    #[default]
    Exact,
    /// Falls back to a trimmed, whitespace-collapsed, lowercase comparison.
    Normalized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeSettings {
    pub show_atmosphere: bool,
    pub hex_resolution: u8,
    pub hex_margin: f64,
    pub hex_use_dots: bool,
}

impl Default for GlobeSettings {
    fn default() -> Self {
        Self {
            show_atmosphere: true,
            hex_resolution: DEFAULT_HEX_RESOLUTION,
            hex_margin: DEFAULT_HEX_MARGIN,
            hex_use_dots: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Static resources are resolved against this, like relative links in a page.
    pub asset_base_url: String,
    pub geography_path: String,
    pub countries_path: String,
    pub globe_image_path: String,
    pub background_image_path: String,
    pub timings_endpoint: String,
    pub calculation_method: u8,
    pub fetch_ordering: FetchOrdering,
    pub tile_coloring: TileColoring,
    pub name_matching: NameMatching,
    pub globe: GlobeSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            geography_path: DEFAULT_GEOGRAPHY_PATH.to_string(),
            countries_path: DEFAULT_COUNTRIES_PATH.to_string(),
            globe_image_path: DEFAULT_GLOBE_IMAGE_PATH.to_string(),
            background_image_path: DEFAULT_BACKGROUND_IMAGE_PATH.to_string(),
            timings_endpoint: DEFAULT_TIMINGS_ENDPOINT.to_string(),
            calculation_method: DEFAULT_CALCULATION_METHOD,
            fetch_ordering: FetchOrdering::default(),
            tile_coloring: TileColoring::default(),
            name_matching: NameMatching::default(),
            globe: GlobeSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn asset_url(&self, path: &str) -> Result<ValidatedUrl, ConfigError> {
        ValidatedUrl::new(self.asset_base_url.as_str())?.join(path)
    }

    pub fn geography_url(&self) -> Result<ValidatedUrl, ConfigError> {
        self.asset_url(&self.geography_path)
    }

    pub fn countries_url(&self) -> Result<ValidatedUrl, ConfigError> {
        self.asset_url(&self.countries_path)
    }

    pub fn timings_endpoint(&self) -> Result<ValidatedUrl, ConfigError> {
        ValidatedUrl::new(self.timings_endpoint.as_str())
    }
}
