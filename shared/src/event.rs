use geojson::{FeatureCollection, JsonObject};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::reference::CountryRecord;
use crate::timings::{PrayerSchedule, RequestGeneration};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// The view appeared. Starts the one-time reference data load.
    Mount(AppConfig),

    CityChanged(String),
    CountryChanged(String),
    SearchRequested,

    /// Pointer entered a region (its feature properties) or left the globe.
    RegionHovered(Option<JsonObject>),

    // --- Responses, produced by the core only ---
    #[serde(skip)]
    GeographyLoaded(Result<FeatureCollection, FetchError>),
    #[serde(skip)]
    CountriesLoaded(Result<Vec<CountryRecord>, FetchError>),
    #[serde(skip)]
    TimingsLoaded {
        generation: RequestGeneration,
        result: Result<PrayerSchedule, FetchError>,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mount(_) => "mount",
            Self::CityChanged(_) => "city_changed",
            Self::CountryChanged(_) => "country_changed",
            Self::SearchRequested => "search_requested",
            Self::RegionHovered(_) => "region_hovered",
            Self::GeographyLoaded(_) => "geography_loaded",
            Self::CountriesLoaded(_) => "countries_loaded",
            Self::TimingsLoaded { .. } => "timings_loaded",
        }
    }

    pub fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::CityChanged(_)
                | Self::CountryChanged(_)
                | Self::SearchRequested
                | Self::RegionHovered(_)
        )
    }
}
