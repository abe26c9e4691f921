use geojson::FeatureCollection;

use crate::config::{AppConfig, FetchOrdering};
use crate::error::FetchError;
use crate::reference::{CapitalLookup, CountryRecord, Geography};
use crate::timings::{PrayerSchedule, RequestGeneration};

type GeographyResult = Result<FeatureCollection, FetchError>;
type CountriesResult = Result<Vec<CountryRecord>, FetchError>;

/// Responses of the two reference fetches, held until both have arrived.
#[derive(Debug, Default)]
pub struct ReferenceLoad {
    geography: Option<GeographyResult>,
    countries: Option<CountriesResult>,
}

impl ReferenceLoad {
    pub fn set_geography(&mut self, result: GeographyResult) {
        self.geography = Some(result);
    }

    pub fn set_countries(&mut self, result: CountriesResult) {
        self.countries = Some(result);
    }

    /// Both results, once both are in.
    pub fn take_complete(&mut self) -> Option<(GeographyResult, CountriesResult)> {
        if self.geography.is_some() && self.countries.is_some() {
            Some((self.geography.take()?, self.countries.take()?))
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub config: AppConfig,
    pub mounted: bool,
    /// True only while the reference load is in flight.
    pub loading: bool,

    pub geography: Geography,
    pub capitals: CapitalLookup,
    pub reference_load: ReferenceLoad,

    pub city_input: String,
    pub country_input: String,

    /// Replaced wholesale by every accepted timings response.
    pub schedule: Option<PrayerSchedule>,
    pub latest_generation: RequestGeneration,
}

impl Model {
    pub fn issue_generation(&mut self) -> RequestGeneration {
        self.latest_generation = self.latest_generation.next();
        self.latest_generation
    }

    pub fn accepts(&self, generation: RequestGeneration) -> bool {
        match self.config.fetch_ordering {
            FetchOrdering::LastResponseWins => true,
            FetchOrdering::LatestRequestWins => generation == self.latest_generation,
        }
    }

    /// Installs reference data. Both parts must have loaded; otherwise the
    /// model keeps the empty geography and lookup it started with.
    pub fn commit_reference(&mut self, collection: FeatureCollection, records: &[CountryRecord]) {
        self.geography = Geography::from_collection(collection);
        self.capitals = CapitalLookup::from_records(records, self.config.name_matching);
    }
}
