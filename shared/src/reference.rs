//! Reference data loaded once at mount: region boundaries and the
//! country-to-capital table.

use std::collections::HashMap;
use std::sync::Arc;

use geojson::{Feature, FeatureCollection, GeoJson, JsonObject};
use serde::{Deserialize, Serialize};

use crate::config::NameMatching;
use crate::error::FetchError;

/// Property keys a region name may live under, in hover order.
pub const HOVER_NAME_KEYS: [&str; 2] = ["name", "ADMIN"];
/// Property keys for the tooltip title, in label order.
pub const LABEL_NAME_KEYS: [&str; 2] = ["ADMIN", "name"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    #[serde(default)]
    pub capital: Option<String>,
}

pub fn parse_country_list(bytes: &[u8]) -> Result<Vec<CountryRecord>, FetchError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// First non-empty string property among `keys`.
pub fn region_name(properties: &JsonObject, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| properties.get(*key).and_then(serde_json::Value::as_str))
        .find(|name| !name.is_empty())
        .map(str::to_string)
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapitalLookup {
    exact: HashMap<String, String>,
    normalized: Option<HashMap<String, String>>,
}

impl CapitalLookup {
    /// Later records with the same name replace earlier ones.
    pub fn from_records(records: &[CountryRecord], matching: NameMatching) -> Self {
        let mut exact = HashMap::with_capacity(records.len());
        let mut normalized = match matching {
            NameMatching::Exact => None,
            NameMatching::Normalized => Some(HashMap::with_capacity(records.len())),
        };

        for record in records {
            let Some(capital) = record.capital.as_deref().filter(|c| !c.is_empty()) else {
                tracing::debug!(country = %record.name, "country has no capital, skipped");
                continue;
            };

            exact.insert(record.name.clone(), capital.to_string());
            if let Some(map) = normalized.as_mut() {
                map.insert(normalize_name(&record.name), capital.to_string());
            }
        }

        Self { exact, normalized }
    }

    pub fn capital_of(&self, name: &str) -> Option<&str> {
        if let Some(capital) = self.exact.get(name) {
            return Some(capital);
        }
        self.normalized
            .as_ref()?
            .get(&normalize_name(name))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

/// Derived names and cached colour of the feature at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub index: usize,
    pub hover_name: Option<String>,
    pub label_name: Option<String>,
    pub stable_color: String,
}

impl Region {
    fn new(index: usize, feature: &Feature) -> Self {
        let (hover_name, label_name) = match &feature.properties {
            Some(properties) => (
                region_name(properties, &HOVER_NAME_KEYS),
                region_name(properties, &LABEL_NAME_KEYS),
            ),
            None => (None, None),
        };

        let identity = label_name.clone().unwrap_or_else(|| format!("#region-{index}"));
        let stable_color = stable_color(&identity);

        Self {
            index,
            hover_name,
            label_name,
            stable_color,
        }
    }
}

/// `#rrggbb` from the first three bytes of the identity's hash.
pub fn stable_color(identity: &str) -> String {
    let hash = blake3::hash(identity.as_bytes());
    let [r, g, b] = [hash.as_bytes()[0], hash.as_bytes()[1], hash.as_bytes()[2]];
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Loaded region boundaries. The features are shared with every view
/// built from them and never copied after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Geography {
    features: Arc<[Feature]>,
    regions: Vec<Region>,
}

impl Default for Geography {
    fn default() -> Self {
        Self {
            features: Arc::from(Vec::<Feature>::new()),
            regions: Vec::new(),
        }
    }
}

impl Geography {
    pub fn from_collection(collection: FeatureCollection) -> Self {
        let regions = collection
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| Region::new(index, feature))
            .collect();
        Self {
            features: Arc::from(collection.features),
            regions,
        }
    }

    pub fn features(&self) -> &Arc<[Feature]> {
        &self.features
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

pub fn parse_geography(bytes: &[u8]) -> Result<FeatureCollection, FetchError> {
    let text = std::str::from_utf8(bytes).map_err(|e| FetchError::Malformed(e.to_string()))?;
    let geojson: GeoJson = text.parse()?;
    Ok(FeatureCollection::try_from(geojson)?)
}
