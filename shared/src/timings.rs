//! Prayer-times requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::capabilities::ValidatedUrl;
use crate::error::FetchError;

/// The five daily prayers shown in every tooltip, in display order.
pub const CANONICAL_PRAYERS: [&str; 5] = ["Fajr", "Dhuhr", "Asr", "Maghrib", "Isha"];

/// Tags each outbound timings request; issued in increasing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestGeneration(pub u64);

impl RequestGeneration {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingEntry {
    pub name: String,
    pub time: String,
}

/// Prayer name to `HH:MM`, in the order the API listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimings(Vec<TimingEntry>);

impl PrayerTimings {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.time.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimingEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn from_json(map: Map<String, Value>) -> Result<Self, FetchError> {
        map.into_iter()
            .map(|(name, value)| match value {
                Value::String(time) => Ok(TimingEntry { name, time }),
                other => Err(FetchError::Malformed(format!(
                    "timing '{name}' is not a string: {other}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl<N: Into<String>, T: Into<String>> FromIterator<(N, T)> for PrayerTimings {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, time)| TimingEntry {
                    name: name.into(),
                    time: time.into(),
                })
                .collect(),
        )
    }
}

/// The currently displayed timings and the place they were requested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerSchedule {
    pub city: String,
    pub country: String,
    pub timings: PrayerTimings,
    pub date: Option<String>,
    pub timezone: Option<String>,
}

pub fn timings_request_url(
    endpoint: &ValidatedUrl,
    city: &str,
    country: &str,
    method: u8,
) -> ValidatedUrl {
    let method = method.to_string();
    endpoint.with_query([("city", city), ("country", country), ("method", method.as_str())])
}

#[derive(Debug, Deserialize)]
struct TimingsEnvelope {
    data: Option<TimingsData>,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: Option<Map<String, Value>>,
    #[serde(default)]
    date: Option<Value>,
    #[serde(default)]
    meta: Option<Value>,
}

fn nested_str(value: Option<&Value>, key: &str) -> Option<String> {
    value?.get(key)?.as_str().map(str::to_string)
}

pub fn decode_timings(body: &[u8], city: &str, country: &str) -> Result<PrayerSchedule, FetchError> {
    let envelope: TimingsEnvelope = serde_json::from_slice(body)?;
    let data = envelope
        .data
        .ok_or_else(|| FetchError::MissingField("data".into()))?;
    let timings = data
        .timings
        .ok_or_else(|| FetchError::MissingField("data.timings".into()))?;

    Ok(PrayerSchedule {
        city: city.to_string(),
        country: country.to_string(),
        timings: PrayerTimings::from_json(timings)?,
        date: nested_str(data.date.as_ref(), "readable"),
        timezone: nested_str(data.meta.as_ref(), "timezone"),
    })
}
