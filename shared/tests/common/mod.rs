#![allow(dead_code)]

use crux_core::Request;
use crux_http::protocol::HttpRequest;
use geojson::{FeatureCollection, JsonObject};
use prayer_globe::reference::parse_geography;
use prayer_globe::{CountryRecord, Effect, PrayerSchedule, PrayerTimings};

pub const GEOGRAPHY: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"ADMIN": "Egypt", "name": "Egypt"}, "geometry": null},
        {"type": "Feature", "properties": {"ADMIN": "Peru", "name": "Peru"}, "geometry": null},
        {"type": "Feature", "properties": {"ADMIN": "Atlantis"}, "geometry": null}
    ]
}"#;

pub fn geography() -> FeatureCollection {
    parse_geography(GEOGRAPHY.as_bytes()).expect("fixture is a feature collection")
}

pub fn countries() -> Vec<CountryRecord> {
    serde_json::from_str(
        r#"[
            {"name": "Egypt", "capital": "Cairo"},
            {"name": "Peru", "capital": "Lima"}
        ]"#,
    )
    .expect("fixture is a country list")
}

pub fn properties(json: serde_json::Value) -> JsonObject {
    match json {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

pub fn schedule(city: &str, country: &str, fajr: &str) -> PrayerSchedule {
    PrayerSchedule {
        city: city.into(),
        country: country.into(),
        timings: [("Fajr", fajr), ("Dhuhr", "12:00"), ("Asr", "15:30"), ("Maghrib", "18:00"), ("Isha", "19:30")]
            .into_iter()
            .collect::<PrayerTimings>(),
        date: None,
        timezone: None,
    }
}

pub fn http_urls(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Http(request) => Some(request.operation.url.clone()),
            _ => None,
        })
        .collect()
}

pub fn has_render(effects: &[Effect]) -> bool {
    effects.iter().any(|effect| matches!(effect, Effect::Render(_)))
}

pub fn http_requests(effects: Vec<Effect>) -> Vec<Request<HttpRequest>> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .collect()
}
