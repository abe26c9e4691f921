//! View model: everything the shell needs to draw the sidebar and the globe.

use std::sync::Arc;

use geojson::Feature;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::TileColoring;
use crate::model::Model;
use crate::reference::Region;
use crate::time_format::{display_time, UNAVAILABLE};
use crate::timings::{PrayerSchedule, TimingEntry, CANONICAL_PRAYERS};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub loading: bool,
    pub sidebar: SidebarView,
    pub globe: GlobeView,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarView {
    pub city_input: String,
    pub country_input: String,
    /// Absent until the first timings response has been accepted.
    pub schedule: Option<ScheduleView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleView {
    pub place: String,
    pub date: Option<String>,
    pub timezone: Option<String>,
    /// Every timing from the response, 12-hour formatted.
    pub entries: Vec<TimingEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobeView {
    pub globe_image_url: Option<String>,
    pub background_image_url: Option<String>,
    pub show_atmosphere: bool,
    pub hex_resolution: u8,
    pub hex_margin: f64,
    pub hex_use_dots: bool,
    /// Region boundaries, fixed once geography has loaded.
    pub features: Arc<[Feature]>,
    pub tiles: Vec<HexTile>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexTile {
    /// Index into `GlobeView::features`.
    pub region: usize,
    /// `#rrggbb`
    pub color: String,
    pub tooltip: TooltipView,
}

/// Built from the one shared schedule, so it may describe a different
/// region than the tile it is attached to until the latest fetch lands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipView {
    pub name: String,
    pub capital: String,
    pub prayers: Vec<TimingEntry>,
}

pub fn random_color(rng: &mut impl Rng) -> String {
    format!("#{:06x}", rng.gen_range(0..=0x00FF_FFFF_u32))
}

fn formatted(name: &str, raw: Option<&str>) -> TimingEntry {
    TimingEntry {
        name: name.to_string(),
        time: display_time(raw),
    }
}

fn build_schedule(schedule: &PrayerSchedule) -> ScheduleView {
    ScheduleView {
        place: format!("{}, {}", schedule.city, schedule.country),
        date: schedule.date.clone(),
        timezone: schedule.timezone.clone(),
        entries: schedule
            .timings
            .iter()
            .map(|entry| formatted(&entry.name, Some(&entry.time)))
            .collect(),
    }
}

fn build_tooltip(region: &Region, model: &Model) -> TooltipView {
    let name = region.label_name.as_deref();
    let capital = name.and_then(|n| model.capitals.capital_of(n));
    let timings = model.schedule.as_ref().map(|s| &s.timings);

    TooltipView {
        name: name.unwrap_or(UNAVAILABLE).to_string(),
        capital: capital.unwrap_or(UNAVAILABLE).to_string(),
        prayers: CANONICAL_PRAYERS
            .iter()
            .map(|prayer| formatted(prayer, timings.and_then(|t| t.get(prayer))))
            .collect(),
    }
}

fn build_tiles(model: &Model, rng: &mut impl Rng) -> Vec<HexTile> {
    model
        .geography
        .regions()
        .iter()
        .map(|region| HexTile {
            region: region.index,
            color: match model.config.tile_coloring {
                TileColoring::RandomPerRender => random_color(rng),
                TileColoring::StableByRegion => region.stable_color.clone(),
            },
            tooltip: build_tooltip(region, model),
        })
        .collect()
}

pub fn build_view(model: &Model, rng: &mut impl Rng) -> ViewModel {
    let config = &model.config;
    let asset = |path: &str| config.asset_url(path).ok().map(|url| url.to_string());

    ViewModel {
        loading: model.loading,
        sidebar: SidebarView {
            city_input: model.city_input.clone(),
            country_input: model.country_input.clone(),
            schedule: model.schedule.as_ref().map(build_schedule),
        },
        globe: GlobeView {
            globe_image_url: asset(&config.globe_image_path),
            background_image_url: asset(&config.background_image_path),
            show_atmosphere: config.globe.show_atmosphere,
            hex_resolution: config.globe.hex_resolution,
            hex_margin: config.globe.hex_margin,
            hex_use_dots: config.globe.hex_use_dots,
            features: Arc::clone(model.geography.features()),
            tiles: build_tiles(model, rng),
        },
    }
}
