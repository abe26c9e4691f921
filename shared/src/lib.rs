// lib.rs - Crux core for the prayer-times globe

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod reference;
pub mod time_format;
pub mod timings;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::{AppConfig, FetchOrdering, GlobeSettings, NameMatching, TileColoring};
pub use crux_core::{render::Render, App as CruxApp};
pub use error::{ConfigError, ErrorKind, ErrorSeverity, FetchError, TimeFormatError};
pub use event::Event;
pub use model::Model;
pub use reference::{CapitalLookup, CountryRecord, Geography, Region};
pub use time_format::{display_time, format_12_hour};
pub use timings::{PrayerSchedule, PrayerTimings, RequestGeneration, TimingEntry, CANONICAL_PRAYERS};
pub use view::{GlobeView, HexTile, ScheduleView, SidebarView, TooltipView, ViewModel};
