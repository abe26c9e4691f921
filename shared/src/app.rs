use tracing::{debug, error, info, warn};

use crate::capabilities::{read_body, Capabilities};
use crate::config::AppConfig;
use crate::error::FetchError;
use crate::event::Event;
use crate::model::Model;
use crate::reference::{parse_country_list, parse_geography, region_name, HOVER_NAME_KEYS};
use crate::timings::{decode_timings, timings_request_url};
use crate::view::{build_view, ViewModel};

#[derive(Default)]
pub struct App;

impl App {
    fn start_reference_load(config: &AppConfig, caps: &Capabilities) -> Result<(), FetchError> {
        let geography_url = config.geography_url()?;
        let countries_url = config.countries_url()?;

        caps.http.get(geography_url.as_str()).send(|result| {
            Event::GeographyLoaded(read_body(result).and_then(|body| parse_geography(&body)))
        });
        caps.http.get(countries_url.as_str()).send(|result| {
            Event::CountriesLoaded(read_body(result).and_then(|body| parse_country_list(&body)))
        });

        Ok(())
    }

    fn finish_reference_load(model: &mut Model, caps: &Capabilities) {
        let Some((geography, countries)) = model.reference_load.take_complete() else {
            return;
        };

        match (geography, countries) {
            (Ok(collection), Ok(records)) => {
                model.commit_reference(collection, &records);
                info!(
                    regions = model.geography.len(),
                    capitals = model.capitals.len(),
                    "reference data loaded"
                );
            }
            (geography, countries) => {
                for e in [geography.err(), countries.err()].into_iter().flatten() {
                    Self::log_fetch_failure("reference data", &e);
                }
            }
        }

        model.loading = false;
        caps.render.render();
    }

    fn fetch_timings(city: String, country: String, model: &mut Model, caps: &Capabilities) {
        let endpoint = match model.config.timings_endpoint() {
            Ok(endpoint) => endpoint,
            Err(e) => {
                Self::log_fetch_failure("prayer times", &FetchError::from(e));
                return;
            }
        };

        let generation = model.issue_generation();
        let url = timings_request_url(&endpoint, &city, &country, model.config.calculation_method);
        debug!(%city, %country, generation = generation.0, "requesting prayer times");

        caps.http.get(url.as_str()).send(move |result| Event::TimingsLoaded {
            generation,
            result: read_body(result).and_then(|body| decode_timings(&body, &city, &country)),
        });
    }

    fn log_fetch_failure(what: &str, e: &FetchError) {
        error!(
            code = e.code(),
            transient = e.is_transient(),
            error = %e,
            "error fetching {what}"
        );
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        if event.is_user_initiated() {
            debug!(event = event.name(), "user action");
        }

        match event {
            Event::Mount(config) => {
                if model.mounted {
                    warn!("already mounted, reference data is loaded only once");
                    return;
                }

                model.mounted = true;
                model.config = config;
                model.loading = true;

                if let Err(e) = Self::start_reference_load(&model.config, caps) {
                    Self::log_fetch_failure("reference data", &e);
                    model.loading = false;
                }

                caps.render.render();
            }

            Event::GeographyLoaded(result) => {
                model.reference_load.set_geography(result);
                Self::finish_reference_load(model, caps);
            }

            Event::CountriesLoaded(result) => {
                model.reference_load.set_countries(result);
                Self::finish_reference_load(model, caps);
            }

            Event::CityChanged(city) => {
                model.city_input = city;
                caps.render.render();
            }

            Event::CountryChanged(country) => {
                model.country_input = country;
                caps.render.render();
            }

            Event::SearchRequested => {
                let city = model.city_input.clone();
                let country = model.country_input.clone();
                Self::fetch_timings(city, country, model, caps);
            }

            Event::RegionHovered(properties) => {
                let Some(country) = properties
                    .as_ref()
                    .and_then(|props| region_name(props, &HOVER_NAME_KEYS))
                else {
                    return;
                };

                let Some(capital) = model.capitals.capital_of(&country).map(str::to_string) else {
                    debug!(%country, "no capital known, hover ignored");
                    return;
                };

                Self::fetch_timings(capital, country, model, caps);
            }

            Event::TimingsLoaded { generation, result } => {
                if !model.accepts(generation) {
                    debug!(
                        generation = generation.0,
                        latest = model.latest_generation.0,
                        "discarding stale prayer times"
                    );
                    return;
                }

                match result {
                    Ok(schedule) => {
                        model.schedule = Some(schedule);
                        caps.render.render();
                    }
                    Err(e) => Self::log_fetch_failure("prayer times", &e),
                }
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        build_view(model, &mut rand::thread_rng())
    }
}
