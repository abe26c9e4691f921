mod common;

use crux_core::testing::AppTester;
use crux_core::Request;
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};
use prayer_globe::{App, AppConfig, Effect, Event, Model};

use common::{http_requests, GEOGRAPHY};

const COUNTRIES: &str = r#"[
    {"name": "Egypt", "capital": "Cairo"},
    {"name": "Peru", "capital": "Lima"}
]"#;

const CAIRO: &str = r#"{
    "code": 200,
    "status": "OK",
    "data": {
        "timings": {"Fajr": "04:31", "Sunrise": "05:55", "Dhuhr": "11:39", "Asr": "14:58", "Maghrib": "17:23", "Isha": "18:41"},
        "date": {"readable": "16 Oct 2026"},
        "meta": {"timezone": "Africa/Cairo"}
    }
}"#;

/// Answers `request` and feeds the resulting events back into the app.
fn respond(
    app: &AppTester<App, Effect>,
    model: &mut Model,
    request: &mut Request<HttpRequest>,
    response: HttpResponse,
) -> Vec<Effect> {
    let update = app
        .resolve(request, HttpResult::Ok(response))
        .expect("request should resolve");

    let mut effects = Vec::new();
    for event in update.events {
        effects.extend(app.update(event, model).effects);
    }
    effects
}

fn mount(app: &AppTester<App, Effect>, model: &mut Model) -> Vec<Request<HttpRequest>> {
    let update = app.update(
        Event::Mount(AppConfig {
            asset_base_url: "https://globe.example/app/".into(),
            ..AppConfig::default()
        }),
        model,
    );
    http_requests(update.effects)
}

fn loaded() -> (AppTester<App, Effect>, Model) {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let mut requests = mount(&app, &mut model);
    let (geography, countries) = requests.split_at_mut(1);
    respond(&app, &mut model, &mut geography[0], HttpResponse::ok().body(GEOGRAPHY).build());
    respond(&app, &mut model, &mut countries[0], HttpResponse::ok().body(COUNTRIES).build());

    (app, model)
}

fn search(app: &AppTester<App, Effect>, model: &mut Model, city: &str) -> Request<HttpRequest> {
    app.update(Event::CityChanged(city.into()), model);
    app.update(Event::CountryChanged("Egypt".into()), model);
    let update = app.update(Event::SearchRequested, model);
    http_requests(update.effects)
        .pop()
        .expect("search should issue a request")
}

fn displayed_entries(app: &AppTester<App, Effect>, model: &Model) -> Option<Vec<(String, String)>> {
    let schedule = app.view(model).sidebar.schedule?;
    Some(
        schedule
            .entries
            .into_iter()
            .map(|entry| (entry.name, entry.time))
            .collect(),
    )
}

#[test]
fn test_reference_responses_populate_globe() {
    let (app, model) = loaded();

    assert!(!model.loading);
    assert_eq!(model.capitals.capital_of("Egypt"), Some("Cairo"));

    let view = app.view(&model);
    assert_eq!(view.globe.features.len(), 3);
    assert_eq!(view.globe.tiles.len(), 3);
    assert_eq!(view.globe.tiles[1].tooltip.capital, "Lima");
}

#[test]
fn test_reference_error_status_leaves_globe_empty() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let mut requests = mount(&app, &mut model);
    let (geography, countries) = requests.split_at_mut(1);
    respond(&app, &mut model, &mut geography[0], HttpResponse::ok().body(GEOGRAPHY).build());
    let effects = respond(
        &app,
        &mut model,
        &mut countries[0],
        HttpResponse::status(500).body("internal error").build(),
    );

    assert!(effects.iter().any(|effect| matches!(effect, Effect::Render(_))));
    assert!(!model.loading);
    assert!(model.geography.is_empty());
    assert!(model.capitals.is_empty());
    assert!(app.view(&model).globe.tiles.is_empty());
}

#[test]
fn test_malformed_geography_leaves_globe_empty() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let mut requests = mount(&app, &mut model);
    let (geography, countries) = requests.split_at_mut(1);
    respond(
        &app,
        &mut model,
        &mut geography[0],
        HttpResponse::ok().body(r#"{"type": "Point", "coordinates": [0, 0]}"#).build(),
    );
    respond(&app, &mut model, &mut countries[0], HttpResponse::ok().body(COUNTRIES).build());

    assert!(!model.loading);
    assert!(model.geography.is_empty());
    assert!(model.capitals.is_empty());
}

#[test]
fn test_timings_response_fills_sidebar() {
    let (app, mut model) = loaded();

    let mut request = search(&app, &mut model, "Cairo");
    let effects = respond(&app, &mut model, &mut request, HttpResponse::ok().body(CAIRO).build());

    assert!(effects.iter().any(|effect| matches!(effect, Effect::Render(_))));
    let schedule = app.view(&model).sidebar.schedule.expect("schedule shown");
    assert_eq!(schedule.place, "Cairo, Egypt");
    assert_eq!(schedule.date.as_deref(), Some("16 Oct 2026"));
    assert_eq!(schedule.timezone.as_deref(), Some("Africa/Cairo"));
    assert_eq!(
        displayed_entries(&app, &model).expect("entries shown")[..3],
        [
            ("Fajr".to_string(), "4:31 AM".to_string()),
            ("Sunrise".to_string(), "5:55 AM".to_string()),
            ("Dhuhr".to_string(), "11:39 AM".to_string()),
        ]
    );
}

#[test]
fn test_timings_failures_keep_previous_list() {
    let (app, mut model) = loaded();

    let mut request = search(&app, &mut model, "Cairo");
    respond(&app, &mut model, &mut request, HttpResponse::ok().body(CAIRO).build());
    let before = displayed_entries(&app, &model);
    assert!(before.is_some());

    let failures = [
        HttpResponse::status(404)
            .body(r#"{"code": 404, "status": "NOT_FOUND", "data": "Unable to find city"}"#)
            .build(),
        HttpResponse::ok().build(),
        HttpResponse::ok().body("<html>gateway</html>").build(),
        HttpResponse::ok().body(r#"{"code": 200, "data": {}}"#).build(),
    ];

    for response in failures {
        let mut request = search(&app, &mut model, "Atlantis");
        let effects = respond(&app, &mut model, &mut request, response);

        assert!(effects.is_empty());
        assert_eq!(displayed_entries(&app, &model), before);
    }
}

#[test]
fn test_error_status_before_any_success_keeps_list_hidden() {
    let (app, mut model) = loaded();

    let mut request = search(&app, &mut model, "Atlantis");
    respond(
        &app,
        &mut model,
        &mut request,
        HttpResponse::status(400).body(r#"{"code": 400, "data": "Bad request"}"#).build(),
    );

    assert!(app.view(&model).sidebar.schedule.is_none());
}
