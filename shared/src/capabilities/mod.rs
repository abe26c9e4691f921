mod http;

pub use self::http::{read_body, HttpResult, ValidatedUrl, MAX_URL_LENGTH};

pub use crux_core::render::Render;
pub use crux_http::Http;

// The Effect derive names the app type `App`.
#[allow(unused_imports)]
use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
}
