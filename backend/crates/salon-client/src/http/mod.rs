pub(crate) mod client_event;
pub(crate) mod http_client;
pub(crate) mod raw_response;

pub use client_event::ClientEvent;
pub use http_client::{DEFAULT_TIMEOUT, HttpClient};
pub use raw_response::RawResponse;
