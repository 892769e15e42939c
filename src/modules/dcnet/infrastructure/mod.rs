pub mod event_page;
pub mod http_client;

pub use event_page::{event_page_url, extract_title};
pub use http_client::DcnetHttpClient;
