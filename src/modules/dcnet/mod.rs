pub mod domain;
pub mod infrastructure;
pub mod traits;

pub use domain::DcnetResource;
pub use infrastructure::DcnetHttpClient;
pub use traits::DcnetSource;
