pub mod resource;

pub use resource::{resolve_by_name, DcnetResource};
