//! Client for the danceconvention.net event info API
//!
//! See <https://github.com/danceconvention/dcnet-public/wiki/REST-API> for the
//! upstream REST API.

pub mod modules;
pub mod shared;

pub use modules::dcnet::{DcnetHttpClient, DcnetResource, DcnetSource};
pub use modules::event::{
    Contest, ContestId, ContestSection, DivisionType, Event, EventId, EventService, EventState,
    ParticipantId, Signup,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::DcnetConfig;
