pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::EventService;
pub use domain::{
    Contest, ContestId, ContestSection, DivisionType, Event, EventId, EventState, ParticipantId,
    Signup,
};
