pub mod contest;
pub mod event;
pub mod ids;
pub mod signup;

pub use contest::{Contest, ContestSection, DivisionType};
pub use event::{Event, EventState};
pub use ids::{ContestId, EventId, ParticipantId};
pub use signup::Signup;
