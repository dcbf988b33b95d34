pub mod chat_message;
pub mod deadline;
pub mod event;
pub mod tutoring_session;

pub use chat_message::ChatMessage;
pub use deadline::Deadline;
pub use event::Event;
pub use tutoring_session::TutoringSession;
