pub mod chat_message_repository;
pub mod deadline_repository;
pub mod event_repository;
pub mod seed;
pub mod tutoring_session_repository;

pub use chat_message_repository::{ChatMessageRepository, MemoryChatMessageRepository};
pub use deadline_repository::{DeadlineRepository, MemoryDeadlineRepository};
pub use event_repository::{EventRepository, MemoryEventRepository};
pub use tutoring_session_repository::{MemoryTutoringSessionRepository, TutoringSessionRepository};
