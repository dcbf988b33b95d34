pub mod campus_handler;
pub mod chat_handler;
