//! Command implementations

mod chat;
mod input;
mod upload;

pub use chat::chat;
pub use upload::read_receipt;
