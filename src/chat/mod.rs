//! Conversation and message types
//!
//! The message log is append-only and in-memory; persistence and delivery
//! are outside this crate.

mod conversation;
mod message;

pub use conversation::Conversation;
pub use message::{Message, Sender};
