//! Scripted self-care companion: keyword classification, canned reply
//! pools and per-session conversation state.

pub mod catalog;
pub mod conversation;
pub mod responder;
pub mod sessions;
pub mod settings;

pub use conversation::{Mood, SessionContext, Topic};
pub use responder::{Dice, Reply, Responder, Tuning};
pub use sessions::SessionStore;
pub use settings::Settings;
