//! Session persistence module
//! Stores the last analysis so a returning invocation can restore it

pub mod store;

pub use store::{SessionData, SessionStore};
