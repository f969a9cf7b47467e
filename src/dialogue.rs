//! Rule-based dialogue engine
//!
//! Free text is matched against an ordered keyword table and answered from a
//! static catalog of canned replies, with per-user state kept in an injected
//! store.

pub mod catalog;
pub mod classifier;
mod engine;
pub mod labels;
pub mod store;

#[cfg(test)]
mod proptests;

#[allow(unused_imports)] // Public API re-exports
pub use catalog::{ReplyAction, ResponseEntry};
pub use engine::DialogueEngine;
#[allow(unused_imports)] // Public API re-exports
pub use engine::EngineError;
#[allow(unused_imports)] // Public API re-exports
pub use store::{ConversationStore, MemoryStore, Profile, SessionStats, StoreError};
