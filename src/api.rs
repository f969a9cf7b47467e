//! HTTP API for the chat widget

mod handlers;
mod types;


pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::contact::ContactBook;
use crate::dialogue::DialogueEngine;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DialogueEngine>,
    pub contacts: Arc<ContactBook>,
}

impl AppState {
    pub fn new(engine: DialogueEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            contacts: Arc::new(ContactBook::new()),
        }
    }
}
