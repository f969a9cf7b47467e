//! API request and response types

use crate::dialogue::store::ConversationState;
use crate::dialogue::{ResponseEntry, SessionStats};
use serde::{Deserialize, Serialize};

/// Chat message from the widget. Fields are optional here so that missing
/// ones produce our own 400 body instead of a deserializer rejection.
#[derive(Debug, Default, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Quick-reply tag when the message comes from an option button
    #[serde(default)]
    pub option: Option<String>,
}

/// Contact form submission
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response for a chat message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub response: ResponseEntry,
    pub timestamp: String,
}

/// Response for a contact submission
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub sessions: SessionStats,
    pub total_contacts: usize,
}

/// Stored state of one conversation
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub conversation: ConversationState,
}

/// Quick-reply option with its display label
#[derive(Debug, Serialize)]
pub struct OptionLabel {
    pub tag: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub options: Vec<OptionLabel>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}
