//! Contact form submissions
//!
//! Validates the form, records it in memory and builds the acknowledgement
//! shown back in the chat widget.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;
use tokio::sync::RwLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));

const MISSIONARY_KEYWORDS: &[&str] = &[
    "missionário",
    "missionária",
    "missionario",
    "missionaria",
    "missão",
];
const SUPPORTER_KEYWORDS: &[&str] = &["apoiar", "contribuir"];

const MISSIONARY_REPLY: &str = "Nossa equipe de apoio a missionários entrará em contato em até 24 horas para te orientar sobre como podemos apoiar sua missão. ";
const SUPPORTER_REPLY: &str = "Nossa equipe de relacionamento com mantenedores entrará em contato em até 24 horas para te mostrar como você pode fazer parte da obra missionária. ";
const GENERIC_REPLY: &str = "Nossa equipe entrará em contato em até 24 horas para te ajudar da melhor forma possível. ";
const CLOSING: &str = "\n\n\"Porque onde estiver o vosso tesouro, aí estará também o vosso coração.\" - Mateus 6:21\n\n💝 Que Deus abençoe você!";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Nome e email são obrigatórios")]
    MissingFields,
    #[error("Email inválido")]
    InvalidEmail,
}

/// Which team follows up on a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUp {
    Missionary,
    Supporter,
    General,
}

impl FollowUp {
    /// Route by keywords in the free-text message
    pub fn for_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        let mentions = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if mentions(MISSIONARY_KEYWORDS) {
            FollowUp::Missionary
        } else if mentions(SUPPORTER_KEYWORDS) {
            FollowUp::Supporter
        } else {
            FollowUp::General
        }
    }

    fn wording(self) -> &'static str {
        match self {
            FollowUp::Missionary => MISSIONARY_REPLY,
            FollowUp::Supporter => SUPPORTER_REPLY,
            FollowUp::General => GENERIC_REPLY,
        }
    }
}

/// A validated contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Validate raw form fields. `name` and `email` are required and must be
    /// non-empty; `message` may be absent.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ContactError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(ContactError::MissingFields)?;
        let email = email
            .filter(|e| !e.is_empty())
            .ok_or(ContactError::MissingFields)?;
        if !EMAIL_RE.is_match(&email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            message: message.unwrap_or_default(),
        })
    }

    pub fn follow_up(&self) -> FollowUp {
        FollowUp::for_message(&self.message)
    }

    /// Reply shown to the visitor after submitting
    pub fn acknowledgement(&self) -> String {
        format!(
            "🙏 Obrigado por entrar em contato, {}! {}{CLOSING}",
            self.name,
            self.follow_up().wording()
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub follow_up: FollowUp,
    pub received_at: DateTime<Utc>,
}

/// In-memory log of submissions
#[derive(Debug, Default)]
pub struct ContactBook {
    records: RwLock<Vec<ContactRecord>>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, form: &ContactForm) -> ContactRecord {
        let record = ContactRecord {
            id: uuid::Uuid::new_v4().to_string(),
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
            follow_up: form.follow_up(),
            received_at: Utc::now(),
        };

        tracing::info!(
            id = %record.id,
            name = %record.name,
            email = %record.email,
            follow_up = ?record.follow_up,
            "New contact received"
        );

        self.records.write().await.push(record.clone());
        record
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    #[allow(dead_code)] // API completeness
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    #[allow(dead_code)] // API completeness
    pub async fn records(&self) -> Vec<ContactRecord> {
        self.records.read().await.clone()
    }
}
