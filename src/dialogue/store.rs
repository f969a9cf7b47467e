//! Per-user conversation state
//!
//! The engine only talks to [`ConversationStore`], so a persistent backend
//! can replace [`MemoryStore`] without touching routing logic.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tokio::sync::RwLock;

/// Classification of a user as missionary or supporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Missionario,
    Mantenedor,
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Missionario => "missionario",
            Profile::Mantenedor => "mantenedor",
        }
    }

    /// Profile set by routing to the given topic tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "missionario" => Some(Profile::Missionario),
            "mantenedor" => Some(Profile::Mantenedor),
            _ => None,
        }
    }
}

/// Conversation stage; every known conversation sits at `Welcome`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Welcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationState {
    pub user_id: String,
    pub stage: Stage,
    pub profile: Option<Profile>,
    pub started_at: DateTime<Utc>,
}

impl ConversationState {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            stage: Stage::Welcome,
            profile: None,
            started_at: Utc::now(),
        }
    }
}

/// Key used in [`SessionStats::profiles`] for users without a profile
pub const UNDEFINED_PROFILE: &str = "indefinido";

/// Aggregate view over stored conversations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total_sessions: usize,
    pub profiles: BTreeMap<&'static str, usize>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No conversation for user {0}")]
    UnknownUser(String),
    #[error("Conversation store unavailable: {0}")]
    Unavailable(String),
}

/// Storage for conversation state
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Fetch the state for a user, creating it on first contact.
    /// The flag is `true` when the state was just created.
    async fn get_or_init(&self, user_id: &str) -> Result<(ConversationState, bool), StoreError>;

    /// Record the user's profile, replacing any previous one
    async fn set_profile(&self, user_id: &str, profile: Profile) -> Result<(), StoreError>;

    async fn get(&self, user_id: &str) -> Result<Option<ConversationState>, StoreError>;

    async fn stats(&self) -> Result<SessionStats, StoreError>;
}

/// Process-local store. Nothing is ever evicted.
#[derive(Debug)]
pub struct MemoryStore {
    conversations: RwLock<HashMap<String, ConversationState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            conversations: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStore for MemoryStore {
    async fn get_or_init(&self, user_id: &str) -> Result<(ConversationState, bool), StoreError> {
        {
            let conversations = self.conversations.read().await;
            if let Some(state) = conversations.get(user_id) {
                return Ok((state.clone(), false));
            }
        }

        // Another request may have created it between the two locks
        let mut conversations = self.conversations.write().await;
        let mut created = false;
        let state = conversations
            .entry(user_id.to_string())
            .or_insert_with(|| {
                created = true;
                ConversationState::new(user_id)
            })
            .clone();

        Ok((state, created))
    }

    async fn set_profile(&self, user_id: &str, profile: Profile) -> Result<(), StoreError> {
        let mut conversations = self.conversations.write().await;
        let state = conversations
            .get_mut(user_id)
            .ok_or_else(|| StoreError::UnknownUser(user_id.to_string()))?;
        state.profile = Some(profile);
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<ConversationState>, StoreError> {
        Ok(self.conversations.read().await.get(user_id).cloned())
    }

    async fn stats(&self) -> Result<SessionStats, StoreError> {
        let conversations = self.conversations.read().await;
        let mut profiles = BTreeMap::new();
        for state in conversations.values() {
            let key = state.profile.map_or(UNDEFINED_PROFILE, Profile::as_str);
            *profiles.entry(key).or_insert(0) += 1;
        }

        Ok(SessionStats {
            total_sessions: conversations.len(),
            profiles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn first_lookup_creates_state() {
        let store = MemoryStore::new();

        let (state, created) = store.get_or_init("u1").await.unwrap();
        assert!(created);
        assert_eq!(state.user_id, "u1");
        assert_eq!(state.stage, Stage::Welcome);
        assert_eq!(state.profile, None);

        let (again, created) = store.get_or_init("u1").await.unwrap();
        assert!(!created);
        assert_eq!(again, state);
    }

    #[tokio::test]
    async fn set_profile_overwrites() {
        let store = MemoryStore::new();
        store.get_or_init("u1").await.unwrap();

        store.set_profile("u1", Profile::Mantenedor).await.unwrap();
        store.set_profile("u1", Profile::Missionario).await.unwrap();

        let state = store.get("u1").await.unwrap().unwrap();
        assert_eq!(state.profile, Some(Profile::Missionario));
    }

    #[tokio::test]
    async fn set_profile_for_unknown_user_fails() {
        let store = MemoryStore::new();
        let err = store
            .set_profile("ghost", Profile::Mantenedor)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownUser(id) if id == "ghost"));
        assert!(store.get("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn stats_group_by_profile() {
        let store = MemoryStore::new();
        for id in ["a", "b", "c", "d"] {
            store.get_or_init(id).await.unwrap();
        }
        store.set_profile("a", Profile::Missionario).await.unwrap();
        store.set_profile("b", Profile::Missionario).await.unwrap();
        store.set_profile("c", Profile::Mantenedor).await.unwrap();

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total_sessions, 4);
        assert_eq!(stats.profiles.get("missionario"), Some(&2));
        assert_eq!(stats.profiles.get("mantenedor"), Some(&1));
        assert_eq!(stats.profiles.get(UNDEFINED_PROFILE), Some(&1));
    }

    #[tokio::test]
    async fn concurrent_first_contact_creates_once() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.get_or_init("same").await.unwrap().1 })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
        assert_eq!(store.stats().await.unwrap().total_sessions, 1);
    }

    #[test]
    fn profile_tags_round_trip() {
        for profile in [Profile::Missionario, Profile::Mantenedor] {
            assert_eq!(Profile::from_tag(profile.as_str()), Some(profile));
        }
        assert_eq!(Profile::from_tag("informacoes"), None);
        let value = serde_json::to_value(Profile::Mantenedor).unwrap();
        assert_eq!(value, "mantenedor");
    }
}
