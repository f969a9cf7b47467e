//! Dialogue engine
//!
//! Each user is either unseen or seen. The first message from an unseen user
//! always gets the welcome entry, whatever it says; after that every message
//! is classified and routed. There is no exit state.

use super::catalog::{self, Entry, ResponseEntry};
use super::classifier;
use super::store::{
    ConversationState, ConversationStore, MemoryStore, Profile, SessionStats, StoreError,
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct DialogueEngine {
    store: Arc<dyn ConversationStore>,
}

impl DialogueEngine {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    /// Engine backed by a fresh [`MemoryStore`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Current state for a user, if they have ever written
    pub async fn conversation(
        &self,
        user_id: &str,
    ) -> Result<Option<ConversationState>, EngineError> {
        Ok(self.store.get(user_id).await?)
    }

    /// Reply to a free-text message
    pub async fn respond(&self, text: &str, user_id: &str) -> Result<ResponseEntry, EngineError> {
        if self.first_contact(user_id).await? {
            return Ok(ResponseEntry::from(&catalog::WELCOME));
        }

        let intent = classifier::classify(text);
        tracing::debug!(user_id, intent = intent.tag(), "Classified message");
        self.route(user_id, intent.entry()).await
    }

    /// Reply to a quick-reply option click.
    ///
    /// Contact routes ask the widget to open the contact form. Tags outside
    /// the catalog are classified as if the user had typed them.
    pub async fn select(&self, tag: &str, user_id: &str) -> Result<ResponseEntry, EngineError> {
        if self.first_contact(user_id).await? {
            return Ok(ResponseEntry::from(&catalog::WELCOME));
        }

        if let Some(entry) = catalog::contact_route(tag) {
            tracing::info!(user_id, tag, "Contact form requested");
            return Ok(ResponseEntry::from(entry));
        }

        let entry = match catalog::lookup(tag) {
            Some(entry) => entry,
            None => {
                tracing::warn!(user_id, tag, "Unknown option, classifying as text");
                classifier::classify(tag).entry()
            }
        };
        self.route(user_id, entry).await
    }

    pub async fn stats(&self) -> Result<SessionStats, EngineError> {
        Ok(self.store.stats().await?)
    }

    async fn first_contact(&self, user_id: &str) -> Result<bool, EngineError> {
        let (_, created) = self.store.get_or_init(user_id).await?;
        if created {
            tracing::info!(user_id, "New conversation");
        }
        Ok(created)
    }

    async fn route(
        &self,
        user_id: &str,
        entry: &'static Entry,
    ) -> Result<ResponseEntry, EngineError> {
        if let Some(profile) = Profile::from_tag(entry.tag) {
            self.store.set_profile(user_id, profile).await?;
            tracing::info!(user_id, profile = profile.as_str(), "Profile recorded");
        }
        Ok(ResponseEntry::from(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::catalog::ReplyAction;
    use async_trait::async_trait;

    async fn seen_engine(user_id: &str) -> DialogueEngine {
        let engine = DialogueEngine::in_memory();
        engine.respond("", user_id).await.unwrap();
        engine
    }

    async fn profile_of(engine: &DialogueEngine, user_id: &str) -> Option<Profile> {
        let state = engine.conversation(user_id).await.unwrap();
        state.and_then(|s| s.profile)
    }

    #[tokio::test]
    async fn first_message_always_welcomes() {
        let engine = DialogueEngine::in_memory();
        let texts = ["", "Sou missionário", "quero contribuir", "obrigado"];
        for (i, text) in texts.iter().enumerate() {
            let reply = engine.respond(text, &format!("user-{i}")).await.unwrap();
            assert_eq!(reply.topic, "welcome");
        }
        // Classifier output is discarded on first contact
        assert_eq!(profile_of(&engine, "user-1").await, None);
    }

    #[tokio::test]
    async fn missionary_message_sets_profile() {
        let engine = seen_engine("u").await;
        let reply = engine.respond("Sou missionário", "u").await.unwrap();
        assert_eq!(reply.topic, "missionario");
        assert_eq!(profile_of(&engine, "u").await, Some(Profile::Missionario));
    }

    #[tokio::test]
    async fn later_profile_overwrites_earlier() {
        let engine = seen_engine("u").await;
        engine.respond("missão", "u").await.unwrap();
        engine.respond("quero doar", "u").await.unwrap();
        assert_eq!(profile_of(&engine, "u").await, Some(Profile::Mantenedor));

        // Non-profile topics leave it alone
        engine.respond("como funciona?", "u").await.unwrap();
        assert_eq!(profile_of(&engine, "u").await, Some(Profile::Mantenedor));
    }

    #[tokio::test]
    async fn only_profile_topics_record_profile() {
        let engine = seen_engine("u").await;
        for text in ["conhecer", "oi", "obrigado", "xyz", "falar"] {
            engine.respond(text, "u").await.unwrap();
            assert_eq!(profile_of(&engine, "u").await, None, "after {text:?}");
        }

        engine.respond("missão", "u").await.unwrap();
        assert_eq!(profile_of(&engine, "u").await, Some(Profile::Missionario));
    }

    #[tokio::test]
    async fn precedence_and_fallback() {
        let engine = seen_engine("u").await;
        let reply = engine
            .respond("sou missionário e quero contribuir", "u")
            .await
            .unwrap();
        assert_eq!(reply.topic, "missionario");

        let first = engine.respond("hmm", "u").await.unwrap();
        let second = engine.respond("hmm", "u").await.unwrap();
        assert_eq!(first.topic, "padrao");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn users_are_independent() {
        let engine = seen_engine("a").await;
        engine.respond("missão", "a").await.unwrap();
        let reply = engine.respond("missão", "b").await.unwrap();
        assert_eq!(reply.topic, "welcome");
        assert_eq!(profile_of(&engine, "b").await, None);
    }

    #[tokio::test]
    async fn select_catalog_topic() {
        let engine = seen_engine("u").await;
        let reply = engine.select("seguranca", "u").await.unwrap();
        assert_eq!(reply.topic, "seguranca");
        assert_eq!(
            reply.options,
            ["como_funciona", "transparencia", "contato_humano"]
        );

        engine.select("mantenedor", "u").await.unwrap();
        assert_eq!(profile_of(&engine, "u").await, Some(Profile::Mantenedor));
    }

    #[tokio::test]
    async fn select_contact_route_opens_form() {
        let engine = seen_engine("u").await;
        let reply = engine.select("agendar_conversa", "u").await.unwrap();
        assert_eq!(reply.action, Some(ReplyAction::CollectContact));
        assert!(reply.options.is_empty());
    }

    #[tokio::test]
    async fn select_unknown_tag_classifies_text() {
        let engine = seen_engine("u").await;
        let reply = engine.select("nao_existe", "u").await.unwrap();
        assert_eq!(reply.topic, "padrao");

        // "falar_pessoa" contains "falar"
        let reply = engine.select("falar_pessoa", "u").await.unwrap();
        assert_eq!(reply.topic, "contato_humano");
    }

    #[tokio::test]
    async fn select_on_first_contact_welcomes() {
        let engine = DialogueEngine::in_memory();
        let reply = engine.select("deixar_contato", "fresh").await.unwrap();
        assert_eq!(reply.topic, "welcome");
        assert_eq!(reply.action, None);
    }

    struct BrokenStore;

    #[async_trait]
    impl ConversationStore for BrokenStore {
        async fn get_or_init(&self, _: &str) -> Result<(ConversationState, bool), StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }

        async fn set_profile(&self, _: &str, _: Profile) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }

        async fn get(&self, _: &str) -> Result<Option<ConversationState>, StoreError> {
            Ok(None)
        }

        async fn stats(&self) -> Result<SessionStats, StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }
    }

    #[tokio::test]
    async fn store_errors_propagate() {
        let engine = DialogueEngine::new(Arc::new(BrokenStore));
        let err = engine.respond("oi", "u").await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::Store(StoreError::Unavailable(_))
        ));
        assert!(engine.stats().await.is_err());
    }
}
