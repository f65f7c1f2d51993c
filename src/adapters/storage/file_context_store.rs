//! File-based Context Store Adapter
//!
//! Stores each user's conversation context as a JSON file on disk, using the
//! same external representation as the HTTP API. File names are the hex
//! encoding of the user id so arbitrary ids map to safe paths.

use async_trait::async_trait;
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::conversation::ConversationContext;
use crate::domain::foundation::UserId;
use crate::ports::{ContextStore, ContextStoreError};

/// File-based storage for conversation contexts
#[derive(Debug, Clone)]
pub struct FileContextStore {
    base_path: PathBuf,
}

impl FileContextStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// The directory is created on first save.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileContextStore::new("./data/contexts");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a user's context
    fn context_file_path(&self, user_id: &UserId) -> PathBuf {
        self.base_path
            .join(format!("{}.json", hex_encode(user_id.as_str())))
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), ContextStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| ContextStoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl ContextStore for FileContextStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<ConversationContext>, ContextStoreError> {
        let file_path = self.context_file_path(user_id);

        let json = match fs::read_to_string(&file_path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ContextStoreError::Io(e.to_string())),
        };

        let context = serde_json::from_str(&json)
            .map_err(|e| ContextStoreError::Deserialization(e.to_string()))?;

        Ok(Some(context))
    }

    async fn save(
        &self,
        user_id: &UserId,
        context: &ConversationContext,
    ) -> Result<(), ContextStoreError> {
        self.ensure_dir().await?;

        let json = serde_json::to_string_pretty(context)
            .map_err(|e| ContextStoreError::Serialization(e.to_string()))?;

        // Write to a sibling temp file first so readers never see a partial blob
        let file_path = self.context_file_path(user_id);
        let tmp_path = file_path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .await
            .map_err(|e| ContextStoreError::Io(e.to_string()))?;
        fs::rename(&tmp_path, &file_path)
            .await
            .map_err(|e| ContextStoreError::Io(e.to_string()))
    }

    async fn delete(&self, user_id: &UserId) -> Result<bool, ContextStoreError> {
        match fs::remove_file(self.context_file_path(user_id)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ContextStoreError::Io(e.to_string())),
        }
    }
}

fn hex_encode(value: &str) -> String {
    value.bytes().fold(String::with_capacity(value.len() * 2), |mut out, b| {
        let _ = write!(out, "{:02x}", b);
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{
        Goal, MatchInfo, Message, Metrics, Sentiment, Stage, ToneAnalysis,
    };
    use crate::domain::foundation::Timestamp;
    use tempfile::TempDir;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn populated_context() -> ConversationContext {
        let start = Timestamp::from_unix_millis(1_700_000_000_000).unwrap();
        let mut context = ConversationContext::new(Goal::SetDate, MatchInfo::on_platform("Hinge"));
        context.messages = vec![
            Message::user("Hey! I love hiking", start),
            Message::assistant("Favorite trail?", start.plus_millis(2_345)),
            Message::user("Mount Tam, you?", start.plus_millis(9_001)),
        ];
        context.match_info.conversation_stage = Stage::BuildingRapport;
        context.match_info.tone_analysis =
            Some(ToneAnalysis::new(0.7333333333333333, 0.45, Sentiment::Positive));
        context.metrics = Metrics {
            message_count: 3,
            average_response_time: 4.5005,
            goal_progress: 0.4458333333333333,
        };
        context
    }

    #[test]
    fn test_hex_encode() {
        assert_eq!(hex_encode("ab/"), "61622f");
        assert_eq!(hex_encode(""), "");
    }

    #[tokio::test]
    async fn test_save_and_load_round_trips_exactly() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileContextStore::new(temp_dir.path());
        let context = populated_context();

        store.save(&user("alice"), &context).await.unwrap();
        let loaded = store.load(&user("alice")).await.unwrap().unwrap();

        assert_eq!(loaded, context);
        assert_eq!(
            loaded.metrics.goal_progress.to_bits(),
            context.metrics.goal_progress.to_bits()
        );
    }

    #[tokio::test]
    async fn test_engine_turn_context_reloads_exactly() {
        use crate::adapters::ai::MockAIProvider;
        use crate::adapters::sentiment::AfinnLexicon;
        use crate::domain::conversation::{ConversationConfig, ConversationEngine};
        use std::sync::Arc;

        let engine = ConversationEngine::new(
            Arc::new(MockAIProvider::new().with_response("Which trail is your favorite?")),
            Arc::new(AfinnLexicon::new()),
            ConversationConfig::default(),
        );
        let context = engine
            .turn("Hey! I love hiking", None)
            .await
            .unwrap()
            .context;
        let temp_dir = TempDir::new().unwrap();
        let store = FileContextStore::new(temp_dir.path());

        store.save(&user("bob"), &context).await.unwrap();
        let loaded = store.load(&user("bob")).await.unwrap().unwrap();

        assert_eq!(loaded, context);
        assert_eq!(
            loaded.messages[1].timestamp().as_datetime().timestamp_nanos_opt(),
            context.messages[1].timestamp().as_datetime().timestamp_nanos_opt()
        );
    }

    #[tokio::test]
    async fn test_load_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileContextStore::new(temp_dir.path());

        assert!(store.load(&user("nobody")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileContextStore::new(temp_dir.path().join("nested").join("contexts"));

        store.save(&user("alice"), &populated_context()).await.unwrap();

        assert!(store.load(&user("alice")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_path_like_user_ids_stay_inside_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileContextStore::new(temp_dir.path());
        let sneaky = user("../../etc/passwd");

        store.save(&sneaky, &populated_context()).await.unwrap();

        let path = store.context_file_path(&sneaky);
        assert_eq!(path.parent(), Some(temp_dir.path()));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileContextStore::new(temp_dir.path());
        store.save(&user("alice"), &populated_context()).await.unwrap();

        assert!(store.delete(&user("alice")).await.unwrap());
        assert!(!store.delete(&user("alice")).await.unwrap());
        assert!(store.load(&user("alice")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_deserialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileContextStore::new(temp_dir.path());
        let path = store.context_file_path(&user("alice"));
        std::fs::write(&path, "{not json").unwrap();

        let result = store.load(&user("alice")).await;

        assert!(matches!(result, Err(ContextStoreError::Deserialization(_))));
    }
}
