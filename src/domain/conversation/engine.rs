//! Conversation engine.
//!
//! Runs one turn of a conversation: scores the incoming message, records it,
//! re-evaluates metrics and stage, composes the system prompt, asks the text
//! generator for a reply, and records the reply. Every turn works on a private
//! copy of the context, so the caller's value is never mutated.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

use super::config::ConversationConfig;
use super::context::ConversationContext;
use super::errors::ConversationError;
use super::message::{Message, MessageRole};
use super::metrics::MetricsTracker;
use super::prompt::PromptComposer;
use super::stage::Stage;
use super::stage_determiner::StageDeterminer;
use super::tone::{ToneAnalysis, ToneAnalyzer};
use crate::domain::foundation::Timestamp;
use crate::ports::{self, AIError, AIProvider, CompletionRequest, SentimentLexicon};

/// Summary of what a turn observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnAnalysis {
    /// Tone of the user message processed this turn.
    pub tone: ToneAnalysis,
    /// Stage after re-evaluation.
    pub current_stage: Stage,
    /// Goal progress after the reply was recorded.
    pub goal_progress: f64,
}

/// Result of a completed turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// Assistant reply, or the fallback when generation failed.
    pub response: String,
    /// Updated context including both new messages.
    pub context: ConversationContext,
    pub analysis: TurnAnalysis,
    /// True when the reply is the fallback text.
    pub fallback_used: bool,
}

/// Orchestrates tone analysis, stage tracking, prompting and generation.
///
/// Holds no per-conversation state. Two concurrent turns for the same
/// conversation each produce their own context; callers serialize turns
/// per conversation if both messages must be kept.
pub struct ConversationEngine {
    ai_provider: Arc<dyn AIProvider>,
    tone_analyzer: ToneAnalyzer,
    stage_determiner: StageDeterminer,
    metrics_tracker: MetricsTracker,
    prompt_composer: PromptComposer,
    config: ConversationConfig,
    generation_timeout: Option<Duration>,
}

impl ConversationEngine {
    /// Creates an engine with the given collaborators and configuration.
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        lexicon: Arc<dyn SentimentLexicon>,
        config: ConversationConfig,
    ) -> Self {
        Self {
            ai_provider,
            tone_analyzer: ToneAnalyzer::new(lexicon),
            stage_determiner: StageDeterminer::new(&config),
            metrics_tracker: MetricsTracker::new(),
            prompt_composer: PromptComposer::new(&config),
            config,
            generation_timeout: None,
        }
    }

    /// Bounds each generation call. A call that runs longer is abandoned and
    /// the turn completes with the fallback reply.
    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = Some(timeout);
        self
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &ConversationConfig {
        &self.config
    }

    /// Runs one turn.
    ///
    /// Without `existing`, a fresh context (rapport goal, initial stage) is
    /// started. A supplied context must satisfy the data-model invariants.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `user_text` is blank
    /// - `MalformedContext` if `existing` fails validation
    ///
    /// Generation failures are not errors: the fallback reply is recorded
    /// instead and the user message is kept.
    pub async fn turn(
        &self,
        user_text: &str,
        existing: Option<&ConversationContext>,
    ) -> Result<TurnOutcome, ConversationError> {
        if user_text.trim().is_empty() {
            return Err(ConversationError::invalid_input("message must not be empty"));
        }

        let context = match existing {
            Some(context) => {
                context.validate()?;
                context.clone()
            }
            None => ConversationContext::default(),
        };

        let turn_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "conversation_turn",
            %turn_id,
            goal = %context.goal,
            prior_messages = context.messages.len(),
        );

        Ok(self
            .run_turn(user_text, context, turn_id)
            .instrument(span)
            .await)
    }

    async fn run_turn(
        &self,
        user_text: &str,
        mut context: ConversationContext,
        turn_id: Uuid,
    ) -> TurnOutcome {
        let tone = self.tone_analyzer.analyze(user_text);
        context.match_info.tone_analysis = Some(tone);

        self.record(&mut context, Message::user(user_text, Timestamp::now()));

        let stage = self.stage_determiner.determine(&context);
        context.match_info.conversation_stage = stage;

        let system_prompt = self.prompt_composer.compose(&context);
        let temperature = self.config.temperature_by_stage.for_stage(stage);

        tracing::debug!(
            %stage,
            interest = tone.interest,
            engagement = tone.engagement,
            sentiment = tone.sentiment.as_str(),
            temperature,
            "Requesting reply"
        );

        let request = context.messages.iter().fold(
            CompletionRequest::new()
                .with_system_prompt(system_prompt)
                .with_temperature(temperature as f32)
                .with_trace_id(turn_id.to_string()),
            |request, message| request.with_message(message.role().into(), message.content()),
        );

        let (response, fallback_used) = match self.generate(request).await {
            Ok(text) => (text, false),
            Err(err) => {
                tracing::warn!(error = %err, "Text generation failed, using fallback reply");
                (self.config.fallback_response.clone(), true)
            }
        };

        self.record(&mut context, Message::assistant(response.clone(), Timestamp::now()));

        tracing::debug!(
            %stage,
            goal_progress = context.metrics.goal_progress,
            message_count = context.metrics.message_count,
            fallback_used,
            "Turn complete"
        );

        TurnOutcome {
            response,
            analysis: TurnAnalysis {
                tone,
                current_stage: stage,
                goal_progress: context.metrics.goal_progress,
            },
            context,
            fallback_used,
        }
    }

    /// Updates metrics for `message`, then appends it.
    fn record(&self, context: &mut ConversationContext, message: Message) {
        context.metrics = self.metrics_tracker.update(context, &message);
        context.messages.push(message);
    }

    async fn generate(&self, request: CompletionRequest) -> Result<String, AIError> {
        let call = self.ai_provider.complete(request);
        let completion = match self.generation_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| AIError::Timeout {
                    timeout_secs: u32::try_from(limit.as_secs()).unwrap_or(u32::MAX),
                })??,
            None => call.await?,
        };
        if completion.content.trim().is_empty() {
            return Err(AIError::EmptyResponse);
        }
        Ok(completion.content)
    }
}

impl From<MessageRole> for ports::MessageRole {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::User => ports::MessageRole::User,
            MessageRole::Assistant => ports::MessageRole::Assistant,
        }
    }
}

impl std::fmt::Debug for ConversationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationEngine")
            .field("provider", &self.ai_provider.provider_info().name)
            .field("config", &self.config)
            .field("generation_timeout", &self.generation_timeout)
            .finish_non_exhaustive()
    }
}
