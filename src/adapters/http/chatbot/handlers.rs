//! HTTP handlers for chatbot endpoints.
//!
//! These handlers connect Axum routes to the chat application handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::chat::{
    ChatError, ClearConversationHandler, GetConversationHandler, SendChatMessageCommand,
    SendChatMessageHandler,
};
use crate::domain::conversation::{ConversationContext, ConversationEngine};
use crate::domain::foundation::UserId;
use crate::ports::ContextStore;

use super::dto::{ChatData, ChatRequest, ClearData, ClearRequest, ErrorResponse, SuccessResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for chatbot handlers.
#[derive(Clone)]
pub struct ChatAppState {
    pub send_message: Arc<SendChatMessageHandler>,
    pub get_conversation: Arc<GetConversationHandler>,
    pub clear_conversation: Arc<ClearConversationHandler>,
}

impl ChatAppState {
    /// Creates the state from an engine and the store contexts live in.
    pub fn new(engine: Arc<ConversationEngine>, store: Arc<dyn ContextStore>) -> Self {
        Self {
            send_message: Arc::new(SendChatMessageHandler::new(engine, store.clone())),
            get_conversation: Arc::new(GetConversationHandler::new(store.clone())),
            clear_conversation: Arc::new(ClearConversationHandler::new(store)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/chatbot/chat
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/chatbot/chat - Run one conversation turn.
///
/// # Errors
/// - 400 Bad Request: missing or blank message, bad user id, unreadable body
/// - 422 Unprocessable Entity: supplied context is malformed
pub async fn send_chat_message(
    State(state): State<ChatAppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ChatApiError> {
    let Json(request) = body.map_err(|e| ChatApiError::BadRequest(e.body_text()))?;

    if request.message.trim().is_empty() {
        return Err(ChatApiError::BadRequest("Message is required".to_string()));
    }
    let user_id = parse_user_id(request.user_id)?;

    let mut cmd = SendChatMessageCommand::new(user_id, request.message);
    if let Some(raw) = request.context {
        let context: ConversationContext = serde_json::from_value(raw)
            .map_err(|e| ChatApiError::MalformedContext(e.to_string()))?;
        cmd = cmd.with_context(context);
    }

    let outcome = state.send_message.handle(cmd).await?;

    let data = ChatData {
        response: outcome.response,
        context: outcome.context,
        analysis: outcome.analysis,
    };
    Ok((StatusCode::OK, Json(SuccessResponse::new(data))))
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/chatbot/clear
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/chatbot/clear - Forget a user's conversation.
pub async fn clear_conversation(
    State(state): State<ChatAppState>,
    body: Result<Json<ClearRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ChatApiError> {
    let Json(request) = body.map_err(|e| ChatApiError::BadRequest(e.body_text()))?;
    let user_id = parse_user_id(request.user_id)?;

    let cleared = state.clear_conversation.handle(&user_id).await?;

    Ok((StatusCode::OK, Json(SuccessResponse::new(ClearData { cleared }))))
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /api/chatbot/conversations/:user_id
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/chatbot/conversations/:user_id - Get the stored conversation.
///
/// # Errors
/// - 404 Not Found: nothing stored for the user
pub async fn get_conversation(
    State(state): State<ChatAppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ChatApiError> {
    let user_id = parse_user_id(user_id)?;

    let context = state
        .get_conversation
        .handle(&user_id)
        .await?
        .ok_or_else(|| ChatApiError::NotFound("Conversation".to_string(), user_id.to_string()))?;

    Ok((StatusCode::OK, Json(SuccessResponse::new(context))))
}

/// GET /health - Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

fn parse_user_id(raw: String) -> Result<UserId, ChatApiError> {
    UserId::new(raw).map_err(|e| ChatApiError::BadRequest(e.to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for chatbot endpoints.
#[derive(Debug)]
pub enum ChatApiError {
    BadRequest(String),
    MalformedContext(String),
    NotFound(String, String),
    Internal(String),
}

impl From<ChatError> for ChatApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::InvalidInput(msg) => ChatApiError::BadRequest(msg),
            ChatError::MalformedContext(msg) => ChatApiError::MalformedContext(msg),
            ChatError::Storage(msg) => ChatApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ChatApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::invalid_input(msg))
            }
            ChatApiError::MalformedContext(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::malformed_context(msg),
            ),
            ChatApiError::NotFound(resource, id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(&resource, &id))
            }
            ChatApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_errors_map_to_statuses() {
        let cases = [
            (ChatError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (
                ChatError::MalformedContext("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (ChatError::Storage("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            let response = ChatApiError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn not_found_maps_to_404() {
        let response =
            ChatApiError::NotFound("Conversation".into(), "u1".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn blank_user_id_is_bad_request() {
        assert!(matches!(
            parse_user_id("   ".to_string()),
            Err(ChatApiError::BadRequest(_))
        ));
    }
}
