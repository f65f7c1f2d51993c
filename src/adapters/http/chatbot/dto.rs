//! HTTP DTOs for chatbot endpoints.
//!
//! The conversation context travels in its external JSON representation,
//! so it is carried as-is rather than mirrored field by field.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::{ConversationContext, TurnAnalysis};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/chatbot/chat`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
    /// Raw context; decoded separately so a bad shape reports as a malformed context.
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

/// Body of `POST /api/chatbot/clear`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearRequest {
    pub user_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Success envelope: `{status: "success", data}`.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Result of a chat turn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatData {
    pub response: String,
    pub context: ConversationContext,
    pub analysis: TurnAnalysis,
}

/// Result of clearing a conversation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearData {
    /// Whether a stored conversation existed.
    pub cleared: bool,
}

/// Error envelope: `{status: "error", error: {code, message}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            status: "error",
            error: ErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new("INVALID_INPUT", message)
    }

    pub fn malformed_context(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_CONTEXT", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}
