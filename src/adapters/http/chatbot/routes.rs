//! Axum routes for chatbot endpoints.
//!
//! Defines the routing table for the caller-facing API.

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::timeout::TimeoutLayer;

use super::handlers::{
    clear_conversation, get_conversation, health, send_chat_message, ChatAppState,
};

/// Creates routes for chatbot endpoints.
///
/// REST Endpoints:
/// - POST /chat - Run one conversation turn
/// - POST /clear - Forget a user's conversation
/// - GET /conversations/:user_id - Get the stored conversation
///
/// `request_timeout` bounds the storage routes only. A turn is never cut off
/// from outside: the engine bounds its own generation call and answers with
/// the fallback reply, so the user message is always recorded.
pub fn chat_routes(request_timeout: Duration) -> Router<ChatAppState> {
    Router::new()
        .route("/chat", post(send_chat_message))
        .route(
            "/clear",
            post(clear_conversation).layer(TimeoutLayer::new(request_timeout)),
        )
        .route(
            "/conversations/:user_id",
            get(get_conversation).layer(TimeoutLayer::new(request_timeout)),
        )
}

/// Combined router with chatbot routes under /api/chatbot plus /health.
pub fn chat_router(request_timeout: Duration) -> Router<ChatAppState> {
    Router::new()
        .nest("/api/chatbot", chat_routes(request_timeout))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::sentiment::AfinnLexicon;
    use crate::adapters::storage::InMemoryContextStore;
    use crate::domain::conversation::{ConversationConfig, ConversationEngine};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> ChatAppState {
        let engine = ConversationEngine::new(
            Arc::new(MockAIProvider::new()),
            Arc::new(AfinnLexicon::new()),
            ConversationConfig::default(),
        );
        ChatAppState::new(Arc::new(engine), Arc::new(InMemoryContextStore::new()))
    }

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn health_responds_ok() {
        let app = chat_router(TIMEOUT).with_state(state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_conversation_is_not_found() {
        let app = chat_router(TIMEOUT).with_state(state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/chatbot/conversations/nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
