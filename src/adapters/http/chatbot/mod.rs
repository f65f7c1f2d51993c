//! HTTP adapter for chatbot endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ChatData, ChatRequest, ClearData, ClearRequest, ErrorResponse, SuccessResponse};
pub use handlers::{ChatApiError, ChatAppState};
pub use routes::{chat_router, chat_routes};
