//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Wingman domain.

mod ids;
mod timestamp;
mod unit_interval;
mod errors;

pub use ids::{UserId, MAX_USER_ID_LENGTH};
pub use timestamp::Timestamp;
pub use unit_interval::{clamp_unit, is_unit};
pub use errors::{ErrorCode, ValidationError};
