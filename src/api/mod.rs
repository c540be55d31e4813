//! Careers REST API access.
//!
//! [`UserApi`] is the seam the application depends on; [`HttpUserApi`] is the
//! reqwest-backed implementation. Every failure, whether transport, HTTP status
//! or decoding, is normalized into one [`ApiError`] carrying a message that can
//! be shown to the user as-is.

pub mod http;

pub use http::HttpUserApi;

use crate::model::{Draft, User};

/// Backend used when no override is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Uniform API failure: a human-readable message and nothing else.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The three backend operations. Implementations make one attempt per call.
pub trait UserApi: Send + Sync {
    fn create_user(&self, draft: &Draft) -> Result<User, ApiError>;
    fn get_users(&self) -> Result<Vec<User>, ApiError>;
    fn get_user_by_id(&self, id: i64) -> Result<User, ApiError>;
}

/// Operation identity, used for default messages and log fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    CreateUser,
    GetUsers,
    GetUser,
}

impl Operation {
    pub fn default_message(self) -> &'static str {
        match self {
            Operation::CreateUser => "Failed to create user",
            Operation::GetUsers => "Failed to fetch users",
            Operation::GetUser => "Failed to fetch user",
        }
    }

    pub(crate) fn error(self) -> ApiError {
        ApiError::new(self.default_message())
    }
}
