use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Error, Debug, Clone)]
pub enum NotifyError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Missing required fields: requestId or userId")]
    MissingFields,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Failed to fetch user data: {0}")]
    UserLookup(String),
    #[error("Failed to fetch request data: {0}")]
    RequestLookup(String),
    #[error("{0}")]
    Delivery(String),
}

impl PartialEq for NotifyError {
    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}
