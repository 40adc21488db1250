use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Programming-contract violation by a caller.
    InvalidArgument,
    /// Unrecognized input that was recovered locally.
    DegradedInput,
    InvalidContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("page index {index} out of range for menu with {page_count} pages")]
    PageOutOfRange { index: usize, page_count: usize },
    #[error("no gallery item with id {}", .id.0)]
    UnknownItem { id: ItemId },
    #[error("menu must contain at least one page")]
    EmptyMenu,
    #[error("gallery item id {} appears more than once", .id.0)]
    DuplicateItemId { id: ItemId },
}

impl ViewError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorReport {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&ViewError> for ErrorReport {
    fn from(value: &ViewError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}
