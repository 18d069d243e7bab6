//! Error types for the editor

use thiserror::Error;

use crate::mutations::MutationError;
use crate::validate::InvariantViolation;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document has {} invariant violation(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<InvariantViolation>),

    #[error("Session is not file-backed")]
    NotFileBacked,
}

fn summarize(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<InvariantViolation>> for EditorError {
    fn from(violations: Vec<InvariantViolation>) -> Self {
        EditorError::Invalid(violations)
    }
}
