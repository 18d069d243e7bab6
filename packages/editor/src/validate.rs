//! Invariant checks for documents about to leave the editor.

use std::collections::HashMap;

use thiserror::Error;
use workout_model::{NodePath, Workout};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{path}: missing id")]
    MissingId { path: NodePath },

    #[error("{path}: duplicate id '{id}' (first used at {first})")]
    DuplicateId {
        id: String,
        path: NodePath,
        first: NodePath,
    },
}

/// Check that every node has a non-empty id unique across the document
pub fn validate(doc: &Workout) -> Result<(), Vec<InvariantViolation>> {
    let mut first_seen: HashMap<&str, NodePath> = HashMap::new();
    let mut violations = Vec::new();

    for (path, id) in doc.nodes() {
        if id.is_empty() {
            violations.push(InvariantViolation::MissingId { path });
            continue;
        }

        if let Some(first) = first_seen.get(id) {
            violations.push(InvariantViolation::DuplicateId {
                id: id.to_string(),
                path,
                first: *first,
            });
        } else {
            first_seen.insert(id, path);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
