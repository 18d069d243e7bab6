//! # Workout Mutations
//!
//! Structural operations on a workout document.
//!
//! ## Design Principles
//!
//! 1. **Pure**: every operation takes `&Workout` and returns a new `Workout`;
//!    the input is never touched, so older documents stay valid snapshots
//! 2. **Positional**: nodes are addressed by index, the way a drop target
//!    reports them
//! 3. **Strict on sources, lenient on deletes**: a location that must exist
//!    and does not is a [`MutationError`]; deleting something already gone
//!    succeeds without changing anything
//!
//! ## Mutation Semantics
//!
//! ### MoveBlock
//! - Indices are measured against the list before removal
//! - Moving forward lands one slot left of `target_index`
//!
//! ### MoveExercise
//! - Target index is used as given (no adjustment)
//! - A target superset one past the end is created on the fly
//! - Moving onto its own position is a no-op
//!
//! ### Delete*
//! - Missing targets are no-ops

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use workout_model::{BlockPatch, Exercise, ExercisePatch, Superset, SupersetPatch, Workout};

use crate::defaults::EditorDefaults;
use crate::ids::{IdAllocator, IdGenerator};
use crate::lanes::ExerciseLocation;
use crate::normalize::normalize;

/// Structural operations (one per editing gesture)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Reorder the top-level block list
    MoveBlock {
        source_index: usize,
        target_index: usize,
    },

    /// Move an exercise between (or within) lanes
    MoveExercise {
        source: ExerciseLocation,
        target: ExerciseLocation,
    },

    /// Append a block labeled "Block N"
    AddBlock,

    DeleteBlock {
        block_index: usize,
    },

    UpdateBlock {
        block_index: usize,
        patch: BlockPatch,
    },

    /// Append an empty superset to a block
    AddSuperset {
        block_index: usize,
    },

    DeleteSuperset {
        block_index: usize,
        superset_index: usize,
    },

    UpdateSuperset {
        block_index: usize,
        superset_index: usize,
        patch: SupersetPatch,
    },

    /// Append a new exercise with default prescription
    AddExercise {
        block_index: usize,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        superset_index: Option<usize>,
    },

    DeleteExercise {
        block_index: usize,
        exercise_index: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        superset_index: Option<usize>,
    },

    UpdateExercise {
        block_index: usize,
        exercise_index: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        superset_index: Option<usize>,
        patch: ExercisePatch,
    },

    RenameWorkout {
        title: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Block index {index} out of range (blocks: {len})")]
    BlockIndexOutOfRange { index: usize, len: usize },

    #[error("Superset index {index} out of range in block {block} (supersets: {len})")]
    SupersetIndexOutOfRange { block: usize, index: usize, len: usize },

    #[error("Exercise index {index} out of range (lane length: {len})")]
    ExerciseIndexOutOfRange { index: usize, len: usize },

    #[error("Insert index {index} out of range (lane length: {len})")]
    InsertIndexOutOfRange { index: usize, len: usize },
}

impl Mutation {
    /// Get a debug name for this mutation
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::MoveBlock { .. } => "move_block",
            Mutation::MoveExercise { .. } => "move_exercise",
            Mutation::AddBlock => "add_block",
            Mutation::DeleteBlock { .. } => "delete_block",
            Mutation::UpdateBlock { .. } => "update_block",
            Mutation::AddSuperset { .. } => "add_superset",
            Mutation::DeleteSuperset { .. } => "delete_superset",
            Mutation::UpdateSuperset { .. } => "update_superset",
            Mutation::AddExercise { .. } => "add_exercise",
            Mutation::DeleteExercise { .. } => "delete_exercise",
            Mutation::UpdateExercise { .. } => "update_exercise",
            Mutation::RenameWorkout { .. } => "rename_workout",
        }
    }

    /// Moves and updates never change how many exercises the document holds
    pub fn conserves_exercises(&self) -> bool {
        !matches!(
            self,
            Mutation::AddExercise { .. }
                | Mutation::DeleteExercise { .. }
                | Mutation::DeleteSuperset { .. }
                | Mutation::DeleteBlock { .. }
        )
    }
}

/// Applies mutations to workout documents
///
/// Holds no document. It owns the id allocator used for nodes it creates and
/// the defaults those nodes get.
#[derive(Debug)]
pub struct Editor<A: IdAllocator = IdGenerator> {
    ids: A,
    defaults: EditorDefaults,
}

impl Editor<IdGenerator> {
    /// Editor with a randomly seeded [`IdGenerator`]
    pub fn new() -> Self {
        Self::with_allocator(IdGenerator::new())
    }
}

impl Default for Editor<IdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: IdAllocator> Editor<A> {
    pub fn with_allocator(ids: A) -> Self {
        Self {
            ids,
            defaults: EditorDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: EditorDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn allocator(&self) -> &A {
        &self.ids
    }

    pub fn defaults(&self) -> &EditorDefaults {
        &self.defaults
    }

    /// Fill in missing ids with this editor's allocator
    pub fn normalize<'a>(&self, doc: &'a Workout) -> Cow<'a, Workout> {
        normalize(doc, &self.ids)
    }

    /// Apply a mutation, producing the next document
    pub fn apply(&self, doc: &Workout, mutation: &Mutation) -> Result<Workout, MutationError> {
        tracing::debug!("Applying {}: {:?}", mutation.name(), mutation);

        match mutation {
            Mutation::MoveBlock {
                source_index,
                target_index,
            } => self.move_block(doc, *source_index, *target_index),

            Mutation::MoveExercise { source, target } => self.move_exercise(doc, *source, *target),

            Mutation::AddBlock => Ok(self.add_block(doc)),

            Mutation::DeleteBlock { block_index } => Ok(self.delete_block(doc, *block_index)),

            Mutation::UpdateBlock { block_index, patch } => self.update_block(doc, *block_index, patch),

            Mutation::AddSuperset { block_index } => self.add_superset(doc, *block_index),

            Mutation::DeleteSuperset {
                block_index,
                superset_index,
            } => Ok(self.delete_superset(doc, *block_index, *superset_index)),

            Mutation::UpdateSuperset {
                block_index,
                superset_index,
                patch,
            } => self.update_superset(doc, *block_index, *superset_index, patch),

            Mutation::AddExercise {
                block_index,
                name,
                superset_index,
            } => self.add_exercise(doc, *block_index, name, *superset_index),

            Mutation::DeleteExercise {
                block_index,
                exercise_index,
                superset_index,
            } => Ok(self.delete_exercise(doc, *block_index, *exercise_index, *superset_index)),

            Mutation::UpdateExercise {
                block_index,
                exercise_index,
                superset_index,
                patch,
            } => self.update_exercise(doc, *block_index, *exercise_index, patch, *superset_index),

            Mutation::RenameWorkout { title } => Ok(self.rename_workout(doc, title)),
        }
    }

    /// Empty superset with a fresh id and the default rest
    pub(crate) fn new_superset(&self) -> Superset {
        Superset::new(self.ids.allocate(), Some(self.defaults.superset_rest_sec))
    }

    /// Exercise with a fresh id and the default prescription
    pub(crate) fn new_exercise(&self, name: &str) -> Exercise {
        Exercise {
            sets: Some(self.defaults.exercise_sets),
            reps: Some(self.defaults.exercise_reps),
            rest_sec: Some(self.defaults.exercise_rest_sec),
            kind: Some(self.defaults.exercise_type.clone()),
            ..Exercise::new(self.ids.allocate(), name)
        }
    }
}
