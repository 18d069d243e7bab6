//! # Undo/Redo Stack
//!
//! Tracks mutation history and enables undo/redo operations.
//!
//! ## Design
//!
//! - Documents are immutable values, so history stores snapshots instead of
//!   inverse mutations: each entry keeps the document before and after
//! - Undo hands back the `before` snapshot, redo the `after` snapshot; redo
//!   never re-runs a mutation, so ids allocated the first time are kept
//! - New mutations clear the redo stack
//! - Supports batched operations (group multiple mutations as one undo step)
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! let editor = Editor::new();
//!
//! let doc = stack.apply(&editor, &doc, &Mutation::AddBlock)?;
//!
//! let previous = stack.undo().unwrap();
//! let again = stack.redo().unwrap();
//! ```

use chrono::{DateTime, Utc};
use workout_model::Workout;

use crate::ids::IdAllocator;
use crate::mutations::{Editor, Mutation, MutationError};

/// A group of mutations that should be undone/redone together
#[derive(Debug, Clone)]
pub struct MutationBatch {
    /// The mutations in this batch (in application order)
    pub mutations: Vec<Mutation>,

    /// Document before the first mutation
    pub before: Workout,

    /// Document after the last mutation
    pub after: Workout,

    /// Optional description of this batch
    pub description: Option<String>,

    /// When the last mutation of the batch was recorded
    pub recorded_at: DateTime<Utc>,
}

impl MutationBatch {
    /// Create a single-mutation batch
    pub fn single(mutation: Mutation, before: Workout, after: Workout) -> Self {
        Self {
            mutations: vec![mutation],
            before,
            after,
            description: None,
            recorded_at: Utc::now(),
        }
    }

    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Batch under construction between `begin_batch` and `end_batch`
#[derive(Debug)]
struct OpenBatch {
    description: Option<String>,
    batch: Option<MutationBatch>,
}

/// Undo/redo stack for document editing
#[derive(Debug)]
pub struct UndoStack {
    /// Stack of applied mutations (most recent last)
    undo_stack: Vec<MutationBatch>,

    /// Stack of undone mutations (most recent last)
    redo_stack: Vec<MutationBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<OpenBatch>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Apply a mutation and record it for undo
    pub fn apply<A: IdAllocator>(
        &mut self,
        editor: &Editor<A>,
        doc: &Workout,
        mutation: &Mutation,
    ) -> Result<Workout, MutationError> {
        let next = editor.apply(doc, mutation)?;
        self.record(mutation.clone(), doc, &next);
        Ok(next)
    }

    /// Record a mutation that has already been applied
    pub fn record(&mut self, mutation: Mutation, before: &Workout, after: &Workout) {
        if let Some(open) = &mut self.current_batch {
            match &mut open.batch {
                Some(batch) => {
                    batch.mutations.push(mutation);
                    batch.after = after.clone();
                    batch.recorded_at = Utc::now();
                }
                None => {
                    open.batch = Some(MutationBatch::single(mutation, before.clone(), after.clone()));
                }
            }
        } else {
            let batch = MutationBatch::single(mutation, before.clone(), after.clone());
            self.push_batch(batch);
        }
    }

    /// Start a batch of mutations (will be undone/redone together)
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(OpenBatch {
            description: None,
            batch: None,
        });
    }

    /// End the current batch and push to undo stack
    pub fn end_batch(&mut self) {
        if let Some(open) = self.current_batch.take() {
            if let Some(mut batch) = open.batch {
                batch.description = open.description;
                self.push_batch(batch);
            }
        }
    }

    /// Drop the current batch without recording it
    ///
    /// Returns the document from before the batch started, if anything was
    /// recorded in it.
    pub fn discard_batch(&mut self) -> Option<Workout> {
        self.current_batch
            .take()
            .and_then(|open| open.batch)
            .map(|batch| batch.before)
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(open) = &mut self.current_batch {
            open.description = Some(description.into());
        }
    }

    /// Push a batch to the undo stack
    fn push_batch(&mut self, batch: MutationBatch) {
        self.undo_stack.push(batch);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // Clear redo stack (new action invalidates future)
        self.redo_stack.clear();
    }

    /// Undo the most recent mutation/batch, returning the document to restore
    pub fn undo(&mut self) -> Option<Workout> {
        self.end_batch();

        let batch = self.undo_stack.pop()?;
        let restored = batch.before.clone();
        self.redo_stack.push(batch);
        Some(restored)
    }

    /// Redo the most recently undone mutation/batch, returning the document to restore
    pub fn redo(&mut self) -> Option<Workout> {
        let batch = self.redo_stack.pop()?;
        let restored = batch.after.clone();
        self.undo_stack.push(batch);
        Some(restored)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    /// Recorded batches, oldest first
    pub fn entries(&self) -> &[MutationBatch] {
        &self.undo_stack
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdGenerator;
    use crate::lanes::ExerciseLocation;

    fn editor() -> Editor<IdGenerator> {
        Editor::with_allocator(IdGenerator::from_seed("u"))
    }

    #[test]
    fn test_undo_stack_creation() {
        let stack = UndoStack::new();
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 0);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_apply_undo_redo() {
        let editor = editor();
        let mut stack = UndoStack::new();
        let doc = Workout::new("Test", "manual");

        let next = stack.apply(&editor, &doc, &Mutation::AddBlock).unwrap();
        assert_eq!(next.blocks.len(), 1);
        assert!(stack.can_undo());

        let undone = stack.undo().unwrap();
        assert_eq!(undone, doc);
        assert!(stack.can_redo());

        let redone = stack.redo().unwrap();
        assert_eq!(redone, next);
        // Redo restores the snapshot, so the block keeps its id
        assert_eq!(redone.blocks[0].id, "u-1");
    }

    #[test]
    fn test_failed_mutation_is_not_recorded() {
        let editor = editor();
        let mut stack = UndoStack::new();
        let doc = Workout::default();

        let result = stack.apply(
            &editor,
            &doc,
            &Mutation::MoveExercise {
                source: ExerciseLocation::in_block(0, 0),
                target: ExerciseLocation::in_block(0, 0),
            },
        );

        assert!(result.is_err());
        assert!(!stack.can_undo());
    }

    #[test]
    fn test_batched_mutations() {
        let editor = editor();
        let mut stack = UndoStack::new();
        let doc = Workout::default();

        stack.begin_batch();
        stack.set_batch_description("Add two blocks");
        let doc1 = stack.apply(&editor, &doc, &Mutation::AddBlock).unwrap();
        let doc2 = stack.apply(&editor, &doc1, &Mutation::AddBlock).unwrap();
        stack.end_batch();

        assert_eq!(stack.undo_levels(), 1);
        assert_eq!(stack.undo_description(), Some("Add two blocks"));
        assert_eq!(stack.entries()[0].mutations.len(), 2);

        // Undo reverts both
        assert_eq!(stack.undo().unwrap(), doc);
        assert_eq!(stack.redo().unwrap(), doc2);
    }

    #[test]
    fn test_discard_batch() {
        let editor = editor();
        let mut stack = UndoStack::new();
        let doc = Workout::default();

        stack.begin_batch();
        stack.apply(&editor, &doc, &Mutation::AddBlock).unwrap();

        assert_eq!(stack.discard_batch(), Some(doc));
        assert_eq!(stack.undo_levels(), 0);
    }

    #[test]
    fn test_new_mutation_clears_redo() {
        let editor = editor();
        let mut stack = UndoStack::new();
        let doc = Workout::default();

        stack.apply(&editor, &doc, &Mutation::AddBlock).unwrap();
        let doc = stack.undo().unwrap();
        assert_eq!(stack.redo_levels(), 1);

        stack.apply(&editor, &doc, &Mutation::AddBlock).unwrap();
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_max_levels_enforced() {
        let editor = editor();
        let mut stack = UndoStack::with_max_levels(2);
        let mut doc = Workout::default();

        for _ in 0..3 {
            doc = stack.apply(&editor, &doc, &Mutation::AddBlock).unwrap();
        }

        // Should only keep 2 (max levels)
        assert_eq!(stack.undo_levels(), 2);
    }
}
