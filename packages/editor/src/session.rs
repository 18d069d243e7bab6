//! # Edit Session Management
//!
//! An EditSession is the caller side of the editor: it holds the one current
//! document, feeds it into each mutation and stores the result. Opening a
//! session normalizes the document so every node can be addressed by id.
//!
//! A mutation that fails leaves the session exactly as it was. A mutation
//! that succeeds without changing anything (such as a repeated delete) is not
//! recorded in history and does not bump the version.

use std::path::{Path, PathBuf};

use workout_model::Workout;

use crate::ids::{IdAllocator, IdGenerator};
use crate::mutations::{Editor, Mutation};
use crate::normalize::normalize_owned;
use crate::undo_stack::UndoStack;
use crate::validate::validate;
use crate::EditorError;

/// Single-user edit session over one workout document
#[derive(Debug)]
pub struct EditSession<A: IdAllocator = IdGenerator> {
    editor: Editor<A>,
    workout: Workout,
    history: UndoStack,

    /// Backing file (if any)
    path: Option<PathBuf>,

    /// Current version number (increments on each change)
    version: u64,

    dirty: bool,
}

/// Outcome of applying a mutation through a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationResult {
    /// Version after the mutation
    pub version: u64,

    /// False when the mutation was a tolerated no-op
    pub changed: bool,
}

impl EditSession<IdGenerator> {
    /// Open an in-memory session with a fresh editor
    pub fn open(workout: Workout) -> Self {
        Self::with_editor(Editor::new(), workout)
    }

    /// Load a workout JSON file (file-backed)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        Self::load_with_editor(Editor::new(), path)
    }
}

impl<A: IdAllocator> EditSession<A> {
    pub fn with_editor(editor: Editor<A>, workout: Workout) -> Self {
        let workout = normalize_owned(workout, editor.allocator());
        tracing::info!(
            "Opened session for '{}' ({} blocks, {} exercises)",
            workout.title,
            workout.blocks.len(),
            workout.exercise_count()
        );

        Self {
            editor,
            workout,
            history: UndoStack::new(),
            path: None,
            version: 0,
            dirty: false,
        }
    }

    pub fn load_with_editor(editor: Editor<A>, path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let workout: Workout = serde_json::from_str(&source)?;

        let mut session = Self::with_editor(editor, workout);
        session.path = Some(path.to_path_buf());
        Ok(session)
    }

    /// Replace the history with one keeping at most `max_levels` entries
    pub fn with_undo_levels(mut self, max_levels: usize) -> Self {
        self.history = UndoStack::with_max_levels(max_levels);
        self
    }

    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    pub fn into_workout(self) -> Workout {
        self.workout
    }

    pub fn editor(&self) -> &Editor<A> {
        &self.editor
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Apply a mutation to the current document
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let next = self.editor.apply(&self.workout, &mutation)?;

        if next == self.workout {
            return Ok(MutationResult {
                version: self.version,
                changed: false,
            });
        }

        self.history.record(mutation, &self.workout, &next);
        self.replace(next);

        Ok(MutationResult {
            version: self.version,
            changed: true,
        })
    }

    /// Apply several mutations as one undo step
    ///
    /// All or nothing: if any mutation fails the document is restored to its
    /// state before the first one.
    pub fn apply_all(
        &mut self,
        mutations: impl IntoIterator<Item = Mutation>,
        description: Option<&str>,
    ) -> Result<MutationResult, EditorError> {
        let start_version = self.version;
        let start_dirty = self.dirty;
        self.history.begin_batch();
        if let Some(description) = description {
            self.history.set_batch_description(description);
        }

        for mutation in mutations {
            if let Err(err) = self.apply(mutation) {
                if let Some(before) = self.history.discard_batch() {
                    self.workout = before;
                    self.version = start_version;
                    self.dirty = start_dirty;
                }
                tracing::warn!("Batch rolled back: {}", err);
                return Err(err);
            }
        }

        self.history.end_batch();
        Ok(MutationResult {
            version: self.version,
            changed: self.version != start_version,
        })
    }

    /// Undo the last change; returns false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.replace(previous);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone change; returns false when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                self.replace(next);
                true
            }
            None => false,
        }
    }

    /// Save to the file the session was loaded from
    pub fn save(&mut self) -> Result<(), EditorError> {
        let path = self.path.clone().ok_or(EditorError::NotFileBacked)?;
        self.save_to(path)
    }

    /// Validate and write pretty JSON to `path`, making it the backing file
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        validate(&self.workout)?;

        let path = path.as_ref();
        std::fs::write(path, serde_json::to_string_pretty(&self.workout)?)?;
        tracing::info!("Saved '{}' to {}", self.workout.title, path.display());

        self.path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }

    fn replace(&mut self, workout: Workout) {
        self.workout = workout;
        self.version += 1;
        self.dirty = true;
    }
}
