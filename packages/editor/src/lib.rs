//! # Workout Editor
//!
//! In-memory editing engine for workout documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ upstream: imported Workout (ids may be      │
//! │ missing, lists may be null)                 │
//! └─────────────────────────────────────────────┘
//!                     ↓ normalize
//! ┌─────────────────────────────────────────────┐
//! │ editor: pure mutations                      │
//! │  - Reorder blocks, move exercises           │
//! │  - Add/delete/update nodes                  │
//! │  - Materialize supersets on demand          │
//! └─────────────────────────────────────────────┘
//!                     ↓ validate
//! ┌─────────────────────────────────────────────┐
//! │ downstream: export / save                   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Caller owns the document**: the editor keeps no document state
//! 2. **Copy-on-write**: every operation returns a new `Workout`; the input
//!    stays a valid snapshot
//! 3. **Global ids**: ids are unique across the whole tree, not per level
//! 4. **Injected allocator**: new ids come from the [`IdAllocator`] the
//!    editor was built with
//!
//! ## Usage
//!
//! ```rust,ignore
//! use workout_editor::{Editor, ExerciseLocation};
//!
//! let editor = Editor::new();
//! let doc = editor.normalize(&imported).into_owned();
//!
//! // Drop the second exercise onto a "new superset" target
//! let doc = editor.move_exercise(
//!     &doc,
//!     ExerciseLocation::in_block(0, 1),
//!     ExerciseLocation::in_superset(0, doc.blocks[0].supersets.len(), 0),
//! )?;
//! ```
//!
//! ### With history
//!
//! ```rust,ignore
//! use workout_editor::{EditSession, Mutation};
//!
//! let mut session = EditSession::load("push-day.json")?;
//! session.apply(Mutation::AddBlock)?;
//! session.undo();
//! session.save()?;
//! ```

mod defaults;
mod edits;
mod errors;
mod ids;
mod lanes;
mod mutations;
mod normalize;
mod reorder;
mod session;
mod undo_stack;
mod validate;

pub use defaults::EditorDefaults;
pub use errors::EditorError;
pub use ids::{IdAllocator, IdGenerator};
pub use lanes::{insertion_index, ExerciseLocation};
pub use mutations::{Editor, Mutation, MutationError};
pub use normalize::{is_normalized, normalize, normalize_owned};
pub use session::{EditSession, MutationResult};
pub use undo_stack::{MutationBatch, UndoStack};
pub use validate::{validate, InvariantViolation};

// Re-export the model for convenience
pub use workout_model as model;
pub use workout_model::{Block, BlockPatch, Exercise, ExercisePatch, Superset, SupersetPatch, Workout};
