//! # Workout Model
//!
//! The hierarchical workout document shared by the editor and the CLI.
//!
//! ```text
//! Workout
//!  └─ Block*
//!      ├─ exercises: Exercise*        (block lane)
//!      └─ supersets: Superset*
//!          └─ exercises: Exercise*    (superset lane)
//! ```
//!
//! Documents arriving from upstream producers may be incomplete: ids can be
//! missing and lists can be `null`. Deserialization maps both to their empty
//! value so the normalizer only ever has to fill in empty ids.

pub mod patch;
mod serde_helpers;
pub mod visitor;
pub mod workout;

pub use patch::{BlockPatch, ExercisePatch, SupersetPatch};
pub use visitor::{walk_block, walk_superset, walk_workout, NodePath, Visitor, VisitorMut};
pub use workout::{Block, BlockStructure, Exercise, Superset, Workout};
