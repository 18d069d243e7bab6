use std::fmt;

use crate::workout::{Block, Exercise, Superset, Workout};

/// Position of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodePath {
    Block {
        block: usize,
    },
    Superset {
        block: usize,
        superset: usize,
    },
    /// `superset: None` is the block-level exercise lane
    Exercise {
        block: usize,
        superset: Option<usize>,
        exercise: usize,
    },
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodePath::Block { block } => write!(f, "blocks[{}]", block),
            NodePath::Superset { block, superset } => {
                write!(f, "blocks[{}].supersets[{}]", block, superset)
            }
            NodePath::Exercise {
                block,
                superset: None,
                exercise,
            } => write!(f, "blocks[{}].exercises[{}]", block, exercise),
            NodePath::Exercise {
                block,
                superset: Some(superset),
                exercise,
            } => write!(
                f,
                "blocks[{}].supersets[{}].exercises[{}]",
                block, superset, exercise
            ),
        }
    }
}

/// Visitor for traversing a workout immutably
///
/// Default implementations walk the whole tree: block exercises first, then
/// each superset and its exercises. Override specific visit_* methods to act
/// on nodes; call the matching walk_* function to keep descending.
pub trait Visitor<'a>: Sized {
    fn visit_workout(&mut self, workout: &'a Workout) {
        walk_workout(self, workout);
    }

    fn visit_block(&mut self, block_index: usize, block: &'a Block) {
        walk_block(self, block_index, block);
    }

    fn visit_superset(&mut self, block_index: usize, superset_index: usize, superset: &'a Superset) {
        walk_superset(self, block_index, superset_index, superset);
    }

    fn visit_exercise(&mut self, _path: NodePath, _exercise: &'a Exercise) {
        // Leaf node, no children to walk
    }
}

pub fn walk_workout<'a, V: Visitor<'a>>(visitor: &mut V, workout: &'a Workout) {
    for (index, block) in workout.blocks.iter().enumerate() {
        visitor.visit_block(index, block);
    }
}

pub fn walk_block<'a, V: Visitor<'a>>(visitor: &mut V, block_index: usize, block: &'a Block) {
    for (index, exercise) in block.exercises.iter().enumerate() {
        let path = NodePath::Exercise {
            block: block_index,
            superset: None,
            exercise: index,
        };
        visitor.visit_exercise(path, exercise);
    }

    for (index, superset) in block.supersets.iter().enumerate() {
        visitor.visit_superset(block_index, index, superset);
    }
}

pub fn walk_superset<'a, V: Visitor<'a>>(
    visitor: &mut V,
    block_index: usize,
    superset_index: usize,
    superset: &'a Superset,
) {
    for (index, exercise) in superset.exercises.iter().enumerate() {
        let path = NodePath::Exercise {
            block: block_index,
            superset: Some(superset_index),
            exercise: index,
        };
        visitor.visit_exercise(path, exercise);
    }
}

/// Mutable visitor for transforming a workout in place
///
/// Same traversal order as [`Visitor`]. Only ever used on a private copy;
/// documents handed to callers are never mutated.
pub trait VisitorMut: Sized {
    fn visit_workout_mut(&mut self, workout: &mut Workout) {
        walk_workout_mut(self, workout);
    }

    fn visit_block_mut(&mut self, block_index: usize, block: &mut Block) {
        walk_block_mut(self, block_index, block);
    }

    fn visit_superset_mut(&mut self, block_index: usize, superset_index: usize, superset: &mut Superset) {
        walk_superset_mut(self, block_index, superset_index, superset);
    }

    fn visit_exercise_mut(&mut self, _path: NodePath, _exercise: &mut Exercise) {
        // Leaf node, no children to walk
    }
}

pub fn walk_workout_mut<V: VisitorMut>(visitor: &mut V, workout: &mut Workout) {
    for (index, block) in workout.blocks.iter_mut().enumerate() {
        visitor.visit_block_mut(index, block);
    }
}

pub fn walk_block_mut<V: VisitorMut>(visitor: &mut V, block_index: usize, block: &mut Block) {
    for (index, exercise) in block.exercises.iter_mut().enumerate() {
        let path = NodePath::Exercise {
            block: block_index,
            superset: None,
            exercise: index,
        };
        visitor.visit_exercise_mut(path, exercise);
    }

    for (index, superset) in block.supersets.iter_mut().enumerate() {
        visitor.visit_superset_mut(block_index, index, superset);
    }
}

pub fn walk_superset_mut<V: VisitorMut>(
    visitor: &mut V,
    block_index: usize,
    superset_index: usize,
    superset: &mut Superset,
) {
    for (index, exercise) in superset.exercises.iter_mut().enumerate() {
        let path = NodePath::Exercise {
            block: block_index,
            superset: Some(superset_index),
            exercise: index,
        };
        visitor.visit_exercise_mut(path, exercise);
    }
}
