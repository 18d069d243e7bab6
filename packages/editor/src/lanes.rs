//! Lane addressing.
//!
//! An exercise lives in one of two kinds of lane: a block's own `exercises`
//! list, or the `exercises` list of one of that block's supersets. Lanes are
//! addressed by position only: `(block_index, superset_index?)`.

use serde::{Deserialize, Serialize};
use workout_model::{Block, Exercise, Superset, Workout};

use crate::mutations::MutationError;

/// Where an exercise is, or where it should go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExerciseLocation {
    pub block_index: usize,
    pub exercise_index: usize,

    /// `None` is the block-level lane
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset_index: Option<usize>,
}

impl ExerciseLocation {
    pub fn in_block(block_index: usize, exercise_index: usize) -> Self {
        Self {
            block_index,
            exercise_index,
            superset_index: None,
        }
    }

    pub fn in_superset(block_index: usize, superset_index: usize, exercise_index: usize) -> Self {
        Self {
            block_index,
            exercise_index,
            superset_index: Some(superset_index),
        }
    }

    pub fn same_lane(&self, other: &ExerciseLocation) -> bool {
        self.block_index == other.block_index && self.superset_index == other.superset_index
    }

    /// Target for a same-lane drop expressed against the lane before removal
    ///
    /// `drop_index` is the slot the item is dropped in front of, `0..=len`.
    pub fn drop_in_same_lane(&self, drop_index: usize) -> ExerciseLocation {
        ExerciseLocation {
            exercise_index: insertion_index(self.exercise_index, drop_index),
            ..*self
        }
    }
}

/// Index to insert at after removing the item at `source_index` from the same list
///
/// `drop_index` is computed against the list before removal. Removing an item
/// shifts everything after it down by one, so drops past the source move one
/// slot left.
pub fn insertion_index(source_index: usize, drop_index: usize) -> usize {
    if source_index < drop_index {
        drop_index - 1
    } else {
        drop_index
    }
}

pub(crate) fn block(doc: &Workout, block_index: usize) -> Result<&Block, MutationError> {
    doc.blocks
        .get(block_index)
        .ok_or(MutationError::BlockIndexOutOfRange {
            index: block_index,
            len: doc.blocks.len(),
        })
}

pub(crate) fn block_mut(doc: &mut Workout, block_index: usize) -> Result<&mut Block, MutationError> {
    let len = doc.blocks.len();
    doc.blocks
        .get_mut(block_index)
        .ok_or(MutationError::BlockIndexOutOfRange {
            index: block_index,
            len,
        })
}

/// Existing lane, read-only
pub(crate) fn lane(
    block: &Block,
    block_index: usize,
    superset_index: Option<usize>,
) -> Result<&Vec<Exercise>, MutationError> {
    match superset_index {
        None => Ok(&block.exercises),
        Some(index) => block
            .supersets
            .get(index)
            .map(|superset| &superset.exercises)
            .ok_or(MutationError::SupersetIndexOutOfRange {
                block: block_index,
                index,
                len: block.supersets.len(),
            }),
    }
}

/// Existing lane, mutable
pub(crate) fn lane_mut(
    block: &mut Block,
    block_index: usize,
    superset_index: Option<usize>,
) -> Result<&mut Vec<Exercise>, MutationError> {
    match superset_index {
        None => Ok(&mut block.exercises),
        Some(index) => {
            let len = block.supersets.len();
            block
                .supersets
                .get_mut(index)
                .map(|superset| &mut superset.exercises)
                .ok_or(MutationError::SupersetIndexOutOfRange {
                    block: block_index,
                    index,
                    len,
                })
        }
    }
}

/// Lane for an insertion, creating the superset when it is one past the end
///
/// `superset_index == supersets.len()` appends `materialize()` and returns its
/// lane. Anything further out is an error; no gaps are ever created.
pub(crate) fn resolve_lane_mut(
    block: &mut Block,
    block_index: usize,
    superset_index: Option<usize>,
    materialize: impl FnOnce() -> Superset,
) -> Result<&mut Vec<Exercise>, MutationError> {
    if let Some(index) = superset_index {
        if index == block.supersets.len() {
            let superset = materialize();
            tracing::debug!(
                "Materialized superset {} at blocks[{}].supersets[{}]",
                superset.id,
                block_index,
                index
            );
            block.supersets.push(superset);
        }
    }

    lane_mut(block, block_index, superset_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_index_rule() {
        // Moving forward: slot shifts left by one after removal
        assert_eq!(insertion_index(0, 3), 2);
        assert_eq!(insertion_index(1, 2), 1);
        // Moving backward: unchanged
        assert_eq!(insertion_index(3, 0), 0);
        assert_eq!(insertion_index(2, 2), 2);
    }

    #[test]
    fn test_drop_in_same_lane() {
        let source = ExerciseLocation::in_superset(1, 0, 0);
        let target = source.drop_in_same_lane(3);

        assert_eq!(target, ExerciseLocation::in_superset(1, 0, 2));
        assert!(source.same_lane(&target));
    }

    #[test]
    fn test_resolve_lane_materializes_only_at_end() {
        let mut block = Block::new("b1", "Block 1");

        let lane = resolve_lane_mut(&mut block, 0, Some(0), || Superset::new("s1", Some(60))).unwrap();
        assert!(lane.is_empty());
        assert_eq!(block.supersets.len(), 1);
        assert_eq!(block.supersets[0].id, "s1");

        let err = resolve_lane_mut(&mut block, 0, Some(3), || Superset::new("s2", Some(60))).unwrap_err();
        assert_eq!(
            err,
            MutationError::SupersetIndexOutOfRange {
                block: 0,
                index: 3,
                len: 1
            }
        );
        assert_eq!(block.supersets.len(), 1);
    }

    #[test]
    fn test_location_json_shape() {
        let location: ExerciseLocation =
            serde_json::from_str(r#"{ "block_index": 0, "exercise_index": 2 }"#).unwrap();
        assert_eq!(location, ExerciseLocation::in_block(0, 2));
    }
}
