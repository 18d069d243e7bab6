//! Add, delete and update operations.
//!
//! Adds and updates need their target to exist. Deletes do not: a missing
//! target returns an unchanged copy, since a UI can easily fire the same
//! delete twice.

use workout_model::{Block, BlockPatch, ExercisePatch, SupersetPatch, Workout};

use crate::ids::IdAllocator;
use crate::lanes;
use crate::mutations::{Editor, MutationError};

impl<A: IdAllocator> Editor<A> {
    /// Append a block labeled `Block {count + 1}` with empty lanes
    pub fn add_block(&self, doc: &Workout) -> Workout {
        let mut next = doc.clone();
        let label = format!("Block {}", next.blocks.len() + 1);
        next.blocks.push(Block::new(self.allocator().allocate(), label));
        next
    }

    pub fn delete_block(&self, doc: &Workout, block_index: usize) -> Workout {
        let mut next = doc.clone();
        if block_index < next.blocks.len() {
            next.blocks.remove(block_index);
        } else {
            tracing::warn!("delete_block: no block at {}, ignoring", block_index);
        }
        next
    }

    pub fn update_block(
        &self,
        doc: &Workout,
        block_index: usize,
        patch: &BlockPatch,
    ) -> Result<Workout, MutationError> {
        let mut next = doc.clone();
        patch.apply_to(lanes::block_mut(&mut next, block_index)?);
        Ok(next)
    }

    /// Append an empty superset with the default rest
    pub fn add_superset(&self, doc: &Workout, block_index: usize) -> Result<Workout, MutationError> {
        let mut next = doc.clone();
        let block = lanes::block_mut(&mut next, block_index)?;
        block.supersets.push(self.new_superset());
        Ok(next)
    }

    pub fn delete_superset(&self, doc: &Workout, block_index: usize, superset_index: usize) -> Workout {
        let mut next = doc.clone();
        match next.blocks.get_mut(block_index) {
            Some(block) if superset_index < block.supersets.len() => {
                block.supersets.remove(superset_index);
            }
            _ => tracing::warn!(
                "delete_superset: no superset at blocks[{}].supersets[{}], ignoring",
                block_index,
                superset_index
            ),
        }
        next
    }

    pub fn update_superset(
        &self,
        doc: &Workout,
        block_index: usize,
        superset_index: usize,
        patch: &SupersetPatch,
    ) -> Result<Workout, MutationError> {
        let mut next = doc.clone();
        let block = lanes::block_mut(&mut next, block_index)?;
        let len = block.supersets.len();
        let superset = block
            .supersets
            .get_mut(superset_index)
            .ok_or(MutationError::SupersetIndexOutOfRange {
                block: block_index,
                index: superset_index,
                len,
            })?;
        patch.apply_to(superset);
        Ok(next)
    }

    /// Append a new exercise to a lane
    ///
    /// A `superset_index` equal to the block's superset count creates the
    /// superset first. The name is not validated.
    pub fn add_exercise(
        &self,
        doc: &Workout,
        block_index: usize,
        name: &str,
        superset_index: Option<usize>,
    ) -> Result<Workout, MutationError> {
        let mut next = doc.clone();
        let lane = lanes::resolve_lane_mut(
            lanes::block_mut(&mut next, block_index)?,
            block_index,
            superset_index,
            || self.new_superset(),
        )?;
        lane.push(self.new_exercise(name));
        Ok(next)
    }

    pub fn delete_exercise(
        &self,
        doc: &Workout,
        block_index: usize,
        exercise_index: usize,
        superset_index: Option<usize>,
    ) -> Workout {
        let mut next = doc.clone();
        let lane = lanes::block_mut(&mut next, block_index)
            .and_then(|block| lanes::lane_mut(block, block_index, superset_index));

        match lane {
            Ok(lane) if exercise_index < lane.len() => {
                lane.remove(exercise_index);
            }
            _ => tracing::warn!(
                "delete_exercise: nothing at block {} superset {:?} index {}, ignoring",
                block_index,
                superset_index,
                exercise_index
            ),
        }
        next
    }

    pub fn update_exercise(
        &self,
        doc: &Workout,
        block_index: usize,
        exercise_index: usize,
        patch: &ExercisePatch,
        superset_index: Option<usize>,
    ) -> Result<Workout, MutationError> {
        let mut next = doc.clone();
        let lane = lanes::lane_mut(
            lanes::block_mut(&mut next, block_index)?,
            block_index,
            superset_index,
        )?;
        let len = lane.len();
        let exercise = lane
            .get_mut(exercise_index)
            .ok_or(MutationError::ExerciseIndexOutOfRange {
                index: exercise_index,
                len,
            })?;
        patch.apply_to(exercise);
        Ok(next)
    }

    pub fn rename_workout(&self, doc: &Workout, title: &str) -> Workout {
        Workout {
            title: title.to_string(),
            ..doc.clone()
        }
    }
}
