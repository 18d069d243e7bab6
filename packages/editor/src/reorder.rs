//! Block reordering and exercise moves.

use workout_model::Workout;

use crate::ids::IdAllocator;
use crate::lanes::{self, insertion_index, ExerciseLocation};
use crate::mutations::{Editor, MutationError};

impl<A: IdAllocator> Editor<A> {
    /// Move the block at `source_index` in front of the block at `target_index`
    ///
    /// Both indices refer to the list before removal; `target_index` may equal
    /// the block count to move a block to the end.
    pub fn move_block(
        &self,
        doc: &Workout,
        source_index: usize,
        target_index: usize,
    ) -> Result<Workout, MutationError> {
        let len = doc.blocks.len();
        if source_index >= len {
            return Err(MutationError::BlockIndexOutOfRange {
                index: source_index,
                len,
            });
        }
        if target_index > len {
            return Err(MutationError::BlockIndexOutOfRange {
                index: target_index,
                len,
            });
        }

        let mut next = doc.clone();
        if source_index == target_index {
            return Ok(next);
        }

        let block = next.blocks.remove(source_index);
        let insert_at = insertion_index(source_index, target_index);
        tracing::debug!(
            "Moving block {} from {} to {} (requested {})",
            block.id,
            source_index,
            insert_at,
            target_index
        );
        next.blocks.insert(insert_at, block);

        Ok(next)
    }

    /// Move an exercise from `source` to `target`
    ///
    /// `target.exercise_index` is used as-is against the target lane after the
    /// exercise has been removed from its source. For moves inside one lane
    /// use [`ExerciseLocation::drop_in_same_lane`] to convert a drop slot.
    ///
    /// A target superset index equal to the block's superset count creates a
    /// new empty superset to receive the exercise. That superset stays behind
    /// if the exercise is later moved out again.
    pub fn move_exercise(
        &self,
        doc: &Workout,
        source: ExerciseLocation,
        target: ExerciseLocation,
    ) -> Result<Workout, MutationError> {
        let source_lane = lanes::lane(
            lanes::block(doc, source.block_index)?,
            source.block_index,
            source.superset_index,
        )?;
        if source.exercise_index >= source_lane.len() {
            return Err(MutationError::ExerciseIndexOutOfRange {
                index: source.exercise_index,
                len: source_lane.len(),
            });
        }
        lanes::block(doc, target.block_index)?;

        if source == target {
            return Ok(doc.clone());
        }

        let mut next = doc.clone();

        let exercise = lanes::lane_mut(
            lanes::block_mut(&mut next, source.block_index)?,
            source.block_index,
            source.superset_index,
        )?
        .remove(source.exercise_index);

        let target_lane = lanes::resolve_lane_mut(
            lanes::block_mut(&mut next, target.block_index)?,
            target.block_index,
            target.superset_index,
            || self.new_superset(),
        )?;
        if target.exercise_index > target_lane.len() {
            return Err(MutationError::InsertIndexOutOfRange {
                index: target.exercise_index,
                len: target_lane.len(),
            });
        }

        tracing::debug!(
            "Moving exercise {} from {:?} to {:?}",
            exercise.id,
            source,
            target
        );
        target_lane.insert(target.exercise_index, exercise);

        Ok(next)
    }
}
