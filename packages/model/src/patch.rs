//! Partial updates for tree nodes.
//!
//! A patch field left as `None` keeps the node's current value. For optional
//! node fields the patch holds `Option<Option<T>>`: `Some(Some(v))` sets the
//! value and `Some(None)` clears it (`null` in JSON). Ids are not patchable.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::double_option;
use crate::workout::{Block, BlockStructure, Exercise, Superset};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub structure: Option<Option<BlockStructure>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub rounds: Option<Option<u32>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub sets: Option<Option<u32>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub rest_between_rounds_sec: Option<Option<u32>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub rest_between_sets_sec: Option<Option<u32>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub time_work_sec: Option<Option<u32>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub time_rest_sec: Option<Option<u32>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub time_cap_sec: Option<Option<u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupersetPatch {
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub rest_between_sec: Option<Option<u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExercisePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub sets: Option<Option<u32>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub reps: Option<Option<u32>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub reps_range: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<Option<u32>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub rest_sec: Option<Option<u32>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<Option<u32>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub distance_range: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,

    #[serde(
        rename = "type",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<Option<String>>,
}

fn merge<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}

impl BlockPatch {
    pub fn apply_to(&self, block: &mut Block) {
        merge(&mut block.label, &self.label);
        merge(&mut block.structure, &self.structure);
        merge(&mut block.rounds, &self.rounds);
        merge(&mut block.sets, &self.sets);
        merge(&mut block.rest_between_rounds_sec, &self.rest_between_rounds_sec);
        merge(&mut block.rest_between_sets_sec, &self.rest_between_sets_sec);
        merge(&mut block.time_work_sec, &self.time_work_sec);
        merge(&mut block.time_rest_sec, &self.time_rest_sec);
        merge(&mut block.time_cap_sec, &self.time_cap_sec);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl SupersetPatch {
    pub fn apply_to(&self, superset: &mut Superset) {
        merge(&mut superset.rest_between_sec, &self.rest_between_sec);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ExercisePatch {
    pub fn apply_to(&self, exercise: &mut Exercise) {
        merge(&mut exercise.name, &self.name);
        merge(&mut exercise.sets, &self.sets);
        merge(&mut exercise.reps, &self.reps);
        merge(&mut exercise.reps_range, &self.reps_range);
        merge(&mut exercise.duration_sec, &self.duration_sec);
        merge(&mut exercise.rest_sec, &self.rest_sec);
        merge(&mut exercise.distance_m, &self.distance_m);
        merge(&mut exercise.distance_range, &self.distance_range);
        merge(&mut exercise.notes, &self.notes);
        merge(&mut exercise.kind, &self.kind);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
