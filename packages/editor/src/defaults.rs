use serde::{Deserialize, Serialize};

/// Values given to nodes the editor creates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorDefaults {
    /// `rest_between_sec` for new and materialized supersets
    pub superset_rest_sec: u32,

    pub exercise_sets: u32,
    pub exercise_reps: u32,
    pub exercise_rest_sec: u32,
    pub exercise_type: String,
}

impl Default for EditorDefaults {
    fn default() -> Self {
        Self {
            superset_rest_sec: 60,
            exercise_sets: 3,
            exercise_reps: 10,
            exercise_rest_sec: 60,
            exercise_type: "strength".to_string(),
        }
    }
}
