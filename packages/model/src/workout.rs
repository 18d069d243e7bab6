use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;
use crate::visitor::{NodePath, Visitor};

/// Root document node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Where the workout came from (e.g. "instagram", "manual")
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub blocks: Vec<Block>,
}

/// Training structure of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockStructure {
    Regular,
    Rounds,
    Sets,
    Superset,
    Circuit,
    Amrap,
    Emom,
    ForTime,
    Tabata,
    Warmup,
    Cooldown,
}

/// Top-level grouping with two lanes: loose exercises and supersets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<BlockStructure>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_between_rounds_sec: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_between_sets_sec: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_work_sec: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_rest_sec: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_cap_sec: Option<u32>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub exercises: Vec<Exercise>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub supersets: Vec<Superset>,
}

/// Exercises performed back-to-back with one shared rest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Superset {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub exercises: Vec<Exercise>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_between_sec: Option<u32>,
}

/// Leaf node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,

    /// Free-form range such as "8-12"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps_range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_sec: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Exercise kind ("strength", "cardio", ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Workout {
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            blocks: Vec::new(),
        }
    }

    /// Total number of exercises across every lane
    pub fn exercise_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| {
                block.exercises.len()
                    + block
                        .supersets
                        .iter()
                        .map(|superset| superset.exercises.len())
                        .sum::<usize>()
            })
            .sum()
    }

    /// Every node id in document order (blocks, then their exercises, then supersets)
    pub fn ids(&self) -> Vec<&str> {
        self.nodes().into_iter().map(|(_, id)| id).collect()
    }

    /// Every node with its path, in document order
    pub fn nodes(&self) -> Vec<(NodePath, &str)> {
        let mut collector = IdCollector { nodes: Vec::new() };
        collector.visit_workout(self);
        collector.nodes
    }

    /// Number of nodes whose id is empty
    pub fn missing_id_count(&self) -> usize {
        self.ids().iter().filter(|id| id.is_empty()).count()
    }
}

impl Block {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }
}

impl Superset {
    pub fn new(id: impl Into<String>, rest_between_sec: Option<u32>) -> Self {
        Self {
            id: id.into(),
            exercises: Vec::new(),
            rest_between_sec,
        }
    }
}

impl Exercise {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

struct IdCollector<'a> {
    nodes: Vec<(NodePath, &'a str)>,
}

impl<'a> Visitor<'a> for IdCollector<'a> {
    fn visit_block(&mut self, block_index: usize, block: &'a Block) {
        self.nodes.push((NodePath::Block { block: block_index }, &block.id));
        crate::visitor::walk_block(self, block_index, block);
    }

    fn visit_superset(&mut self, block_index: usize, superset_index: usize, superset: &'a Superset) {
        self.nodes.push((
            NodePath::Superset {
                block: block_index,
                superset: superset_index,
            },
            &superset.id,
        ));
        crate::visitor::walk_superset(self, block_index, superset_index, superset);
    }

    fn visit_exercise(&mut self, path: NodePath, exercise: &'a Exercise) {
        self.nodes.push((path, &exercise.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_lists_deserialize_as_empty() {
        let json = r#"{
            "title": "Leg Day",
            "source": "manual",
            "blocks": [
                { "label": "Warm-up", "exercises": null, "supersets": null }
            ]
        }"#;

        let workout: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(workout.blocks.len(), 1);
        assert!(workout.blocks[0].exercises.is_empty());
        assert!(workout.blocks[0].supersets.is_empty());
        assert_eq!(workout.blocks[0].id, "");
    }

    #[test]
    fn test_missing_fields_and_null_id() {
        let json = r#"{ "blocks": [ { "id": null, "exercises": [ { "name": "Squat" } ] } ] }"#;

        let workout: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(workout.title, "");
        assert_eq!(workout.missing_id_count(), 2);
        assert_eq!(workout.blocks[0].exercises[0].name, "Squat");
        assert_eq!(workout.blocks[0].exercises[0].sets, None);
    }

    #[test]
    fn test_exercise_type_field_name() {
        let json = r#"{ "id": "e1", "name": "Row", "type": "cardio", "distance_m": 500 }"#;
        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(exercise.kind.as_deref(), Some("cardio"));
        assert_eq!(exercise.distance_m, Some(500));

        let out = serde_json::to_value(&exercise).unwrap();
        assert_eq!(out["type"], "cardio");
        assert!(out.get("notes").is_none());
    }

    #[test]
    fn test_structure_serialization() {
        let block = Block {
            structure: Some(BlockStructure::ForTime),
            ..Block::new("b1", "Finisher")
        };
        let out = serde_json::to_value(&block).unwrap();
        assert_eq!(out["structure"], "for-time");
    }

    #[test]
    fn test_ids_in_document_order() {
        let mut block = Block::new("b1", "Block 1");
        block.exercises.push(Exercise::new("e1", "Squat"));
        let mut superset = Superset::new("s1", Some(60));
        superset.exercises.push(Exercise::new("e2", "Lunge"));
        block.supersets.push(superset);

        let mut workout = Workout::new("Legs", "manual");
        workout.blocks.push(block);

        assert_eq!(workout.ids(), vec!["b1", "e1", "s1", "e2"]);
        assert_eq!(workout.exercise_count(), 2);
        assert_eq!(workout.missing_id_count(), 0);
    }
}
