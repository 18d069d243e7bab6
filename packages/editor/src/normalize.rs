//! # Normalization
//!
//! Gives every Block, Superset and Exercise a unique, non-empty id without
//! touching any other field.
//!
//! The input is never mutated. When a full pre-scan finds nothing to fix the
//! input is handed back as `Cow::Borrowed`, so callers can detect a no-op by
//! reference. Any missing (or repeated) id forces a rebuild of the whole
//! document.
//!
//! An id that already appeared earlier in document order counts as missing:
//! the first occurrence keeps it and later ones get fresh ids.

use std::borrow::Cow;
use std::collections::HashSet;

use workout_model::visitor::{walk_block_mut, walk_superset_mut};
use workout_model::{Block, Exercise, NodePath, Superset, VisitorMut, Workout};

use crate::ids::IdAllocator;

/// Fill in missing ids
pub fn normalize<'a>(doc: &'a Workout, ids: &dyn IdAllocator) -> Cow<'a, Workout> {
    if is_normalized(doc) {
        return Cow::Borrowed(doc);
    }

    let mut normalized = doc.clone();
    let mut assigner = IdAssigner {
        ids,
        taken: doc
            .ids()
            .into_iter()
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect(),
        kept: HashSet::new(),
        assigned: 0,
    };
    assigner.visit_workout_mut(&mut normalized);

    tracing::debug!("Normalized workout '{}': assigned {} id(s)", doc.title, assigner.assigned);

    Cow::Owned(normalized)
}

/// Owned variant of [`normalize`]; returns the input itself when nothing is missing
pub fn normalize_owned(doc: Workout, ids: &dyn IdAllocator) -> Workout {
    if is_normalized(&doc) {
        return doc;
    }
    normalize(&doc, ids).into_owned()
}

/// True when every id is non-empty and unique
pub fn is_normalized(doc: &Workout) -> bool {
    let mut seen = HashSet::new();
    doc.ids()
        .into_iter()
        .all(|id| !id.is_empty() && seen.insert(id))
}

struct IdAssigner<'a> {
    ids: &'a dyn IdAllocator,
    /// Every non-empty id present in the input
    taken: HashSet<String>,
    /// Ids already claimed by an earlier node during the walk
    kept: HashSet<String>,
    assigned: usize,
}

impl IdAssigner<'_> {
    fn assign(&mut self, id: &mut String) {
        if !id.is_empty() && self.kept.insert(id.clone()) {
            return;
        }

        // A generator seeded like the one that produced the input could hand
        // back an id that a later node already uses.
        let mut fresh = self.ids.allocate();
        while self.taken.contains(&fresh) || self.kept.contains(&fresh) {
            fresh = self.ids.allocate();
        }

        self.taken.insert(fresh.clone());
        self.kept.insert(fresh.clone());
        *id = fresh;
        self.assigned += 1;
    }
}

impl VisitorMut for IdAssigner<'_> {
    fn visit_block_mut(&mut self, block_index: usize, block: &mut Block) {
        self.assign(&mut block.id);
        walk_block_mut(self, block_index, block);
    }

    fn visit_superset_mut(&mut self, block_index: usize, superset_index: usize, superset: &mut Superset) {
        self.assign(&mut superset.id);
        walk_superset_mut(self, block_index, superset_index, superset);
    }

    fn visit_exercise_mut(&mut self, _path: NodePath, exercise: &mut Exercise) {
        self.assign(&mut exercise.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdGenerator;

    fn incomplete() -> Workout {
        serde_json::from_str(
            r#"{
                "title": "Push",
                "source": "instagram",
                "blocks": [
                    {
                        "label": "Main",
                        "structure": "sets",
                        "exercises": [ { "name": "Bench", "sets": 5, "reps": 5 } ],
                        "supersets": [
                            { "id": "s-keep", "exercises": [ { "name": "Dip" }, { "id": "e-keep", "name": "Fly" } ] }
                        ]
                    },
                    { "id": "b-keep", "label": "Finisher", "exercises": null, "supersets": null }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_fills_missing_ids_only() {
        let doc = incomplete();
        let ids = IdGenerator::from_seed("n");

        let normalized = normalize(&doc, &ids).into_owned();

        assert!(is_normalized(&normalized));
        assert_eq!(normalized.blocks[0].id, "n-1");
        assert_eq!(normalized.blocks[0].exercises[0].id, "n-2");
        assert_eq!(normalized.blocks[0].supersets[0].id, "s-keep");
        assert_eq!(normalized.blocks[0].supersets[0].exercises[0].id, "n-3");
        assert_eq!(normalized.blocks[0].supersets[0].exercises[1].id, "e-keep");
        assert_eq!(normalized.blocks[1].id, "b-keep");

        // Everything else untouched
        assert_eq!(normalized.title, doc.title);
        assert_eq!(normalized.blocks[0].exercises[0].sets, Some(5));
        assert_eq!(normalized.blocks[0].structure, doc.blocks[0].structure);

        // Input untouched
        assert_eq!(doc.missing_id_count(), 3);
    }

    #[test]
    fn test_fast_path_borrows() {
        let ids = IdGenerator::from_seed("n");
        let once = normalize(&incomplete(), &ids).into_owned();

        let twice = normalize(&once, &ids);
        match twice {
            Cow::Borrowed(doc) => assert!(std::ptr::eq(doc, &once)),
            Cow::Owned(_) => panic!("normalized document was rebuilt"),
        }
    }

    #[test]
    fn test_idempotent() {
        let ids = IdGenerator::new();
        let once = normalize(&incomplete(), &ids).into_owned();
        let twice = normalize(&once, &ids).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_duplicate_ids_are_reassigned() {
        let mut doc = incomplete();
        doc.blocks[1].id = "s-keep".to_string();
        let ids = IdGenerator::from_seed("d");

        let normalized = normalize_owned(doc, &ids);

        assert!(is_normalized(&normalized));
        assert_eq!(normalized.blocks[0].supersets[0].id, "s-keep");
        assert_ne!(normalized.blocks[1].id, "s-keep");
    }

    #[test]
    fn test_fresh_ids_skip_existing_ones() {
        let mut doc = incomplete();
        // A later node already carries the id the generator hands out first
        doc.blocks[1].id = "n-1".to_string();
        let ids = IdGenerator::from_seed("n");

        let normalized = normalize_owned(doc, &ids);

        assert!(is_normalized(&normalized));
        assert_eq!(normalized.blocks[0].id, "n-2");
        assert_eq!(normalized.blocks[1].id, "n-1");
    }

    #[test]
    fn test_empty_workout() {
        let ids = IdGenerator::new();
        let doc = Workout::default();
        assert!(matches!(normalize(&doc, &ids), Cow::Borrowed(_)));
    }
}
