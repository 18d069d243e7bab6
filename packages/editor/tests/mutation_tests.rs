//! Editing scenarios driven through the public mutation surface

use std::collections::HashSet;

use workout_editor::{
    validate, Block, Editor, Exercise, ExerciseLocation, IdGenerator, Mutation, MutationError,
    Superset, Workout,
};

fn editor() -> Editor<IdGenerator> {
    Editor::with_allocator(IdGenerator::from_seed("t"))
}

fn exercise(id: &str, name: &str) -> Exercise {
    Exercise {
        sets: Some(4),
        reps: Some(8),
        ..Exercise::new(id, name)
    }
}

/// Two blocks: the first with loose exercises and one superset, the second
/// with loose exercises and no supersets at all.
fn workout() -> Workout {
    let mut strength = Block::new("b-strength", "Strength");
    strength.exercises.push(exercise("e-squat", "Back Squat"));
    strength.exercises.push(exercise("e-rdl", "Romanian Deadlift"));
    let mut superset = Superset::new("s-arms", Some(45));
    superset.exercises.push(exercise("e-curl", "Curl"));
    superset.exercises.push(exercise("e-pushdown", "Pushdown"));
    strength.supersets.push(superset);

    let mut finisher = Block::new("b-finisher", "Finisher");
    finisher.exercises.push(exercise("e-row", "Row"));

    let mut doc = Workout::new("Lower + Arms", "manual");
    doc.blocks.push(strength);
    doc.blocks.push(finisher);
    doc
}

fn unique_ids(doc: &Workout) -> bool {
    let ids = doc.ids();
    ids.iter().collect::<HashSet<_>>().len() == ids.len()
}

#[test]
fn test_lazy_superset_creation() {
    let doc = workout();
    assert!(doc.blocks[1].supersets.is_empty());

    let next = editor()
        .apply(
            &doc,
            &Mutation::MoveExercise {
                source: ExerciseLocation::in_block(0, 0),
                target: ExerciseLocation::in_superset(1, 0, 0),
            },
        )
        .unwrap();

    let created = &next.blocks[1].supersets[0];
    assert_eq!(created.exercises.len(), 1);
    assert_eq!(created.exercises[0].id, "e-squat");
    assert_eq!(created.rest_between_sec, Some(60));
    assert!(!created.id.is_empty());
    assert!(!doc.ids().contains(&created.id.as_str()));
    assert!(unique_ids(&next));
}

#[test]
fn test_delete_idempotence() {
    let editor = editor();
    let delete = Mutation::DeleteExercise {
        block_index: 1,
        exercise_index: 0,
        superset_index: None,
    };

    let once = editor.apply(&workout(), &delete).unwrap();
    assert!(once.blocks[1].exercises.is_empty());

    let twice = editor.apply(&once, &delete).unwrap();
    assert_eq!(twice, once);
}

#[test]
fn test_add_block_numbering() {
    let next = editor().apply(&workout(), &Mutation::AddBlock).unwrap();

    assert_eq!(next.blocks.len(), 3);
    assert_eq!(next.blocks[2].label, "Block 3");
}

#[test]
fn test_block_reorder_correctness() {
    let editor = editor();
    let mut doc = Workout::default();
    for i in 0..5 {
        doc.blocks.push(Block::new(format!("b{}", i), format!("B{}", i)));
    }

    for i in 0..5 {
        for j in 0..=5 {
            if i == j {
                continue;
            }
            let next = editor.move_block(&doc, i, j).unwrap();
            let effective = if i > j { j } else { j - 1 };
            assert_eq!(next.blocks[effective].id, doc.blocks[i].id, "move {} -> {}", i, j);

            // Every other block keeps its relative order
            let others_before: Vec<_> = doc.blocks.iter().filter(|b| b.id != doc.blocks[i].id).collect();
            let others_after: Vec<_> = next.blocks.iter().filter(|b| b.id != doc.blocks[i].id).collect();
            assert_eq!(others_before, others_after);
        }
    }
}

#[test]
fn test_move_round_trip() {
    let editor = editor();
    let doc = workout();
    let a = ExerciseLocation::in_block(0, 1);
    let b = ExerciseLocation::in_superset(0, 0, 1);

    let there = editor.move_exercise(&doc, a, b).unwrap();
    let back = editor.move_exercise(&there, b, a).unwrap();

    assert_eq!(back, doc);
}

#[test]
fn test_move_round_trip_leaves_materialized_superset() {
    let editor = editor();
    let doc = workout();
    let a = ExerciseLocation::in_block(0, 0);
    let b = ExerciseLocation::in_superset(1, 0, 0);

    let there = editor.move_exercise(&doc, a, b).unwrap();
    let back = editor.move_exercise(&there, b, a).unwrap();

    // The superset created for the drop stays behind, empty
    assert_eq!(back.blocks[0], doc.blocks[0]);
    assert_eq!(back.blocks[1].supersets.len(), 1);
    assert!(back.blocks[1].supersets[0].exercises.is_empty());

    let mut without_residual = back.clone();
    without_residual.blocks[1].supersets.clear();
    assert_eq!(without_residual, doc);
}

#[test]
fn test_same_lane_reorder_edges() {
    let editor = editor();
    let mut doc = Workout::default();
    let mut block = Block::new("b", "Block 1");
    for name in ["A", "B", "C", "D"] {
        block.exercises.push(Exercise::new(format!("e-{}", name), name));
    }
    doc.blocks.push(block);

    let order = |doc: &Workout| -> String { doc.blocks[0].exercises.iter().map(|e| e.name.as_str()).collect() };

    // Last item to index 0
    let last = ExerciseLocation::in_block(0, 3);
    let next = editor.move_exercise(&doc, last, ExerciseLocation::in_block(0, 0)).unwrap();
    assert_eq!(order(&next), "DABC");

    // Last item to the slot after itself: nothing moves
    let next = editor.move_exercise(&doc, last, last.drop_in_same_lane(4)).unwrap();
    assert_eq!(order(&next), "ABCD");

    // First item to the end, expressed as a drop slot
    let first = ExerciseLocation::in_block(0, 0);
    let next = editor.move_exercise(&doc, first, first.drop_in_same_lane(4)).unwrap();
    assert_eq!(order(&next), "BCDA");

    // Unadjusted "length" index is out of range after removal
    assert_eq!(
        editor.move_exercise(&doc, first, ExerciseLocation::in_block(0, 4)),
        Err(MutationError::InsertIndexOutOfRange { index: 4, len: 3 })
    );
}

#[test]
fn test_out_of_range_move_is_rejected_not_clamped() {
    let editor = editor();
    let doc = workout();

    let err = editor
        .apply(
            &doc,
            &Mutation::MoveBlock {
                source_index: 0,
                target_index: 7,
            },
        )
        .unwrap_err();
    assert_eq!(err, MutationError::BlockIndexOutOfRange { index: 7, len: 2 });
    assert_eq!(err.to_string(), "Block index 7 out of range (blocks: 2)");
}

#[test]
fn test_every_result_is_valid() {
    let editor = editor();
    let doc = workout();
    let mutations = vec![
        Mutation::AddBlock,
        Mutation::AddSuperset { block_index: 1 },
        Mutation::AddExercise {
            block_index: 0,
            name: "Calf Raise".to_string(),
            superset_index: Some(1),
        },
        Mutation::MoveExercise {
            source: ExerciseLocation::in_superset(0, 0, 0),
            target: ExerciseLocation::in_block(1, 1),
        },
        Mutation::DeleteSuperset {
            block_index: 0,
            superset_index: 0,
        },
        Mutation::MoveBlock {
            source_index: 1,
            target_index: 0,
        },
        Mutation::RenameWorkout {
            title: "Renamed".to_string(),
        },
    ];

    for mutation in mutations {
        let next = editor.apply(&doc, &mutation).unwrap();
        assert_eq!(validate(&next), Ok(()), "{} produced an invalid document", mutation.name());
        if mutation.conserves_exercises() {
            assert_eq!(next.exercise_count(), doc.exercise_count(), "{}", mutation.name());
        }
    }
}
