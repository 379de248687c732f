//! Puzzle session integration tests.

use gear_mesh::core::{MeshConfig, MeshRngState, Position, Rotation};
use gear_mesh::mesh::GearMesh;
use gear_mesh::puzzle::Puzzle;
use proptest::prelude::*;

fn board(seed: u64) -> GearMesh {
    MeshConfig::new()
        .with_base_color("#00c7fd")
        .with_colored(8, "#ff8800")
        .with_seed(seed)
        .build()
        .unwrap()
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_history_order() {
    let mut puzzle = Puzzle::new(board(1), 1);
    let moves = [Position::new(4, 4), Position::new(2, 3), Position::new(6, 5)];
    for pos in moves {
        assert_eq!(puzzle.actuate(pos), Ok(true));
    }

    let centers: Vec<_> = puzzle.history().iter().map(|r| r.center).collect();
    assert_eq!(centers, moves.to_vec());
    let sequences: Vec<_> = puzzle.history().iter().map(|r| r.sequence).collect();
    assert_eq!(sequences, vec![0, 1, 2]);
}

#[test]
fn test_rejected_moves_not_recorded() {
    let mut puzzle = Puzzle::new(board(1), 1);
    let before = puzzle.mesh().clone();

    assert_eq!(puzzle.actuate(Position::new(8, 6)), Ok(false));
    assert!(puzzle.actuate(Position::new(8, 5)).is_err());

    assert_eq!(puzzle.move_count(), 0);
    assert_eq!(puzzle.mesh(), &before);
}

#[test]
fn test_undo_single_move() {
    let mut puzzle = Puzzle::new(board(2), 2);
    let before = puzzle.mesh().clone();

    puzzle.actuate(Position::new(4, 2)).unwrap();
    let undone = puzzle.undo().unwrap().unwrap();

    assert_eq!(undone.center, Position::new(4, 2));
    assert_eq!(puzzle.mesh(), &before);
    assert_eq!(puzzle.move_count(), 0);
}

#[test]
fn test_clone_is_independent() {
    let mut puzzle = Puzzle::new(board(3), 3);
    puzzle.scramble(5).unwrap();
    let snapshot = puzzle.clone();

    puzzle.scramble(5).unwrap();

    assert_eq!(snapshot.move_count(), 5);
    assert_eq!(puzzle.move_count(), 10);
}

#[test]
fn test_checkpoint_through_json() {
    let mut puzzle = Puzzle::new(board(9), 9);
    puzzle.scramble(15).unwrap();

    let history_json = serde_json::to_string(puzzle.history()).unwrap();
    let rng_json = serde_json::to_string(&puzzle.rng_state()).unwrap();

    let history: im::Vector<Rotation> = serde_json::from_str(&history_json).unwrap();
    let rng_state: MeshRngState = serde_json::from_str(&rng_json).unwrap();
    let mut resumed = Puzzle::restore(puzzle.mesh().clone(), history, &rng_state);

    puzzle.scramble(10).unwrap();
    resumed.scramble(10).unwrap();

    assert_eq!(resumed.history(), puzzle.history());
    assert_eq!(resumed.mesh(), puzzle.mesh());
}

// =============================================================================
// Scrambling
// =============================================================================

#[test]
fn test_scramble_uses_only_actuatable_gears() {
    let mut puzzle = Puzzle::new(board(4), 4);
    let actuatable = puzzle.mesh().actuatable();

    assert_eq!(puzzle.scramble(50), Ok(50));
    assert!(puzzle
        .history()
        .iter()
        .all(|r| actuatable.contains(&r.center)));
}

#[test]
fn test_scramble_seed_changes_moves() {
    let mut a = Puzzle::new(board(4), 1);
    let mut b = Puzzle::new(board(4), 2);
    a.scramble(20).unwrap();
    b.scramble(20).unwrap();
    assert_ne!(a.history(), b.history());
}

#[test]
fn test_scramble_preserves_color_counts() {
    let mut puzzle = Puzzle::new(board(6), 6);
    let count = |mesh: &GearMesh| mesh.colors().filter(|(_, c)| c.as_str() == "#ff8800").count();
    let before = count(puzzle.mesh());

    puzzle.scramble(40).unwrap();

    assert_eq!(count(puzzle.mesh()), before);
    assert_eq!(puzzle.mesh().positions(), board(6).positions());
}

proptest! {
    #[test]
    fn prop_undo_all_restores(seed in any::<u64>(), moves in 0usize..40) {
        let mut puzzle = Puzzle::new(board(seed), seed);
        let start = puzzle.mesh().clone();

        prop_assert_eq!(puzzle.scramble(moves), Ok(moves));
        while puzzle.undo().unwrap().is_some() {}

        prop_assert_eq!(puzzle.mesh(), &start);
    }
}
