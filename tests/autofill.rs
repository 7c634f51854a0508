//! Validates the incremental auto-fill against a live board

use pairleroy::algorithm::{AutoFill, StepOutcome};
use pairleroy::io::configuration::GameConfig;
use pairleroy::math::Xorshift32;
use pairleroy::spatial::Board;

fn run_to_completion(seed: u32, config: &GameConfig) -> (Board, StepOutcome) {
    let mut board = Board::new(2, 40.0);
    let mut fill = AutoFill::new();
    let mut rng = Xorshift32::new(seed);
    let (_, outcome) = fill.run(&mut board, config, &mut rng);
    (board, outcome)
}

#[test]
fn test_mono_only_fill_completes_radius_two() {
    let config = GameConfig {
        types_pct: [100, 0, 0],
        color_pct: [25, 25, 25, 25],
    };
    let (board, outcome) = run_to_completion(9, &config);
    assert_eq!(outcome, StepOutcome::Done);
    assert_eq!(board.placed_count(), board.tile_count());
}

#[test]
fn test_all_placements_are_edge_matched() {
    let (board, _) = run_to_completion(1234, &GameConfig::default());
    assert!(board.placed_count() > 0);
    for tile_idx in 0..board.tile_count() {
        let Some(placement) = board.placement(tile_idx) else {
            continue;
        };
        for (dir, neighbor) in board.neighbor_indices(tile_idx).iter().enumerate() {
            let Some(other) = neighbor.and_then(|n| board.placement(n)) else {
                continue;
            };
            assert_eq!(
                placement.side_colors[dir],
                other.side_colors[(dir + 3) % 6],
                "edge mismatch at tile {tile_idx} direction {dir}"
            );
        }
    }
}

#[test]
fn test_board_stays_connected() {
    // Beyond the first tile every placement requires a placed neighbor, so
    // a halted board never contains isolated islands
    let (board, _) = run_to_completion(77, &GameConfig::default());
    let mut seen_first = false;
    for tile_idx in 0..board.tile_count() {
        if board.placement(tile_idx).is_none() {
            continue;
        }
        if board.neighbor_placement_count(tile_idx) == 0 {
            assert!(!seen_first, "second isolated tile at {tile_idx}");
            seen_first = true;
        }
    }
}

#[test]
fn test_equal_seeds_give_identical_boards() {
    let config = GameConfig::default();
    let (board_a, outcome_a) = run_to_completion(31_337, &config);
    let (board_b, outcome_b) = run_to_completion(31_337, &config);
    assert_eq!(outcome_a, outcome_b);
    assert_eq!(board_a.placed_count(), board_b.placed_count());
    for tile_idx in 0..board_a.tile_count() {
        assert_eq!(
            board_a.placement(tile_idx).map(|p| p.combo),
            board_b.placement(tile_idx).map(|p| p.combo),
            "tile {tile_idx} diverged"
        );
    }
}

#[test]
fn test_done_is_sticky() {
    let config = GameConfig {
        types_pct: [100, 0, 0],
        color_pct: [100, 0, 0, 0],
    };
    let mut board = Board::new(1, 40.0);
    let mut fill = AutoFill::new();
    let mut rng = Xorshift32::new(3);
    let (placed, outcome) = fill.run(&mut board, &config, &mut rng);
    assert_eq!(outcome, StepOutcome::Done);
    assert_eq!(placed, board.tile_count());
    assert_eq!(fill.step(&mut board, &config, &mut rng), StepOutcome::Done);
}

#[test]
fn test_neighbor_count_scoring_grows_inward() {
    use pairleroy::io::configuration::{DEFAULT_NEIGHBOR_POINTS, points_for_neighbor_count};

    let config = GameConfig {
        types_pct: [100, 0, 0],
        color_pct: [100, 0, 0, 0],
    };
    let (board, outcome) = run_to_completion(2, &config);
    assert_eq!(outcome, StepOutcome::Done);
    // On a full board the center has six placed neighbors and scores the
    // table maximum; border tiles score less
    let center = board
        .tiles()
        .iter()
        .position(|t| t.q == 0 && t.r == 0)
        .unwrap();
    let center_points =
        points_for_neighbor_count(&DEFAULT_NEIGHBOR_POINTS, board.neighbor_placement_count(center));
    assert_eq!(center_points, 4);
    let corner = board
        .tiles()
        .iter()
        .position(|t| t.q == 2 && t.r == 0)
        .unwrap();
    let corner_points =
        points_for_neighbor_count(&DEFAULT_NEIGHBOR_POINTS, board.neighbor_placement_count(corner));
    assert!(corner_points < center_points);
}
