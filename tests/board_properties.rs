//! Property tests for board geometry, path shapes and whole games.

use proptest::prelude::*;
use serpentine::{
    build_step_path, cell_to_grid, cell_to_world, grid_to_cell, nearest_cell_scan, BoardLayout,
    CellLookup, DiceMode, GameConfig, LinkKind, PlayerMode, SpecialLink, TurnController,
    WorldPoint, FIRST_CELL, LAST_CELL,
};

proptest! {
    #[test]
    fn test_cell_grid_round_trip(cell in FIRST_CELL..=LAST_CELL) {
        let grid = cell_to_grid(cell);
        prop_assert!(grid.row < 10 && grid.col < 10);
        prop_assert_eq!(grid_to_cell(grid), cell);
    }

    #[test]
    fn test_world_position_maps_back_to_cell(cell in FIRST_CELL..=LAST_CELL) {
        let lookup = CellLookup::new();
        prop_assert_eq!(lookup.nearest_cell(cell_to_world(cell)), cell);
    }

    #[test]
    fn test_lookup_agrees_with_scan(x in -7.0f32..7.0, z in -7.0f32..7.0, y in 0.0f32..1.0) {
        let lookup = CellLookup::new();
        let point = WorldPoint::new(x, y, z);
        prop_assert_eq!(lookup.nearest_cell(point), nearest_cell_scan(point));
    }

    #[test]
    fn test_step_path_is_contiguous(a in FIRST_CELL..=LAST_CELL, b in FIRST_CELL..=LAST_CELL) {
        let (start, end) = (a.min(b), a.max(b));
        let path = build_step_path(start, end);
        prop_assert_eq!(path.len(), usize::from(end - start));
        for (k, step) in path.iter().enumerate() {
            prop_assert_eq!(step.from, start + k as u8);
            prop_assert_eq!(step.to, step.from + 1);
        }
        if let Some(last) = path.last() {
            prop_assert_eq!(last.to, end);
        }
    }

    #[test]
    fn test_valid_layouts_settle_within_link_count(
        pairs in prop::collection::vec((2u8..100, 2u8..100), 0..12)
    ) {
        // Keep only pairs that form a consistent layout.
        let mut links: Vec<SpecialLink> = Vec::new();
        for (a, b) in pairs {
            if a == b || links.iter().any(|l| l.source == a) {
                continue;
            }
            let link = if a > b { SpecialLink::snake(a, b) } else { SpecialLink::ladder(a, b) };
            links.push(link);
            if BoardLayout::new(links.clone(), Vec::new()).validate().is_err() {
                links.pop();
            }
        }

        let layout = BoardLayout::new(links, Vec::new());
        prop_assert!(layout.validate().is_ok());
        for cell in FIRST_CELL..=LAST_CELL {
            let settled = layout.settle(cell).unwrap();
            prop_assert!(settled.hops <= layout.links.len());
            prop_assert!(layout.link_at(settled.cell).is_none());
        }
    }

    #[test]
    fn test_positions_stay_on_board(seed in any::<u64>(), double in any::<bool>(), two in any::<bool>()) {
        let dice = if double { DiceMode::Double } else { DiceMode::Single };
        let players = if two { PlayerMode::Two } else { PlayerMode::Single };
        let mut game = TurnController::with_seed(GameConfig::new(dice, players), seed).unwrap();

        for _ in 0..60 {
            if game.state().game_over {
                break;
            }
            game.request_roll().unwrap();
            while game.is_busy() {
                game.tick(0.1).unwrap();
                let snapshot = game.snapshot();
                for player in &snapshot.players {
                    prop_assert!((FIRST_CELL..=LAST_CELL).contains(&player.position));
                }
            }
        }

        let state = game.state();
        prop_assert_eq!(state.game_over, state.winner.is_some());
        if let Some(winner) = state.winner {
            prop_assert_eq!(state.players[winner].position, LAST_CELL);
        }
    }
}

#[test]
fn test_classic_links_point_the_right_way() {
    let layout = BoardLayout::classic();
    assert_eq!(layout.links_of_kind(LinkKind::Snake).count(), 10);
    assert_eq!(layout.links_of_kind(LinkKind::Ladder).count(), 10);
    assert!(layout.links_of_kind(LinkKind::Snake).all(|l| l.destination < l.source));
    assert!(layout.links_of_kind(LinkKind::Ladder).all(|l| l.destination > l.source));
}
