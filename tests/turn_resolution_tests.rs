//! End-to-end turn resolution with scripted dice.

use serpentine::{
    BoardLayout, BonusKind, BonusTile, DiceMode, GameConfig, GameEvent, LinkKind, PlayerMode,
    ScriptedDice, SerpentineError, TurnController, LAST_CELL,
};

fn scripted(config: GameConfig, faces: Vec<u8>) -> TurnController {
    let dice = ScriptedDice::new(faces).unwrap();
    TurnController::with_dice(config, Box::new(dice)).unwrap()
}

/// Ticks at 60 fps until the current move has fully resolved.
fn settle(game: &mut TurnController) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..100_000 {
        events.extend(game.tick(1.0 / 60.0).unwrap());
        if !game.is_busy() {
            return events;
        }
    }
    panic!("move never resolved");
}

fn roll_and_settle(game: &mut TurnController) -> Vec<GameEvent> {
    game.request_roll().unwrap();
    settle(game)
}

#[test]
fn test_snake_head_sends_token_to_tail() {
    let config = GameConfig::new(DiceMode::Single, PlayerMode::Single);
    let mut game = scripted(config, vec![3, 6, 6]);

    roll_and_settle(&mut game);
    assert_eq!(game.state().players[0].position, 4);
    roll_and_settle(&mut game);
    assert_eq!(game.state().players[0].position, 10);

    let events = roll_and_settle(&mut game);
    assert_eq!(game.state().players[0].position, 6);
    assert!(events.contains(&GameEvent::LinkTriggered {
        player: 0,
        kind: LinkKind::Snake,
        source: 16,
        destination: 6,
    }));
}

#[test]
fn test_ladder_base_lifts_token_to_top() {
    let mut game = scripted(GameConfig::default(), vec![6]);
    let events = roll_and_settle(&mut game);

    assert_eq!(game.state().players[0].position, 14);
    assert!(events.contains(&GameEvent::LinkTriggered {
        player: 0,
        kind: LinkKind::Ladder,
        source: 7,
        destination: 14,
    }));
    assert_eq!(events.last(), Some(&GameEvent::TurnEnded { next: 1 }));
}

#[test]
fn test_ladder_onto_skip_tile_passes_over_opponent() {
    let config = GameConfig::new(DiceMode::Single, PlayerMode::Two);
    let mut game = scripted(config, vec![6, 3, 6, 5, 6, 1, 6, 3, 4]);

    for _ in 0..8 {
        roll_and_settle(&mut game);
    }
    assert_eq!(game.state().players[0].position, 32);
    assert_eq!(game.state().players[1].position, 13);
    assert_eq!(game.state().current_player, 0);

    let events: Vec<GameEvent> = roll_and_settle(&mut game)
        .into_iter()
        .filter(|e| !matches!(e, GameEvent::SegmentAdvanced { .. }))
        .collect();
    assert_eq!(
        events,
        vec![
            GameEvent::LinkTriggered {
                player: 0,
                kind: LinkKind::Ladder,
                source: 36,
                destination: 44,
            },
            GameEvent::BonusTriggered {
                player: 0,
                cell: 44,
                kind: BonusKind::SkipTurn,
            },
            GameEvent::TurnSkipped { player: 1 },
            GameEvent::TurnEnded { next: 0 },
        ]
    );
    assert_eq!(game.state().players[0].position, 44);
    assert!(!game.state().players[1].skip_next_turn);
}

#[test]
fn test_overshoot_is_clamped_to_last_cell() {
    let config = GameConfig::new(DiceMode::Single, PlayerMode::Single)
        .with_layout(BoardLayout::empty());
    let mut faces = vec![6; 16];
    faces.push(5);
    let mut game = scripted(config, faces);

    for _ in 0..16 {
        roll_and_settle(&mut game);
    }
    assert_eq!(game.state().players[0].position, 97);

    let events = roll_and_settle(&mut game);
    let steps = events
        .iter()
        .filter(|e| matches!(e, GameEvent::SegmentAdvanced { .. }))
        .count();
    assert_eq!(steps, 3);
    assert_eq!(game.state().players[0].position, LAST_CELL);
    assert!(game.state().game_over);
    assert_eq!(game.state().winner, Some(0));
    assert!(matches!(
        game.request_roll(),
        Err(SerpentineError::InvalidState(_))
    ));
}

#[test]
fn test_two_players_alternate() {
    let config = GameConfig::new(DiceMode::Single, PlayerMode::Two)
        .with_layout(BoardLayout::empty());
    let mut game = scripted(config, vec![1, 2, 3]);

    let mut order = Vec::new();
    for _ in 0..4 {
        order.push(game.state().current_player);
        roll_and_settle(&mut game);
    }
    assert_eq!(order, vec![0, 1, 0, 1]);
}

#[test]
fn test_skipped_player_is_bypassed_once() {
    let layout = BoardLayout::new(Vec::new(), vec![BonusTile::new(3, BonusKind::SkipTurn)]);
    let config = GameConfig::new(DiceMode::Single, PlayerMode::Two).with_layout(layout);
    let mut game = scripted(config, vec![2, 4]);

    let events = roll_and_settle(&mut game);
    assert!(events.contains(&GameEvent::TurnSkipped { player: 1 }));
    assert_eq!(game.state().current_player, 0);

    // Player 1 is back in the rotation after sitting out once.
    roll_and_settle(&mut game);
    assert_eq!(game.state().current_player, 1);
    assert_eq!(game.state().players[1].position, 1);
}

#[test]
fn test_extra_roll_keeps_turn_each_time() {
    let layout = BoardLayout::new(
        Vec::new(),
        vec![
            BonusTile::new(3, BonusKind::ExtraRoll),
            BonusTile::new(5, BonusKind::ExtraRoll),
            BonusTile::new(7, BonusKind::ExtraRoll),
        ],
    );
    let config = GameConfig::new(DiceMode::Single, PlayerMode::Two).with_layout(layout);
    let mut game = scripted(config, vec![2]);

    for expected in [3, 5, 7] {
        roll_and_settle(&mut game);
        assert_eq!(game.state().current_player, 0);
        assert_eq!(game.state().players[0].position, expected);
    }

    roll_and_settle(&mut game);
    assert_eq!(game.state().players[0].position, 9);
    assert_eq!(game.state().current_player, 1);
}

#[test]
fn test_restart_resets_everything() {
    let mut game = scripted(GameConfig::default(), vec![4, 3]);
    roll_and_settle(&mut game);
    game.toggle_double_dice().unwrap();
    game.request_roll().unwrap();
    game.tick(0.05).unwrap();
    assert!(game.is_busy());

    game.restart();
    let state = game.state();
    assert!(!game.is_busy());
    assert_eq!(state.current_player, 0);
    assert!(state.players.iter().all(|p| p.position == 1));
    assert!(!state.game_over);
    assert!(state.last_roll.is_none());
    assert_eq!(state.dice_mode, DiceMode::Single);
}

#[test]
fn test_toggle_to_single_player_hands_turn_back() {
    let config = GameConfig::new(DiceMode::Single, PlayerMode::Two)
        .with_layout(BoardLayout::empty());
    let mut game = scripted(config, vec![3]);
    roll_and_settle(&mut game);
    assert_eq!(game.state().current_player, 1);

    assert_eq!(game.toggle_two_players().unwrap(), PlayerMode::Single);
    assert_eq!(game.state().current_player, 0);
    assert_eq!(game.snapshot().players.len(), 1);

    roll_and_settle(&mut game);
    assert_eq!(game.state().current_player, 0);
    assert_eq!(game.state().players[0].position, 7);
}

#[test]
fn test_same_seed_replays_identically() {
    let play = |seed: u64| {
        let mut game = TurnController::with_seed(GameConfig::default(), seed).unwrap();
        let mut log = Vec::new();
        for _ in 0..30 {
            if game.state().game_over {
                break;
            }
            game.request_roll().unwrap();
            log.extend(settle(&mut game));
        }
        (log, game.state().clone())
    };

    assert_eq!(play(2024), play(2024));
}
