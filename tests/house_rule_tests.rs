//! Scenarios for the three house rules: mines, random removal, and
//! pass control, exercised through the public API.

use reversi_rules::{
    CellState, Coord, GameRng, GameSession, MineLayout, Phase, Player, SessionConfig,
    TurnController, CPU_DELAY_MS, EXPLOSION_DELAY_MS, PASS_DELAY_MS,
};

/// Starting-position session with a deterministic mine layout.
fn mined_session(config: &SessionConfig, mines: &[Coord]) -> GameSession {
    let mut rng = GameRng::new(99);
    let mut session = GameSession::new(config, &mut rng);
    session.mines = MineLayout::with_mines(mines);
    session
}

#[test]
fn scatter_respects_count_and_center_block() {
    for seed in 0..10 {
        let config = SessionConfig::new().with_mines(true).with_max_mines(7);
        let controller = TurnController::new(config, seed);

        let mines = &controller.session().mines;
        assert_eq!(mines.count(), 7);
        for coord in [
            Coord::new(3, 3),
            Coord::new(3, 4),
            Coord::new(4, 3),
            Coord::new(4, 4),
        ] {
            assert!(!mines.contains(coord), "mine in center block (seed {seed})");
        }
    }
}

#[test]
fn corner_mine_clears_its_neighborhood() {
    // W B bracket on the top row makes (0,0) a legal Black move with a
    // mine hidden underneath.
    let config = SessionConfig::new().with_mines(true);
    let mut session = mined_session(&config, &[Coord::new(0, 0)]);
    session.board.set(Coord::new(0, 1), CellState::White);
    session.board.set(Coord::new(0, 2), CellState::Black);

    let mut controller = TurnController::resume(config, session, 99);
    assert!(controller.submit_move(Coord::new(0, 0)));
    assert_eq!(controller.phase(), Phase::Resolving);

    // Flip resolution lands first: (0,1) is Black until the blast.
    assert_eq!(
        controller.session().board.get(Coord::new(0, 1)),
        CellState::Black
    );

    controller.advance(EXPLOSION_DELAY_MS);

    let board = &controller.session().board;
    for coord in [
        Coord::new(0, 0),
        Coord::new(0, 1),
        Coord::new(1, 0),
        Coord::new(1, 1),
    ] {
        assert!(board.get(coord).is_empty(), "{coord} survived the blast");
    }
    // Outside the neighborhood nothing is touched.
    assert_eq!(board.get(Coord::new(0, 2)), CellState::Black);
    assert!(!controller.session().mines.contains(Coord::new(0, 0)));
}

#[test]
fn unmined_cells_do_not_explode() {
    let config = SessionConfig::new().with_mines(true);
    let session = mined_session(&config, &[Coord::new(7, 7)]);

    let mut controller = TurnController::resume(config, session, 99);
    assert!(controller.submit_move(Coord::new(2, 3)));

    // No delay scheduled; the turn switched immediately.
    assert!(controller.is_idle());
    assert_eq!(controller.phase(), Phase::AwaitingMove);
    assert_eq!(controller.session().current_player, Player::White);
}

#[test]
fn explosion_chains_into_pass_within_one_advance() {
    // After the corner blast Black keeps the only disc on the board, so
    // White passes and then Black is stuck too: one generous advance
    // drives explosion, pass, and game over back to back.
    let config = SessionConfig::new().with_mines(true);
    let mut session = mined_session(&config, &[Coord::new(0, 0)]);
    session.board = reversi_rules::Board::empty();
    session.board.set(Coord::new(0, 1), CellState::White);
    session.board.set(Coord::new(0, 2), CellState::Black);

    let mut controller = TurnController::resume(config, session, 99);
    assert!(controller.submit_move(Coord::new(0, 0)));

    controller.advance(EXPLOSION_DELAY_MS + PASS_DELAY_MS);

    assert!(controller.is_over());
    let counts = controller.session().board.count_discs();
    assert_eq!(counts.black, 1);
    assert_eq!(counts.white, 0);
}

#[test]
fn mine_mode_off_ignores_layout() {
    // Defensive: a layout sneaked into a session with mine mode off
    // never detonates.
    let config = SessionConfig::default();
    let session = mined_session(&config, &[Coord::new(2, 3)]);

    let mut controller = TurnController::resume(config, session, 99);
    assert!(controller.submit_move(Coord::new(2, 3)));
    assert!(controller.is_idle());
    assert_eq!(
        controller.session().board.get(Coord::new(2, 3)),
        CellState::Black
    );
}

#[test]
fn removal_changes_exactly_one_cell() {
    let config = SessionConfig::new().with_remove_start_turn(0);
    let mut controller = TurnController::new(config, 5);

    let before = controller.session().board;
    assert!(controller.remove_random());
    let after = controller.session().board;

    let changed: Vec<_> = Coord::all()
        .filter(|&c| before.get(c) != after.get(c))
        .collect();
    assert_eq!(changed.len(), 1);
    assert!(!before.get(changed[0]).is_empty());
    assert!(after.get(changed[0]).is_empty());
}

#[test]
fn removal_is_deterministic_per_seed() {
    let config = SessionConfig::new().with_remove_start_turn(0);

    let target = |seed: u64| {
        let mut controller = TurnController::new(config, seed);
        assert!(controller.remove_random());
        let board = controller.session().board;
        Coord::all().find(|&c| board.get(c).is_empty() && {
            // The four starting cells are the only occupied ones.
            [
                Coord::new(3, 3),
                Coord::new(3, 4),
                Coord::new(4, 3),
                Coord::new(4, 4),
            ]
            .contains(&c)
        })
    };

    assert_eq!(target(12), target(12));
}

#[test]
fn removal_keeps_turn_and_mover() {
    let config = SessionConfig::new().with_remove_start_turn(0);
    let mut controller = TurnController::new(config, 5);

    assert!(controller.remove_random());

    assert_eq!(controller.session().current_player, Player::Black);
    assert_eq!(controller.session().turn_count, 4);
    assert_eq!(controller.phase(), Phase::AwaitingMove);
}

#[test]
fn removal_gating_is_conjunction_of_all_conditions() {
    // Unlock turn not reached.
    let mut locked = TurnController::new(SessionConfig::default(), 5);
    assert!(!locked.remove_random());

    // Allowance zero: feature disabled outright.
    let disabled_config = SessionConfig::new()
        .with_remove_count(0)
        .with_remove_start_turn(0);
    let mut disabled = TurnController::new(disabled_config, 5);
    assert!(!disabled.remove_random());
    assert!(!disabled.view().remove_control.visible);

    // Cooldown running.
    let cooling_config = SessionConfig::new()
        .with_remove_start_turn(0)
        .with_remove_interval(5);
    let mut cooling = TurnController::new(cooling_config, 5);
    assert!(cooling.remove_random());
    assert!(!cooling.remove_random());
}

#[test]
fn removal_counters_are_per_player() {
    let config = SessionConfig::new()
        .with_remove_start_turn(0)
        .with_remove_interval(0);
    let mut controller = TurnController::new(config, 5);

    assert!(controller.remove_random());
    assert_eq!(controller.session().removal[Player::Black].remaining, 2);
    assert_eq!(controller.session().removal[Player::White].remaining, 3);

    // Hand the turn to White; their allowance is untouched.
    let coord = controller.view().legal_moves[0];
    assert!(controller.submit_move(coord));
    assert_eq!(controller.session().current_player, Player::White);
    assert!(controller.remove_random());
    assert_eq!(controller.session().removal[Player::White].remaining, 2);
}

#[test]
fn removal_control_labels_follow_the_gate() {
    let config = SessionConfig::new()
        .with_remove_start_turn(6)
        .with_remove_interval(4);
    let mut controller = TurnController::new(config, 5);

    assert_eq!(controller.view().remove_control.label, "Locked until turn 6");

    // Two placements reach turn 6.
    for _ in 0..2 {
        let coord = controller.view().legal_moves[0];
        assert!(controller.submit_move(coord));
    }
    assert_eq!(
        controller.view().remove_control.label,
        "Remove random (Black: 3 left)"
    );

    assert!(controller.remove_random());
    assert_eq!(
        controller.view().remove_control.label,
        "Ready again at turn 10"
    );
}

#[test]
fn cpu_turn_blocks_removal() {
    let config = SessionConfig::new()
        .with_cpu(true)
        .with_remove_start_turn(0);
    let mut controller = TurnController::new(config, 5);

    assert!(controller.submit_move(Coord::new(2, 3)));
    assert_eq!(controller.phase(), Phase::ThinkingCpu);
    assert!(!controller.remove_random());

    controller.advance(CPU_DELAY_MS);
    assert!(controller.remove_random());
}

#[test]
fn session_checkpoint_round_trips_through_serde() {
    let config = SessionConfig::new().with_mines(true).with_remove_start_turn(0);
    let mut controller = TurnController::new(config, 5);
    controller.submit_move(Coord::new(2, 3));
    controller.advance(EXPLOSION_DELAY_MS);

    let json = serde_json::to_string(controller.session()).unwrap();
    let restored: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, controller.session());

    // A controller resumed from the checkpoint plays on.
    let resumed = TurnController::resume(config, restored, 5);
    assert!(!resumed.is_over());
}
