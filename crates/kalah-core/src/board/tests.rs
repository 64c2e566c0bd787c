//! Board rule tests

use super::*;

fn pit(i: usize) -> Pit {
    Pit::new(i).expect("pit index in range")
}

fn play(board: &mut Board, moves: &[usize]) {
    for &m in moves {
        board.apply_move(pit(m)).expect("legal move in test sequence");
    }
}

#[test]
fn test_start_position() {
    let board = Board::new();
    assert_eq!(board.pits(), &[4; 12]);
    assert_eq!(board.store(Player::One), 0);
    assert_eq!(board.store(Player::Two), 0);
    assert_eq!(board.turn(), Player::One);
    assert_eq!(board.total_stones(), 48);
    assert!(!board.is_terminal());
    assert_eq!(board.final_outcome(), None);
}

#[test]
fn test_legal_moves_ascending_for_side_to_move() {
    let board = Board::new();
    let moves: Vec<usize> = board.legal_moves().map(Pit::index).collect();
    assert_eq!(moves, vec![0, 1, 2, 3, 4, 5]);

    let board = Board::from_parts(
        [0, 3, 0, 2, 0, 1, 4, 4, 4, 4, 4, 4],
        [8, 10],
        Player::Two,
    )
    .unwrap();
    let moves: Vec<usize> = board.legal_moves().map(Pit::index).collect();
    assert_eq!(moves, vec![6, 7, 8, 9, 10, 11]);

    let board = Board::from_parts(
        [0, 3, 0, 2, 0, 1, 4, 4, 4, 4, 4, 4],
        [8, 10],
        Player::One,
    )
    .unwrap();
    let moves: Vec<usize> = board.legal_moves().map(Pit::index).collect();
    assert_eq!(moves, vec![1, 3, 5]);
    // a second pass yields the same sequence
    assert_eq!(board.legal_moves().count(), 3);
}

#[test]
fn test_sow_into_own_store_grants_extra_turn() {
    let mut board = Board::new();
    let undo = board.apply_move(pit(2)).unwrap();

    assert_eq!(undo.kind, MoveKind::ExtraTurn);
    assert_eq!(board.pits(), &[4, 4, 0, 5, 5, 5, 4, 4, 4, 4, 4, 4]);
    assert_eq!(board.store(Player::One), 1);
    assert_eq!(board.store(Player::Two), 0);
    assert_eq!(board.turn(), Player::One);
    assert_eq!(board.last_move(), Some(pit(2)));
}

#[test]
fn test_plain_move_switches_turn() {
    let mut board = Board::new();
    let undo = board.apply_move(pit(0)).unwrap();

    assert_eq!(undo.kind, MoveKind::Plain);
    assert_eq!(board.pits(), &[0, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4]);
    assert_eq!(board.turn(), Player::Two);
}

#[test]
fn test_sowing_skips_opponent_store() {
    // 10 stones from pit 3: 4, 5, store, 6..=11, then pit 0 (no stop in P2's store)
    let mut board = Board::from_parts(
        [1, 0, 0, 10, 4, 4, 4, 4, 4, 4, 4, 4],
        [5, 0],
        Player::One,
    )
    .unwrap();
    let undo = board.apply_move(pit(3)).unwrap();

    assert_eq!(undo.kind, MoveKind::Plain);
    assert_eq!(board.pits(), &[2, 0, 0, 0, 5, 5, 5, 5, 5, 5, 5, 5]);
    assert_eq!(board.store(Player::One), 6);
    assert_eq!(board.store(Player::Two), 0);
    assert_eq!(board.turn(), Player::Two);
}

#[test]
fn test_player_two_store_follows_pit_eleven() {
    let mut board = Board::from_parts(
        [4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
        [0, 0],
        Player::Two,
    )
    .unwrap();
    // 4 stones from pit 9: 10, 11, store, 0
    board.apply_move(pit(9)).unwrap();
    assert_eq!(board.pits(), &[5, 4, 4, 4, 4, 4, 4, 4, 4, 0, 5, 5]);
    assert_eq!(board.store(Player::Two), 1);
    assert_eq!(board.turn(), Player::One);

    // 2 stones from pit 10: 11, store
    let mut board = Board::from_parts(
        [4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 2, 4],
        [2, 0],
        Player::Two,
    )
    .unwrap();
    let undo = board.apply_move(pit(10)).unwrap();
    assert_eq!(undo.kind, MoveKind::ExtraTurn);
    assert_eq!(board.turn(), Player::Two);
}

#[test]
fn test_capture_from_start_sequence() {
    let mut board = Board::new();
    play(&mut board, &[0, 9, 1]);
    assert_eq!(board.pits(), &[1, 0, 6, 6, 6, 5, 4, 4, 4, 0, 5, 5]);
    assert_eq!(board.turn(), Player::One);
    let store_before = board.store(Player::One);
    let opposite = board.pit(pit(1).opposite());
    assert_eq!(opposite, 4);

    let undo = board.apply_move(pit(0)).unwrap();

    assert_eq!(undo.kind, MoveKind::Capture { captured: 4 });
    assert_eq!(board.pit(pit(1)), 0);
    assert_eq!(board.pit(pit(7)), 0);
    assert_eq!(board.store(Player::One), store_before + 1 + opposite);
    assert_eq!(board.turn(), Player::Two);
    assert_eq!(board.total_stones(), 48);
}

#[test]
fn test_no_capture_when_opposite_empty() {
    let mut board = Board::from_parts(
        [1, 0, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4],
        [7, 8],
        Player::One,
    )
    .unwrap();
    let undo = board.apply_move(pit(0)).unwrap();
    assert_eq!(undo.kind, MoveKind::Plain);
    assert_eq!(board.pit(pit(1)), 1);
    assert_eq!(board.store(Player::One), 7);
}

#[test]
fn test_no_capture_on_opponent_side() {
    // last stone lands in an empty pit on P2's side
    let mut board = Board::from_parts(
        [0, 0, 0, 0, 0, 2, 0, 4, 4, 4, 4, 4],
        [12, 14],
        Player::One,
    )
    .unwrap();
    let undo = board.apply_move(pit(5)).unwrap();
    assert_eq!(undo.kind, MoveKind::Plain);
    assert_eq!(board.pit(pit(6)), 1);
    assert_eq!(board.store(Player::One), 13);
}

#[test]
fn test_illegal_moves_rejected() {
    let mut board = Board::new();
    let err = board.apply_move(pit(7)).unwrap_err();
    assert_eq!(
        err,
        KalahError::IllegalMove {
            pit: pit(7),
            reason: IllegalMoveReason::WrongSide { to_move: Player::One },
        }
    );

    board.apply_move(pit(2)).unwrap();
    let before = board;
    let err = board.apply_move(pit(2)).unwrap_err();
    assert!(matches!(
        err,
        KalahError::IllegalMove { reason: IllegalMoveReason::EmptyPit, .. }
    ));
    assert_eq!(board, before);
}

#[test]
fn test_undo_restores_everything() {
    let mut board = Board::new();
    play(&mut board, &[0, 9]);
    let snapshot = board;

    let undo = board.apply_move(pit(1)).unwrap();
    assert_ne!(board, snapshot);
    board.undo_move(undo);
    assert_eq!(board, snapshot);
    assert_eq!(board.last_move(), Some(pit(9)));
}

#[test]
fn test_terminal_by_empty_side() {
    let board = Board::from_parts(
        [0, 0, 0, 0, 0, 0, 1, 2, 3, 0, 0, 0],
        [20, 22],
        Player::One,
    )
    .unwrap();
    assert_eq!(board.game_state(), GameState::EmptySide(Player::One));
    assert!(board.is_terminal());
    // P2 gets the 6 stones left on their side: 20 vs 28
    assert_eq!(board.final_outcome(), Some(Outcome::Win(Player::Two)));
    // the virtual sweep does not touch the board
    assert_eq!(board.side_stones(Player::Two), 6);
}

#[test]
fn test_terminal_by_majority() {
    let board = Board::from_parts(
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [25, 11],
        Player::Two,
    )
    .unwrap();
    assert_eq!(board.game_state(), GameState::MajorityStones);
    assert_eq!(board.final_outcome(), Some(Outcome::Win(Player::One)));
}

#[test]
fn test_not_terminal_with_all_pits_filled() {
    let board = Board::from_parts(
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [24, 12],
        Player::One,
    )
    .unwrap();
    assert!(!board.is_terminal());
}

#[test]
fn test_sweep_and_draw() {
    let mut board = Board::from_parts(
        [0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0],
        [22, 24],
        Player::Two,
    )
    .unwrap();
    assert_eq!(board.game_state(), GameState::EmptySide(Player::Two));
    assert_eq!(board.final_outcome(), Some(Outcome::Draw));

    assert_eq!(board.sweep_remaining(), Some(Outcome::Draw));
    assert_eq!(board.store(Player::One), 24);
    assert_eq!(board.side_stones(Player::One), 0);
    assert_eq!(board.total_stones(), 48);
}

#[test]
fn test_from_parts_rejects_wrong_total() {
    let err = Board::from_parts([4; 12], [1, 0], Player::One).unwrap_err();
    assert_eq!(err, KalahError::StoneCount { found: 49, expected: 48 });
}

#[test]
fn test_notation_roundtrip() {
    let mut board = Board::new();
    play(&mut board, &[0, 9, 1]);
    let text = board.to_notation();
    assert_eq!(text, "1 0 6 6 6 5 4 4 4 0 5 5 / 1 1 / 1");
    let parsed: Board = text.parse().unwrap();
    assert_eq!(parsed.pits(), board.pits());
    assert_eq!(parsed.store(Player::One), 1);
    assert_eq!(parsed.turn(), Player::One);
}

#[test]
fn test_notation_errors() {
    assert!(matches!("4 4 4".parse::<Board>(), Err(KalahError::Parse(_))));
    assert!(matches!(
        "4 4 4 4 4 4 4 4 4 4 4 / 0 0 / 1".parse::<Board>(),
        Err(KalahError::Parse(_))
    ));
    assert!(matches!(
        "4 4 4 4 4 4 4 4 4 4 4 4 / 0 0 / 3".parse::<Board>(),
        Err(KalahError::Parse(_))
    ));
    assert!(matches!(
        "4 4 4 4 4 4 4 4 4 4 4 4 / 0 1 / 2".parse::<Board>(),
        Err(KalahError::StoneCount { .. })
    ));
}

#[test]
fn test_serde_keeps_last_move() {
    let mut board = Board::new();
    play(&mut board, &[3]);
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
    assert_eq!(back.last_move(), Some(pit(3)));
}

#[test]
fn test_serde_rejects_wrong_stone_count() {
    // 61 stones, with one pit beyond any reachable count
    let json = r#"{"pits":[60,0,0,0,0,0,1,0,0,0,0,0],"stores":[0,0],"turn":"One","last_move":null}"#;
    let err = serde_json::from_str::<Board>(json).unwrap_err();
    assert!(err.to_string().contains("61"), "{err}");

    let json = r#"{"pits":[4,4,4,4,4,4,4,4,4,4,4,4],"stores":[0,1],"turn":"Two","last_move":null}"#;
    assert!(serde_json::from_str::<Board>(json).is_err());
}

#[test]
fn test_display_layout() {
    let board = Board::new();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].trim_start().starts_with("11"));
    assert!(lines[4].trim_start().starts_with('0'));
    assert_eq!(lines[5], "P1 to move");
}
