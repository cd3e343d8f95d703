//! Integration tests for the rules engine through the public API.

use gridgame::{GameError, GameSession, GameState, Marker, Move, Player, apply_move};

fn new_session(board_size: usize) -> GameSession {
    GameSession::new(
        "test-game".to_string(),
        [
            Player::new(Marker::X, "Alice"),
            Player::new(Marker::O, "Bob"),
        ],
        board_size,
    )
    .expect("Valid session")
}

fn play_all(moves: &[(usize, usize, Marker)]) -> GameSession {
    let mut session = new_session(3);
    for &(row, col, marker) in moves {
        session = apply_move(&session, Move::new(row, col, marker)).expect("Accepted move");
    }
    session
}

#[test]
fn test_first_move_on_empty_board() {
    let session = new_session(3);
    assert_eq!(session.state(), GameState::Started);

    let session = apply_move(&session, Move::new(0, 0, Marker::X)).expect("Valid move");
    assert_eq!(session.state(), GameState::Running);
    assert_eq!(session.board().get(0, 0).unwrap().marker(), Some(Marker::X));
    assert_eq!(session.last_marker(), Some(Marker::X));
}

#[test]
fn test_completing_a_row_wins() {
    // X X . / O . . / O . .  with O last to play
    let session = play_all(&[
        (0, 0, Marker::X),
        (1, 0, Marker::O),
        (0, 1, Marker::X),
        (2, 0, Marker::O),
    ]);
    assert_eq!(session.last_marker(), Some(Marker::O));

    let session = apply_move(&session, Move::new(0, 2, Marker::X)).expect("Winning move");
    assert_eq!(session.state(), GameState::Win);
    assert_eq!(session.winner(), Some(Marker::X));
}

#[test]
fn test_filling_board_without_line_draws() {
    // X O X / X O O / O . X  with O last to play; X fills (2,1)
    let session = play_all(&[
        (0, 0, Marker::X),
        (0, 1, Marker::O),
        (1, 0, Marker::X),
        (1, 1, Marker::O),
        (0, 2, Marker::X),
        (1, 2, Marker::O),
        (2, 2, Marker::X),
        (2, 0, Marker::O),
    ]);
    assert_eq!(session.state(), GameState::Running);

    let session = apply_move(&session, Move::new(2, 1, Marker::X)).expect("Final move");
    assert!(session.board().is_full());
    assert_eq!(session.state(), GameState::Draw);
    assert_eq!(session.winner(), None);
}

#[test]
fn test_terminal_session_rejects_moves() {
    let session = play_all(&[
        (0, 0, Marker::X),
        (1, 0, Marker::O),
        (0, 1, Marker::X),
        (2, 0, Marker::O),
        (0, 2, Marker::X),
    ]);
    assert_eq!(session.state(), GameState::Win);

    let err = apply_move(&session, Move::new(1, 1, Marker::O)).unwrap_err();
    assert_eq!(err, GameError::GameAlreadyEnded(GameState::Win));
    // Terminality is absorbing: the snapshot is unchanged
    assert_eq!(session.state(), GameState::Win);
    assert_eq!(session.winner(), Some(Marker::X));
}

#[test]
fn test_row_ten_on_three_board_is_out_of_bounds() {
    let session = new_session(3);
    let err = apply_move(&session, Move::new(10, 0, Marker::X)).unwrap_err();
    assert_eq!(
        err,
        GameError::OutOfBounds {
            row: 10,
            col: 0,
            size: 3
        }
    );
}

#[test]
fn test_consecutive_moves_by_same_marker_rejected() {
    let session = new_session(3);
    let session = apply_move(&session, Move::new(0, 0, Marker::X)).expect("First move");
    let err = apply_move(&session, Move::new(1, 1, Marker::X)).unwrap_err();
    assert_eq!(err, GameError::NotPlayerTurn(Marker::X));
    // The rejected marker's cell is untouched
    assert!(session.board().get(1, 1).unwrap().is_empty());
}

#[test]
fn test_every_axis_family_can_win() {
    // Column win for O
    let session = play_all(&[
        (0, 0, Marker::X),
        (0, 1, Marker::O),
        (1, 0, Marker::X),
        (1, 1, Marker::O),
        (2, 2, Marker::X),
    ]);
    let session = apply_move(&session, Move::new(2, 1, Marker::O)).expect("Column win");
    assert_eq!(session.winner(), Some(Marker::O));

    // Main diagonal win for X
    let session = play_all(&[
        (0, 0, Marker::X),
        (0, 1, Marker::O),
        (1, 1, Marker::X),
        (0, 2, Marker::O),
    ]);
    let session = apply_move(&session, Move::new(2, 2, Marker::X)).expect("Diagonal win");
    assert_eq!(session.winner(), Some(Marker::X));

    // Anti-diagonal win for X
    let session = play_all(&[
        (0, 2, Marker::X),
        (0, 0, Marker::O),
        (1, 1, Marker::X),
        (0, 1, Marker::O),
    ]);
    let session = apply_move(&session, Move::new(2, 0, Marker::X)).expect("Anti-diagonal win");
    assert_eq!(session.winner(), Some(Marker::X));
}

#[test]
fn test_larger_board_requires_full_line() {
    let mut session = new_session(4);
    // X builds row 0, O builds row 3; three in a row is not a win on 4x4
    for col in 0..3 {
        session = apply_move(&session, Move::new(0, col, Marker::X)).expect("Valid move");
        session = apply_move(&session, Move::new(3, col, Marker::O)).expect("Valid move");
    }
    assert_eq!(session.state(), GameState::Running);

    // The fourth cell completes the row
    let session = apply_move(&session, Move::new(0, 3, Marker::X)).expect("Winning move");
    assert_eq!(session.state(), GameState::Win);
    assert_eq!(session.winner(), Some(Marker::X));
}

#[test]
fn test_either_marker_may_open() {
    let session = new_session(3);
    let session = apply_move(&session, Move::new(1, 1, Marker::O)).expect("O opens");
    assert_eq!(session.last_marker(), Some(Marker::O));

    let session = apply_move(&session, Move::new(0, 0, Marker::X)).expect("X replies");
    assert_eq!(session.last_marker(), Some(Marker::X));
}

#[test]
fn test_session_survives_json_round_trip_mid_game() {
    let session = play_all(&[(0, 0, Marker::X), (1, 1, Marker::O)]);
    let json = serde_json::to_string(&session).expect("Serializable");
    let restored: GameSession = serde_json::from_str(&json).expect("Deserializable");
    assert_eq!(restored, session);

    // Play continues on the restored snapshot
    let restored = apply_move(&restored, Move::new(0, 1, Marker::X)).expect("Valid move");
    assert_eq!(restored.state(), GameState::Running);
}
