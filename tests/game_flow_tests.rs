//! Game Flow Integration Tests
//!
//! Full games driven through square clicks, covering:
//! - Selection and turn alternation
//! - Status line after each move
//! - Win and draw conditions
//! - Undo and new game

use chess_rules::{Color, MoveFlags, PieceKind, RulesEngine, ShakmatyEngine, Square};
use chess_session::game::{ClickOutcome, GameSession, GameStatus};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Play `from` -> `to` as two clicks
fn play(session: &mut GameSession, from: &str, to: &str) -> ClickOutcome {
    session.handle_square_click(sq(from));
    session.handle_square_click(sq(to))
}

// ============================================================================
// Selection And Turns
// ============================================================================

#[test]
fn test_first_pawn_move() {
    let mut session: GameSession = GameSession::new();

    session.handle_square_click(sq("e2"));
    let targets: Vec<Square> = session.candidates().iter().map(|m| m.to).collect();
    assert!(targets.contains(&sq("e3")), "e2 pawn should reach e3");
    assert!(targets.contains(&sq("e4")), "e2 pawn should reach e4");

    let outcome = session.handle_square_click(sq("e4"));

    assert!(matches!(outcome, ClickOutcome::Moved(_)));
    assert_eq!(session.status_text(), "Black to move");
    assert_eq!(session.selected_square(), None, "selection cleared after a move");
}

#[test]
fn test_white_cannot_select_black_pieces() {
    let mut session: GameSession = GameSession::new();

    assert_eq!(session.handle_square_click(sq("e7")), ClickOutcome::Ignored);
    assert_eq!(session.selected_square(), None);
}

#[test]
fn test_turns_alternate() {
    let mut session: GameSession = GameSession::new();

    play(&mut session, "e2", "e4");
    assert_eq!(session.side_to_move(), Color::Black);

    // White pieces are not selectable on Black's turn
    assert_eq!(session.handle_square_click(sq("d2")), ClickOutcome::Ignored);

    play(&mut session, "e7", "e5");
    assert_eq!(session.side_to_move(), Color::White);
    assert_eq!(session.status_text(), "White to move");
}

// ============================================================================
// Game End
// ============================================================================

#[test]
fn test_fools_mate() {
    let mut session: GameSession = GameSession::new();

    play(&mut session, "f2", "f3");
    play(&mut session, "e7", "e5");
    play(&mut session, "g2", "g4");
    let outcome = play(&mut session, "d8", "h4");

    match outcome {
        ClickOutcome::Moved(m) => assert_eq!(m.san, "Qh4#"),
        other => panic!("expected a move, got {other:?}"),
    }
    // The side that just moved (Black) is named as the winner
    assert_eq!(session.status_text(), "Black wins by checkmate");
    assert_eq!(
        session.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
}

#[test]
fn test_check_is_reported() {
    let mut session: GameSession = GameSession::new();

    play(&mut session, "e2", "e4");
    play(&mut session, "f7", "f6");
    play(&mut session, "d1", "h5");

    assert_eq!(session.status_text(), "Black to move (in check)");
}

#[test]
fn test_stalemate_from_position() {
    let engine = ShakmatyEngine::from_fen("7k/8/6K1/8/8/8/5Q2/8 w - - 0 1").unwrap();
    let mut session = GameSession::with_engine(engine);
    assert_eq!(session.status_text(), "White to move");

    session.handle_square_click(sq("f2"));
    let outcome = session.handle_square_click(sq("f7"));

    assert!(matches!(outcome, ClickOutcome::Moved(_)), "Qf7 should be legal");

    assert_eq!(session.status_text(), "Stalemate");
    assert!(session.status().is_terminal());
}

// ============================================================================
// Special Moves
// ============================================================================

#[test]
fn test_promotion_defaults_to_queen() {
    let engine = ShakmatyEngine::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let mut session = GameSession::with_engine(engine);

    session.handle_square_click(sq("a7"));
    let outcome = session.handle_square_click(sq("a8"));

    match outcome {
        ClickOutcome::Moved(m) => {
            assert_eq!(m.promotion, Some(PieceKind::Queen));
            assert!(m.flags.contains(MoveFlags::PROMOTION));
        }
        other => panic!("expected a promotion, got {other:?}"),
    }
    let queen = session.board().piece_at(sq("a8")).expect("piece on a8");
    assert_eq!(queen.kind, PieceKind::Queen);
}

#[test]
fn test_castling_by_king_destination() {
    let mut session: GameSession = GameSession::new();
    play(&mut session, "e2", "e4");
    play(&mut session, "e7", "e5");
    play(&mut session, "g1", "f3");
    play(&mut session, "b8", "c6");
    play(&mut session, "f1", "c4");
    play(&mut session, "g8", "f6");

    let outcome = play(&mut session, "e1", "g1");

    match outcome {
        ClickOutcome::Moved(m) => assert!(m.is_castle(), "expected castling, got {}", m.san),
        other => panic!("expected castling, got {other:?}"),
    }
    assert_eq!(session.board().piece_at(sq("f1")).map(|p| p.kind), Some(PieceKind::Rook));
}

// ============================================================================
// Undo And New Game
// ============================================================================

#[test]
fn test_undo_restores_previous_position() {
    let mut session: GameSession = GameSession::new();
    play(&mut session, "e2", "e4");
    let after_first = session.board().clone();

    play(&mut session, "e7", "e5");
    let undone = session.undo().expect("a move to undo");

    assert_eq!(undone.san, "e5");
    assert_eq!(session.board(), &after_first);
    assert_eq!(session.status_text(), "Black to move");
    assert!(session.can_undo());
}

#[test]
fn test_undo_on_fresh_game_is_noop() {
    let mut session: GameSession = GameSession::new();
    let before = session.board().clone();

    assert!(!session.can_undo());
    assert_eq!(session.undo(), None);
    assert!(!session.can_undo());
    assert_eq!(session.board(), &before);
    assert_eq!(session.status_text(), "White to move");
}

#[test]
fn test_undo_leaves_checkmate() {
    let mut session: GameSession = GameSession::new();
    play(&mut session, "f2", "f3");
    play(&mut session, "e7", "e5");
    play(&mut session, "g2", "g4");
    play(&mut session, "d8", "h4");
    assert!(session.status().is_terminal());

    session.undo();

    assert_eq!(session.status_text(), "Black to move");
}

#[test]
fn test_new_game_resets_everything() {
    let mut session: GameSession = GameSession::new();
    let initial = session.board().clone();
    play(&mut session, "e2", "e4");
    session.handle_square_click(sq("e7"));

    session.new_game();

    assert_eq!(session.board(), &initial);
    assert_eq!(session.status_text(), "White to move");
    assert_eq!(session.selected_square(), None);
    assert!(!session.can_undo());
    assert!(session.history().is_empty());
    assert_eq!(session.engine().history_len(), 0);
}
