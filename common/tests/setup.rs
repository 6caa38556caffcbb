extern crate common;
extern crate rand;

use common::{
    algebraic_to_position, create_initial_board, create_initial_game_state, is_valid_position,
    position_to_algebraic, Board, CheckState, Error, GameState, Move, Origin, Piece, PieceBank,
    PieceColor, PieceId, PieceType, Position, BOARD_SIZE,
};

use rand::Rng;

#[test]
fn initial_board_counts() {
    let board = create_initial_board();
    let occupied: Vec<_> = board.occupied().collect();
    assert_eq!(occupied.len(), 10);
    assert_eq!((BOARD_SIZE * BOARD_SIZE) as usize - occupied.len(), 26);

    for &color in PieceColor::ALL.iter() {
        for &kind in PieceType::ALL.iter() {
            let count = occupied
                .iter()
                .filter(|&&(_, piece)| piece.color == color && piece.kind == kind)
                .count();
            let expected = if kind == PieceType::Queen { 0 } else { 1 };
            assert_eq!(count, expected, "{} {}", color, kind);
        }
    }
}

#[test]
fn boards_do_not_share_pieces() {
    let mut first = create_initial_board();
    let second = create_initial_board();
    assert_eq!(first, second);

    first
        .get_mut(Position::new(0, 0))
        .expect("white king")
        .has_moved = true;
    first.take(Position::new(4, 0)).expect("on board");

    assert!(!second.get(Position::new(0, 0)).unwrap().has_moved);
    assert!(second.get(Position::new(4, 0)).is_some());
    assert_ne!(first, second);
}

#[test]
fn initial_state_scenario() {
    let state = create_initial_game_state();
    assert_eq!(state.current_player, PieceColor::White);
    assert!(state.move_history().is_empty());
    assert!(state.last_move().is_none());
    assert!(state.piece_bank.pieces(PieceColor::White).is_empty());
    assert!(state.piece_bank.pieces(PieceColor::Black).is_empty());
    assert!(!state.is_check && !state.is_checkmate && !state.is_stalemate);

    let king = state.board.get(Position::new(0, 0)).unwrap();
    assert_eq!((king.kind, king.color), (PieceType::King, PieceColor::White));
    let pawn = state.board.get(Position::new(1, 5)).unwrap();
    assert_eq!((pawn.kind, pawn.color), (PieceType::Pawn, PieceColor::White));
}

#[test]
fn every_square_round_trips() {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            assert!(is_valid_position(pos));
            let square = position_to_algebraic(pos).unwrap();
            assert_eq!(algebraic_to_position(&square), Ok(pos));
        }
    }
    for file in "abcdef".chars() {
        for rank in "123456".chars() {
            let square: String = vec![file, rank].into_iter().collect();
            let pos = algebraic_to_position(&square).unwrap();
            assert_eq!(position_to_algebraic(pos).unwrap(), square);
        }
    }
    assert_eq!(algebraic_to_position("a1"), Ok(Position::new(0, 0)));
    assert_eq!(position_to_algebraic(Position::new(5, 3)).unwrap(), "d6");
    assert!(!is_valid_position(Position::new(6, 0)));
}

#[test]
fn random_coordinates_respect_bounds() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let row = rng.gen_range(-1000, 1000);
        let col = rng.gen_range(-1000, 1000);
        let inside = row >= 0 && row < 6 && col >= 0 && col < 6;
        assert_eq!(is_valid_position(Position::new(row, col)), inside);
    }
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn model_types_cross_threads() {
    assert_send_sync::<GameState>();
    assert_send_sync::<Board>();
    assert_send_sync::<PieceBank>();
    assert_send_sync::<Move>();
    assert_send_sync::<Origin>();
    assert_send_sync::<CheckState>();
    assert_send_sync::<Piece>();
    assert_send_sync::<PieceId>();
    assert_send_sync::<PieceType>();
    assert_send_sync::<PieceColor>();
    assert_send_sync::<Position>();
    assert_send_sync::<Error>();
}
