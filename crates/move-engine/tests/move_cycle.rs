//! End-to-end checks of the request/response cycle.

use chess_core::{Cell, Color, Coordinate, MoveError, PieceKind};
use move_engine::{Board, LenientRules, MoveOutcome, RuleSet};
use proptest::prelude::*;

fn sq(name: &str) -> Coordinate {
    Coordinate::from_algebraic(name).unwrap()
}

fn square_name() -> impl Strategy<Value = String> {
    ("[a-h]", "[1-8]").prop_map(|(f, r)| format!("{}{}", f, r))
}

#[test]
fn starting_squares_parse_back_to_their_coordinates() {
    let board = Board::initialize();
    let mut seen = 0;
    for (coord, kind, color) in board.pieces() {
        let name = coord.to_algebraic().unwrap();
        let parsed = Coordinate::from_algebraic(&name).unwrap();
        assert_eq!(parsed, coord);
        assert_eq!(board.piece_at(parsed), Cell::Occupied(kind, color));
        seen += 1;
    }
    assert_eq!(seen, 32);

    // White's pieces sit on ranks 1-2, Black's on ranks 7-8.
    assert_eq!(
        board.piece_at(sq("e1")),
        Cell::Occupied(PieceKind::King, Color::White)
    );
    assert_eq!(
        board.piece_at(sq("d8")),
        Cell::Occupied(PieceKind::Queen, Color::Black)
    );
}

#[test]
fn malformed_text_is_rejected_without_touching_the_board() {
    let board = Board::initialize();
    for text in ["e2-e4", "e2 to e44", "", "e2 to", "to e4", "e2 to e4 to e5"] {
        let outcome = LenientRules.play(&board, text);
        assert!(
            matches!(
                outcome,
                MoveOutcome::Rejected {
                    error: MoveError::Parse(_),
                    ..
                }
            ),
            "{:?} should be a parse rejection, got {:?}",
            text,
            outcome
        );
        assert_eq!(*outcome.board(), board);
    }
}

#[test]
fn off_board_squares_are_out_of_bounds() {
    let board = Board::initialize();
    for text in ["e2 to e9", "i2 to e4", "e0 to e4", "a1 to A1"] {
        let outcome = LenientRules.play(&board, text);
        assert!(matches!(
            outcome.into_result(),
            Err(MoveError::OutOfBounds(_))
        ));
    }
}

#[test]
fn rejection_reasons_follow_check_order() {
    let board = Board::initialize();
    assert!(matches!(
        LenientRules.play(&board, "e4 to e5").into_result(),
        Err(MoveError::EmptySource(_))
    ));
    assert!(matches!(
        LenientRules.play(&board, "e2 to e5").into_result(),
        Err(MoveError::IllegalMove {
            piece: PieceKind::Pawn,
            ..
        })
    ));
}

#[test]
fn knight_moves_through_the_cycle() {
    let board = Board::from_placement("8/8/8/8/3N4/8/8/8").unwrap();
    for to in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
        let outcome = LenientRules.play(&board, &format!("d4 to {}", to));
        let next = outcome.into_result().unwrap();
        assert_eq!(
            next.piece_at(sq(to)),
            Cell::Occupied(PieceKind::Knight, Color::White)
        );
    }
    assert!(!LenientRules.play(&board, "d4 to d5").is_accepted());
    assert!(!LenientRules.play(&board, "d4 to a1").is_accepted());
}

#[test]
fn pawn_double_advance() {
    let board = Board::initialize();
    assert!(LenientRules.play(&board, "e2 to e4").is_accepted());

    let advanced = LenientRules
        .play(&board, "e2 to e3")
        .into_result()
        .unwrap();
    assert!(!LenientRules.play(&advanced, "e3 to e5").is_accepted());

    let blocked = board.with_cell(sq("e3"), Cell::Occupied(PieceKind::Bishop, Color::Black));
    assert!(!LenientRules.play(&blocked, "e2 to e4").is_accepted());
}

#[test]
fn pawn_diagonal_capture() {
    let board = Board::from_placement("8/8/8/4r3/3P4/8/8/8").unwrap();
    let next = LenientRules.play(&board, "d4 to e5").into_result().unwrap();
    assert_eq!(
        next.piece_at(sq("e5")),
        Cell::Occupied(PieceKind::Pawn, Color::White)
    );
    assert_eq!(next.pieces().count(), 1);

    let board = Board::from_placement("8/8/8/8/3P4/8/8/8").unwrap();
    assert!(!LenientRules.play(&board, "d4 to e5").is_accepted());
}

#[test]
fn king_goes_anywhere() {
    let board = Board::initialize();
    assert!(LenientRules.play(&board, "e1 to e8").is_accepted());
    assert!(LenientRules.play(&board, "e8 to a1").is_accepted());
    assert!(LenientRules.play(&board, "e1 to h5").is_accepted());
}

#[test]
fn accepted_outcome_carries_the_request() {
    let board = Board::initialize();
    match LenientRules.play(&board, "b8 to c6") {
        MoveOutcome::Accepted { request, board } => {
            assert_eq!(request.from, sq("b8"));
            assert_eq!(request.to, sq("c6"));
            assert_eq!(board.piece_at(sq("b8")), Cell::Empty);
        }
        other => panic!("expected acceptance, got {:?}", other),
    }
}

proptest! {
    #[test]
    fn applying_a_move_touches_only_two_squares(from in square_name(), to in square_name()) {
        prop_assume!(from != to);
        let board = Board::initialize();
        let (from, to) = (sq(&from), sq(&to));
        let next = board.apply_move(from, to).unwrap();

        prop_assert_eq!(next.piece_at(to), board.piece_at(from));
        prop_assert_eq!(next.piece_at(from), Cell::Empty);
        for c in Coordinate::all().filter(|c| *c != from && *c != to) {
            prop_assert_eq!(next.piece_at(c), board.piece_at(c));
        }
    }

    #[test]
    fn rejected_moves_leave_the_board_unchanged(text in ".{0,12}") {
        let board = Board::initialize();
        let outcome = LenientRules.play(&board, &text);
        if !outcome.is_accepted() {
            prop_assert_eq!(*outcome.board(), board);
        }
    }

    #[test]
    fn legal_moves_through_the_cycle_match_apply_move(from in square_name(), to in square_name()) {
        let board = Board::initialize();
        let text = format!("{} to {}", from, to);
        let outcome = LenientRules.play(&board, &text);
        let (from, to) = (sq(&from), sq(&to));
        if LenientRules.is_legal(&board, from, to) {
            prop_assert_eq!(outcome.into_result().unwrap(), board.apply_move(from, to).unwrap());
        } else {
            prop_assert_eq!(*outcome.board(), board);
        }
    }

    #[test]
    fn king_accepts_every_destination(to in square_name()) {
        let board = Board::from_placement("8/8/8/8/8/8/8/4K3").unwrap();
        prop_assert!(LenientRules.is_legal(&board, sq("e1"), sq(&to)));
    }
}
