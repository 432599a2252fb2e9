//! End-to-end rule scenarios played on parsed layouts.

use chess_core::{Color, Coordinate, Layout, PieceKind, STANDARD_LAYOUT};
use chess_engine::{Board, EngineError};

fn c(row: i32, column: i32) -> Coordinate {
    Coordinate::new(row, column).unwrap()
}

fn queen() -> PieceKind {
    PieceKind::Queen
}

const CASTLING: &str = "r---k--r\n\n\n\n\n\n\nR---K--R";

#[test]
fn opening_pawn_moves() {
    let board = Board::standard();
    assert!(board.is_legal_move(c(6, 4), c(4, 4), Color::White));
    assert!(!board.is_legal_move(c(6, 4), c(3, 4), Color::White));
}

#[test]
fn back_rank_mate_and_interposition() {
    let mut board = Board::parse("Q---k--r\nR\n\n\n\n\n\nR---K").unwrap();
    assert!(board.is_in_check(Color::Black));
    assert_eq!(board.is_in_checkmate(Color::Black), Ok(true));
    assert_eq!(board.is_in_checkmate(Color::White), Ok(false));

    board.apply_move(c(0, 7), c(2, 1), queen).unwrap();
    assert_eq!(board.is_in_checkmate(Color::Black), Ok(false));
    assert!(board.is_legal_move(c(2, 1), c(0, 1), Color::Black));

    board.apply_move(c(2, 1), c(0, 1), queen).unwrap();
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn king_and_pawns_stalemate() {
    let board = Board::parse("-------k\n-----Q\n------K\np\nP").unwrap();
    assert!(!board.is_in_check(Color::Black));
    assert!(board.is_in_stalemate(Color::Black));
    assert!(!board.is_in_stalemate(Color::White));
}

#[test]
fn pawn_capture_rules_out_stalemate() {
    let board = Board::parse("-------k\n-----Q\n------K\np\nPP").unwrap();
    assert!(!board.is_in_check(Color::Black));
    assert!(board.legal_destinations(c(0, 7)).is_empty());
    assert!(!board.is_legal_move(c(3, 0), c(4, 0), Color::Black));
    assert!(board.is_legal_move(c(3, 0), c(4, 1), Color::Black));
    assert!(!board.is_in_stalemate(Color::Black));
}

#[test]
fn layout_roundtrip() {
    let board = Board::standard();
    let printed = board.to_string();
    assert_eq!(Board::parse(&printed).unwrap().to_string(), printed);
    assert_eq!(
        printed,
        "rhbqkbhr\npppppppp\n--------\n--------\n--------\n--------\nPPPPPPPP\nRHBQKBHR"
    );
    assert_eq!(
        Layout::parse(STANDARD_LAYOUT).unwrap().to_string(),
        printed
    );
}

#[test]
fn roundtrip_drops_moved_flags_only() {
    let mut board = Board::standard();
    board.apply_move(c(6, 4), c(4, 4), queen).unwrap();
    let reloaded = Board::parse(&board.to_string()).unwrap();
    assert_eq!(reloaded.to_string(), board.to_string());
    assert!(board.piece_at(c(4, 4)).unwrap().has_moved);
    assert!(!reloaded.piece_at(c(4, 4)).unwrap().has_moved);
}

#[test]
fn promotion_to_queen() {
    let mut board = Board::parse("----k\n-P\n\n\n\n\n\n----K").unwrap();
    assert!(board.is_legal_move(c(1, 1), c(0, 1), Color::White));
    board.apply_move(c(1, 1), c(0, 1), queen).unwrap();

    let promoted = board.piece_at(c(0, 1)).unwrap();
    assert_eq!(promoted.kind, PieceKind::Queen);
    assert_eq!(promoted.color, Color::White);
    assert_eq!(board.piece_at(c(1, 1)), None);
    assert!(board.is_in_check(Color::Black));
}

#[test]
fn black_promotion() {
    let mut board = Board::parse("----k\n\n\n\n\n\n-------p\nK").unwrap();
    board.apply_move(c(6, 7), c(7, 7), || PieceKind::Rook).unwrap();
    assert_eq!(board.to_string().lines().last(), Some("K------r"));
}

#[test]
fn promotion_to_pawn_is_rejected() {
    let mut board = Board::parse("----k\n-P\n\n\n\n\n\n----K").unwrap();
    assert_eq!(
        board.apply_move(c(1, 1), c(0, 1), || PieceKind::Pawn),
        Err(EngineError::InvalidPromotionChoice(PieceKind::Pawn))
    );
}

#[test]
fn castling_both_sides() {
    let board = Board::parse(CASTLING).unwrap();
    assert!(board.is_legal_move(c(7, 4), c(7, 6), Color::White));
    assert!(board.is_legal_move(c(7, 4), c(7, 2), Color::White));
    assert!(board.is_legal_move(c(0, 4), c(0, 6), Color::Black));
    assert!(board.is_legal_move(c(0, 4), c(0, 2), Color::Black));
    assert!(!board.is_legal_move(c(7, 4), c(7, 7), Color::White));

    let destinations = board.legal_destinations(c(7, 4));
    assert!(destinations.contains(&c(7, 6)));
    assert!(destinations.contains(&c(7, 2)));
}

#[test]
fn castling_lost_after_rook_moves() {
    let mut board = Board::parse(CASTLING).unwrap();
    board.apply_move(c(7, 7), c(6, 7), queen).unwrap();
    board.apply_move(c(6, 7), c(7, 7), queen).unwrap();
    assert!(!board.is_legal_move(c(7, 4), c(7, 6), Color::White));
    assert!(board.is_legal_move(c(7, 4), c(7, 2), Color::White));
}

#[test]
fn castling_lost_after_king_moves() {
    let mut board = Board::parse(CASTLING).unwrap();
    board.apply_move(c(7, 4), c(7, 5), queen).unwrap();
    board.apply_move(c(7, 5), c(7, 4), queen).unwrap();
    assert!(!board.is_legal_move(c(7, 4), c(7, 6), Color::White));
    assert!(!board.is_legal_move(c(7, 4), c(7, 2), Color::White));
}

#[test]
fn castling_through_threatened_square() {
    let mut board = Board::parse("----k\n\n\n\n\n-----r\n\nR---K--R").unwrap();
    assert!(!board.is_legal_move(c(7, 4), c(7, 6), Color::White));
    assert!(board.is_legal_move(c(7, 4), c(7, 2), Color::White));

    board.apply_move(c(5, 5), c(2, 7), queen).unwrap();
    assert!(board.is_legal_move(c(7, 4), c(7, 6), Color::White));
}

#[test]
fn castling_onto_threatened_square() {
    let board = Board::parse("----k\n\n\n\n\n------r\n\nR---K--R").unwrap();
    assert!(!board.is_in_check(Color::White));
    assert!(!board.is_legal_move(c(7, 4), c(7, 6), Color::White));
    assert!(board.is_legal_move(c(7, 4), c(7, 2), Color::White));

    let board = Board::parse("----k\n\n\n\n\n--r\n\nR---K--R").unwrap();
    assert!(!board.is_legal_move(c(7, 4), c(7, 2), Color::White));
    assert!(board.is_legal_move(c(7, 4), c(7, 6), Color::White));
}

#[test]
fn castling_out_of_check() {
    let board = Board::parse("----k\n\n\n----r\n\n\n\nR---K--R").unwrap();
    assert!(board.is_in_check(Color::White));
    assert!(!board.is_legal_move(c(7, 4), c(7, 6), Color::White));
    assert!(!board.is_legal_move(c(7, 4), c(7, 2), Color::White));
}

#[test]
fn castling_needs_empty_path_to_rook() {
    let board = Board::parse("----k\n\n\n\n\n\n\nRH--K-HR").unwrap();
    assert!(!board.is_legal_move(c(7, 4), c(7, 2), Color::White));
    assert!(!board.is_legal_move(c(7, 4), c(7, 6), Color::White));
}

#[test]
fn castling_needs_rook() {
    let board = Board::parse("----k\n\n\n\n\n\n\n----K--B").unwrap();
    assert!(!board.is_legal_move(c(7, 4), c(7, 6), Color::White));
}

#[test]
fn king_cannot_capture_defended_piece() {
    let board = Board::parse("----k\n\n\n\n-------b\n\n-----p\n----K").unwrap();
    assert!(board.is_in_check(Color::White));
    assert!(!board.is_legal_move(c(7, 4), c(6, 5), Color::White));
    assert!(!board.is_legal_move(c(7, 4), c(7, 5), Color::White));
    assert!(board.is_legal_move(c(7, 4), c(7, 3), Color::White));
}

#[test]
fn moving_pinned_piece_is_self_check() {
    let board = Board::parse("----k\n\n\n\n----q\n\n----R\n----K").unwrap();
    assert!(board.is_legal_move(c(6, 4), c(5, 4), Color::White));
    assert!(board.is_legal_move(c(6, 4), c(4, 4), Color::White));
    assert!(!board.is_legal_move(c(6, 4), c(6, 0), Color::White));
}

#[test]
fn blockers_stop_every_slider() {
    for kind in ['R', 'B', 'Q'] {
        let (start, finish) = match kind {
            'B' => (c(7, 0), c(3, 4)),
            _ => (c(7, 0), c(3, 0)),
        };
        let mut rows = vec![String::from("-------k")];
        rows.extend(std::iter::repeat(String::new()).take(6));
        rows.push(format!("{}------K", kind));
        let clear = Board::parse(&rows.join("\n")).unwrap();
        assert!(clear.is_legal_move(start, finish, Color::White), "{}", kind);

        for blocker in start.squares_between(finish).unwrap() {
            let mut blocked_rows = rows.clone();
            let row = &mut blocked_rows[blocker.row() as usize];
            let mut cells: Vec<char> = format!("{:-<8}", row).chars().collect();
            cells[blocker.column() as usize] = 'p';
            *row = cells.into_iter().collect();

            let blocked = Board::parse(&blocked_rows.join("\n")).unwrap();
            assert!(
                !blocked.is_legal_move(start, finish, Color::White),
                "{} through {}",
                kind,
                blocker
            );
        }
    }
}

#[test]
fn knight_ignores_surrounding_pieces() {
    let board = Board::parse("----k\n\n\n\nppp\npHp\nppp\n----K").unwrap();
    assert!(board.is_legal_move(c(5, 1), c(3, 0), Color::White));
    assert!(board.is_legal_move(c(5, 1), c(3, 2), Color::White));
    assert!(board.is_legal_move(c(5, 1), c(7, 2), Color::White));
    assert_eq!(board.legal_destinations(c(5, 1)).len(), 6);
}
