use draughts::checkers::board::Board;
use draughts::checkers::core::{Cell, Color, Piece, Square};
use itertools::Itertools;
use pretty_assertions::assert_eq;

fn setup(input: &str) -> Board {
    Board::try_from(input).unwrap_or_else(|e| panic!("parsing legal position {input}: {e}"))
}

fn piece_at(board: &Board, row: u8, col: u8) -> Piece {
    board
        .get(row, col)
        .piece()
        .expect("there should be a piece on the square")
}

fn occupied(board: &Board) -> usize {
    Square::iter().filter(|square| !board.at(*square).is_empty()).count()
}

#[test]
fn starting_setup() {
    let board = Board::starting();
    for color in [Color::Light, Color::Dark] {
        assert_eq!(board.pieces(color).count(), 12);
        assert_eq!(board.remaining(color), 12);
        assert_eq!(board.kings(color), 0);
        assert!(board.pieces(color).all(|piece| piece.square().is_playable()));
        assert!(board.pieces(color).all(|piece| !piece.is_king()));
    }
    assert!(board.pieces(Color::Light).all(|piece| piece.row() < 3));
    assert!(board.pieces(Color::Dark).all(|piece| piece.row() > 4));
    // The middle two rows are empty.
    for col in 0..8 {
        assert_eq!(board.get(3, col), Cell::Empty);
        assert_eq!(board.get(4, col), Cell::Empty);
    }
    assert_eq!(board.winner(), None);
    assert_eq!(Board::default(), board);
}

#[test]
#[should_panic(expected = "square coordinates should be within 0..BOARD_WIDTH")]
fn out_of_range_get() {
    let _ = Board::starting().get(8, 0);
}

#[test]
fn move_conservation() {
    let mut board = Board::starting();
    let piece = piece_at(&board, 5, 2);
    let moved = board.move_piece(&piece, Square::new(4, 3));
    assert_eq!(occupied(&board), 24);
    assert_eq!(board.get(5, 2), Cell::Empty);
    assert_eq!(board.get(4, 3), Cell::Occupied(moved));
    assert_eq!((moved.row(), moved.col()), (4, 3));
    assert_eq!(moved.color(), Color::Dark);
    assert!(!moved.is_king());
    assert_eq!(board.remaining(Color::Dark), 12);
    assert_eq!(board.remaining(Color::Light), 12);
}

#[test]
fn promotion() {
    let mut board = setup("8/2d5/8/8/8/8/5l2/8");
    let dark = piece_at(&board, 1, 2);
    let crowned = board.move_piece(&dark, Square::new(0, 1));
    assert!(crowned.is_king());
    assert!(piece_at(&board, 0, 1).is_king());
    assert_eq!(board.kings(Color::Dark), 1);
    assert_eq!(board.kings(Color::Light), 0);

    let light = piece_at(&board, 6, 5);
    let crowned = board.move_piece(&light, Square::new(7, 4));
    assert!(crowned.is_king());
    assert_eq!(board.kings(Color::Light), 1);
    assert_eq!(board.to_string(), "1D6/8/8/8/8/8/8/4L3");
}

#[test]
fn no_promotion_on_other_rows() {
    let mut board = setup("8/8/8/4l3/8/8/8/8");
    let light = piece_at(&board, 3, 4);
    let moved = board.move_piece(&light, Square::new(4, 5));
    assert!(!moved.is_king());
    assert_eq!(board.kings(Color::Light), 0);
}

#[test]
fn kings_are_crowned_once() {
    // A king returning to the promotion row stays a king and is not counted
    // again.
    let mut board = setup("8/8/8/8/8/8/3L4/8");
    let king = piece_at(&board, 6, 3);
    assert_eq!(board.kings(Color::Light), 1);
    let king = board.move_piece(&king, Square::new(7, 4));
    assert!(king.is_king());
    assert_eq!(board.kings(Color::Light), 1);
    let king = board.move_piece(&king, Square::new(6, 5));
    assert!(king.is_king());
    // Light kings don't get anything from reaching Dark's promotion row.
    let mut board = setup("8/2L5/8/8/8/8/8/8");
    let king = piece_at(&board, 1, 2);
    let _ = board.move_piece(&king, Square::new(0, 1));
    assert_eq!(board.kings(Color::Light), 1);
}

#[test]
fn capture_removal() {
    let mut board = setup("8/8/8/8/3l1l2/2d5/8/8");
    let captured = [piece_at(&board, 4, 3), piece_at(&board, 4, 5)];
    board.remove(&captured);
    assert_eq!(board.get(4, 3), Cell::Empty);
    assert_eq!(board.get(4, 5), Cell::Empty);
    assert_eq!(board.remaining(Color::Light), 0);
    assert_eq!(board.remaining(Color::Dark), 1);
    // Removing the same pieces again is a no-op.
    board.remove(&captured);
    assert_eq!(board.remaining(Color::Light), 0);
}

#[test]
fn stale_captures_spare_new_occupant() {
    let mut board = setup("8/8/8/8/3l4/2d5/8/8");
    let dark = piece_at(&board, 5, 2);
    let moves = board.valid_moves(&dark);
    let captures = moves.get(Square::new(3, 4)).unwrap();
    let _ = board.apply(&dark, Square::new(3, 4), captures);
    assert_eq!(board.remaining(Color::Light), 0);

    // Another Light man takes the square of the captured one.
    board.put(Piece::new(Color::Light, Square::new(3, 2)));
    let light = piece_at(&board, 3, 2);
    let moved = board.move_piece(&light, Square::new(4, 3));
    assert_eq!(captures[0].square(), moved.square());
    assert_ne!(captures[0], moved);

    board.remove(captures);
    assert_eq!(board.get(4, 3), Cell::Occupied(moved));
    assert_eq!(board.remaining(Color::Light), 1);
}

#[test]
fn apply_full_move() {
    let mut board = setup("8/8/8/8/3l4/8/1l6/d7");
    let piece = piece_at(&board, 7, 0);
    let moves = board.valid_moves(&piece);
    let captures = moves.get(Square::new(3, 4)).unwrap();
    let moved = board.apply(&piece, Square::new(3, 4), captures);
    assert_eq!(moved.square(), Square::new(3, 4));
    assert_eq!(board.to_string(), "8/8/8/4d3/8/8/8/8");
    assert_eq!(board.winner(), Some(Color::Dark));
}

#[test]
fn winner_detection() {
    let mut board = Board::starting();
    let dark = board.pieces(Color::Dark).collect_vec();
    for (i, piece) in dark.iter().enumerate() {
        assert_eq!(board.winner(), None, "{i} pieces removed");
        board.remove(&[*piece]);
    }
    assert_eq!(board.remaining(Color::Dark), 0);
    assert_eq!(board.winner(), Some(Color::Light));

    let mut board = Board::starting();
    let light = board.pieces(Color::Light).collect_vec();
    board.remove(&light);
    assert_eq!(board.winner(), Some(Color::Dark));
}

#[test]
fn empty_board_winner() {
    // Both sides are out of pieces: Light is checked first.
    assert_eq!(Board::empty().winner(), Some(Color::Light));
}

#[test]
fn notation_round_trip() {
    for notation in [
        "1l1l1l1l/l1l1l1l1/1l1l1l1l/8/8/d1d1d1d1/1d1d1d1d/d1d1d1d1",
        "1D6/8/8/4l3/8/8/8/6L1",
        "8/4l3/8/4l3/8/2l5/1d6/8",
    ] {
        assert_eq!(setup(notation).to_string(), notation);
    }
}
