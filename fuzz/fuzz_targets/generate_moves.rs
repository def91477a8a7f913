#![no_main]
use draughts::checkers::board::Board;
use draughts::checkers::core::Color;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(board) = Board::from_notation(input) else {
        return;
    };
    for color in [Color::Light, Color::Dark] {
        for piece in board.pieces(color) {
            for (to, captures) in board.valid_moves(&piece).iter() {
                assert!(board.at(to).is_empty());
                assert!(to.is_playable());
                assert!(captures.iter().all(|captured| captured.color() != color));
                if !piece.is_king() {
                    assert_eq!(to.row() > piece.row(), color == Color::Light);
                }
                let mut after = board.clone();
                let _ = after.apply(&piece, to, captures);
                assert_eq!(
                    usize::from(after.remaining(color.opponent())) + captures.len(),
                    usize::from(board.remaining(color.opponent()))
                );
            }
        }
    }
});
