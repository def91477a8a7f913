#![no_main]
use draughts::checkers::board::Board;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(board) = Board::from_notation(s) {
            let notation = board.to_string();
            let reparsed = Board::from_notation(&notation)
                .expect("printed notation should be parsed back");
            assert!(board == reparsed, "{notation}");
        }
    }
});
