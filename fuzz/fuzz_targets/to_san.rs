#![no_main]
use libfuzzer_sys::fuzz_target;
use ply::chess::board::Board;
use ply::chess::san::{split_suffix, to_san, San};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let board = Board::starting();
        let converted = to_san(input, &board);
        // The annotation is always carried over verbatim.
        assert!(converted.ends_with(split_suffix(input).1));
        let _ = San::parse(input);
    }
});
