#![no_main]
use libfuzzer_sys::fuzz_target;
use ply::chess::game::Game;

// Plays whitespace-separated moves; rejected ones must leave the game intact
// and every accepted one must be undone by a takeback.
fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let mut game = Game::new();
    for token in input.split_whitespace() {
        let before = game.clone();
        if game.make_move(token).is_err() {
            assert_eq!(game.board(), before.board());
            assert_eq!(game.transcript(), before.transcript());
            continue;
        }
        assert_eq!(game.history().len(), before.history().len() + 1);
        assert_ne!(game.turn(), before.turn());
    }
    while !game.history().is_empty() {
        game.takeback();
    }
    assert_eq!(game.board(), Game::new().board());
    assert_eq!(game.transcript(), "");
});
