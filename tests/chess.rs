use std::sync::{Arc, Mutex};

use ply::chess::board::Board;
use ply::chess::core::{Color, Piece, PieceKind, Square};
use ply::chess::game::{ErrorPolicy, Game};
use ply::chess::openings::OpeningTable;
use ply::chess::san::to_san;
use ply::Error;
use pretty_assertions::assert_eq;

fn play(game: &mut Game, moves: &[&str]) {
    for next_move in moves {
        game.make_move(*next_move)
            .unwrap_or_else(|e| panic!("{next_move} should be playable: {e}"));
    }
}

#[test]
fn scholars_mate() {
    let mut game = Game::new();
    play(&mut game, &["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qxf7#"]);
    assert_eq!(game.transcript(), "1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7#");
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(
        game.piece_at(Square::F7),
        Some(Piece::new(PieceKind::Queen, Color::White))
    );
    let last = game.history().last().unwrap();
    assert_eq!(
        last.captured(),
        Some(Piece::new(PieceKind::Pawn, Color::Black))
    );
}

// Only undefended squares are treated as attacked: the queen on f7 is
// protected by the bishop, yet the king may take it.
#[test]
fn defended_pieces_are_capturable_by_the_king() {
    let mut game = Game::new();
    play(&mut game, &["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qxf7#"]);
    assert!(game.legal_notation().contains(&"Kxf7".to_string()));
    assert!(!game.legal_notation().contains(&"Ke7".to_string()));
    let attackers: Vec<Square> = game
        .attackers(Square::F7, Color::White)
        .into_iter()
        .map(|(square, _)| square)
        .collect();
    assert!(attackers.is_empty());
}

#[test]
fn takeback_restores_everything() {
    let moves = ["d4", "d5", "c4", "dxc4", "e3", "b5", "a4", "c6", "axb5", "cxb5"];
    let mut game = Game::new();
    let mut snapshots = vec![(game.board().clone(), game.transcript(), game.turn())];
    for next_move in moves {
        play(&mut game, &[next_move]);
        snapshots.push((game.board().clone(), game.transcript(), game.turn()));
    }
    assert_eq!(
        game.transcript(),
        "1. d4 d5 2. c4 dxc4 3. e3 b5 4. a4 c6 5. axb5 cxb5"
    );
    let _ = snapshots.pop();
    while let Some((board, transcript, turn)) = snapshots.pop() {
        game.takeback();
        assert_eq!(game.board(), &board);
        assert_eq!(game.transcript(), transcript);
        assert_eq!(game.turn(), turn);
    }
    assert!(game.history().is_empty());
    game.takeback();
    assert_eq!(game.board(), &Board::starting());
}

#[test]
fn opening_names() {
    let mut game = Game::new();
    play(&mut game, &["d4", "d5", "c4"]);
    assert_eq!(
        game.opening().map(ToString::to_string),
        Some("D06 Queen's Gambit".to_string())
    );
    play(&mut game, &["dxc4"]);
    assert_eq!(
        game.opening().map(|o| o.name.as_str()),
        Some("Queen's Gambit Accepted")
    );
    game.takeback();
    play(&mut game, &["e6"]);
    assert_eq!(
        game.opening().map(|o| o.name.as_str()),
        Some("Queen's Gambit Declined")
    );
    game.takeback();
    game.takeback();
    game.takeback();
    game.takeback();
    assert_eq!(game.opening(), None);
}

#[test]
fn openings_from_json() {
    let book = OpeningTable::from_json(
        r#"[
            {"eco": "A00", "name": "Polish Opening", "moves": "1. b4"},
            {"eco": "A00", "name": "Polish Opening: Outflank Variation", "moves": "1. b4 c6"}
        ]"#,
    )
    .unwrap();
    let mut game = Game::new().with_openings(Arc::new(book));
    play(&mut game, &["b4", "c6", "Bb2"]);
    assert_eq!(
        game.opening().map(|o| o.name.as_str()),
        Some("Polish Opening: Outflank Variation")
    );
}

#[test]
fn error_policies() {
    let mut strict = Game::new();
    assert_eq!(
        strict.make_move("e5"),
        Err(Error::MoveNotPossible("e5".to_string()))
    );
    assert_eq!(
        strict.make_move("z9z9"),
        Err(Error::InvalidMove("z9z9".to_string()))
    );
    let mut lenient = Game::new().with_error_policy(ErrorPolicy::Suppress);
    assert_eq!(lenient.make_move("e5"), Ok(()));
    assert_eq!(lenient.make_move("z9z9"), Ok(()));
    assert_eq!(lenient.board(), &Board::starting());
    assert_eq!(lenient.turn(), Color::White);
    assert!(lenient.history().is_empty());
}

#[test]
fn notation_conversions() {
    let mut game = Game::new();
    assert_eq!(to_san("e2e4", game.board()), "e4");
    assert_eq!(to_san("g1f3", game.board()), "Nf3");
    play(&mut game, &["e4", "d5"]);
    assert_eq!(to_san("e4xd5", game.board()), "exd5");
    play(&mut game, &["e4xd5"]);
    assert_eq!(game.transcript(), "1. e4 d5 2. exd5");
}

#[test]
fn shared_between_threads() {
    let game = Arc::new(Mutex::new(Game::new()));
    let handle = {
        let game = Arc::clone(&game);
        std::thread::spawn(move || game.lock().unwrap().make_move("Nf3"))
    };
    handle.join().unwrap().unwrap();
    assert_eq!(game.lock().unwrap().transcript(), "1. Nf3");
}
