use chess_rules::{Color, Game, GameStatus};

fn play_all(game: &mut Game, moves: &[&str]) {
    for mv in moves {
        game.play_uci(mv).unwrap_or_else(|e| panic!("{mv}: {e}"));
    }
}

#[test]
fn fools_mate_is_checkmate() {
    let mut game = Game::new();
    play_all(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(game.is_in_check(Color::White));
    assert!(!game.has_moves(Color::White));
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert!(game.status().is_over());
}

#[test]
fn scholars_mate_is_checkmate() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert_eq!(game.status(), GameStatus::Checkmate);
}

#[test]
fn blockable_check_is_only_check() {
    let mut game = Game::new();
    play_all(&mut game, &["e2e4", "f7f5", "d1h5"]);
    assert!(game.is_in_check(Color::Black));
    assert!(game.has_moves(Color::Black));
    assert_eq!(game.status(), GameStatus::Check);

    game.play_uci("g7g6").unwrap();
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn boxed_in_king_without_check_is_stalemate() {
    let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!game.is_in_check(Color::Black));
    assert!(!game.has_moves(Color::Black));
    assert_eq!(game.status(), GameStatus::Stalemate);
}

#[test]
fn queries_do_not_refuse_a_finished_game() {
    let mut game = Game::new();
    play_all(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    // Nothing legal is left, so every attempt is simply rejected.
    assert!(!game.make_move("e1".parse().unwrap(), "f2".parse().unwrap()));
    assert_eq!(game.history().len(), 4);
}

#[test]
fn attack_geometry_ignores_whose_turn_it_is() {
    let game = Game::new();
    let e3 = "e3".parse().unwrap();
    let e6 = "e6".parse().unwrap();
    let e5 = "e5".parse().unwrap();
    assert!(game.is_square_attacked(e3, Color::White));
    assert!(game.is_square_attacked(e6, Color::Black));
    assert!(!game.is_square_attacked(e5, Color::Black));
}
