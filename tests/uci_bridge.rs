use chess_rules::config::EngineConfig;
use chess_rules::uci::{go_command, parse_bestmove, position_command};
use chess_rules::{ChessError, Game, PieceKind};

#[test]
fn engine_is_handed_the_current_position() {
    let mut game = Game::new();
    game.play("e2", "e4").unwrap();
    assert_eq!(
        position_command(&game.to_fen()),
        "position fen rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
    assert_eq!(go_command(&EngineConfig::default()), "go depth 12");
    assert_eq!(go_command(&EngineConfig::new().with_depth(6)), "go depth 6");
}

#[test]
fn engine_reply_is_applied_as_a_coordinate_move() {
    let mut game = Game::new();
    game.play("e2", "e4").unwrap();

    let mv = parse_bestmove("bestmove e7e5 ponder g1f3").unwrap().unwrap();
    assert!(game.make_move(mv.from, mv.to));
    assert_eq!(game.history().last(), Some(&mv));
}

#[test]
fn promotion_suffix_is_ignored() {
    let mut game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let mv = parse_bestmove("bestmove a7a8r").unwrap().unwrap();
    assert!(game.make_move(mv.from, mv.to));
    assert_eq!(
        game.piece_at("a8".parse().unwrap()).map(|p| p.kind),
        Some(PieceKind::Queen)
    );
}

#[test]
fn engine_without_a_move_yields_none() {
    assert_eq!(parse_bestmove("bestmove (none)"), Ok(None));
    assert_eq!(parse_bestmove("bestmove 0000"), Ok(None));
}

#[test]
fn garbage_replies_are_errors() {
    assert_eq!(
        parse_bestmove("readyok"),
        Err(ChessError::InvalidEngineReply("readyok".to_string()))
    );
    assert_eq!(
        parse_bestmove("bestmove e2e9"),
        Err(ChessError::InvalidMove("e2e9".to_string()))
    );
}
