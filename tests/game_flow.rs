use chess_rules::game::{GameError, GameRepository, GameService, GameStatus, MemoryRepository};
use engine::constant::START_FEN;

// 学者将杀：每一步都由服务保存，最后一步将军结束对局
#[test]
fn scholars_mate_flow() {
    let mut service = GameService::new(MemoryRepository::default());
    let id = service.current_game().id;

    let tokens = ["Pe2e4", "Pe7e5", "Bf1c4", "Nb8c6", "Qd1h5", "Ng8f6", "Qh5f7"];
    let mut game = service.current_game();
    for token in tokens {
        game = service.make_move(id, token).unwrap();
        assert_eq!(game.last_move, token);
    }

    assert_eq!(game.status, GameStatus::Done);
    assert_eq!(
        game.fen,
        "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b - - 0 4"
    );
    assert_eq!(game.your_color, "black");
    assert_eq!(service.game(id).unwrap(), game);
    assert!(service.repository().current().is_none());

    // 对局结束后走子被忽略
    let after = service.make_move(id, "Ke8f7").unwrap();
    assert_eq!(after, game);

    let next = service.current_game();
    assert_ne!(next.id, id);
    assert_eq!(next.fen, START_FEN);
}

#[test]
fn interleaved_rejections() {
    let mut service = GameService::new(MemoryRepository::default());
    let id = service.current_game().id;

    let game = service.make_move(id, "Pe2e4").unwrap();
    // 轮到黑方，白方的走法被拒绝
    assert_eq!(service.make_move(id, "Pd2d4").unwrap(), game);
    assert_eq!(service.make_move(id, "nonsense").unwrap(), game);

    let game = service.make_move(id, "Pd7d5").unwrap();
    assert_eq!(game.your_color, "white");
    let game = service.make_move(id, "Pe4d5").unwrap();
    assert_eq!(
        game.fen,
        "rnbqkbnr/ppp1pppp/8/3P4/8/8/PPPP1PPP/RNBQKBNR b - - 0 2"
    );
    assert_eq!(game.status, GameStatus::Play);
    assert_eq!(service.make_move(id + 1, "Pe7e5"), Err(GameError::NotFound(id + 1)));
}

#[test]
fn json_record() {
    let mut service = GameService::new(MemoryRepository::default());
    let id = service.current_game().id;
    let game = service.make_move(id, "Ng1f3").unwrap();
    let json = serde_json::to_string(&game).unwrap();
    assert!(json.contains("\"LastMove\":\"Ng1f3\""));
    assert!(json.contains("\"Status\":\"play\""));
    assert!(json.contains(&format!("\"ID\":{}", id)));
}
