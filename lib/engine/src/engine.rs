/* 引擎门面：持有当前局面，对外提供走子、走法列表与将军查询 */
use tracing::{debug, trace};

use crate::board::Board;
use crate::constant::{BOARD_SIZE, EMPTY_FIGURE};
use crate::error::MoveError;
use crate::moves::Move;
use crate::piece::Color;
use crate::square::Square;

#[derive(Clone, Debug, Default)]
pub struct Engine {
    board: Board,
}

impl Engine {
    /// Engine over the position described by `fen`.
    ///
    /// An unusable encoding gives an empty board, see [`Board::from_fen`].
    pub fn new(fen: &str) -> Self {
        Engine {
            board: Board::from_fen(fen),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> &str {
        self.board.fen()
    }

    pub fn side_to_move(&self) -> Color {
        self.board.turn()
    }

    pub fn move_number(&self) -> u32 {
        self.board.move_number()
    }

    /// Play `token` and return the engine holding the successor position.
    pub fn try_apply(&self, token: &str) -> Result<Engine, MoveError> {
        let m = Move::parse(token, self.board.turn())?;
        if !self.board.can_move(&m) {
            return Err(MoveError::Illegal(token.to_owned()));
        }
        if self.board.is_check_after_move(&m) {
            return Err(MoveError::SelfCheck(token.to_owned()));
        }
        Ok(Engine {
            board: self.board.apply_unchecked(&m),
        })
    }

    /// Play `token`; a rejected move returns this engine unchanged.
    ///
    /// Callers tell the two outcomes apart by comparing [`Engine::fen`].
    pub fn apply(&self, token: &str) -> Engine {
        self.try_apply(token).unwrap_or_else(|err| {
            debug!(%err, fen = self.fen(), "move rejected");
            self.clone()
        })
    }

    /// Every legal move of the side to move, as tokens in board scan order.
    pub fn legal_moves(&self) -> Vec<String> {
        self.find_all_moves().iter().map(Move::to_string).collect()
    }

    fn find_all_moves(&self) -> Vec<Move> {
        let mut moves = vec![];
        // 遍历走棋方的每个棋子，再遍历每个目标格
        for (from, piece) in self.board.pieces() {
            for to in Square::all() {
                let m = Move::new(piece, from, to);
                if self.board.can_move(&m) && !self.board.is_check_after_move(&m) {
                    moves.push(m);
                }
            }
        }
        trace!(count = moves.len(), fen = self.fen(), "generated moves");
        moves
    }

    pub fn is_check(&self) -> bool {
        self.board.is_check()
    }

    /// Encoding letter of the piece on `(x, y)`, `.` for an empty square.
    pub fn figure_at(&self, x: i32, y: i32) -> char {
        self.board
            .piece_at(Square::new(x, y))
            .fen_char()
            .unwrap_or(EMPTY_FIGURE)
    }

    /// Rows of [`Engine::figure_at`] from rank 8 down to rank 1.
    pub fn rows(&self) -> Vec<String> {
        (0..BOARD_SIZE)
            .rev()
            .map(|y| (0..BOARD_SIZE).map(|x| self.figure_at(x, y)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::constant::START_FEN;
    use crate::engine::Engine;
    use crate::error::MoveError;
    use crate::piece::Color;

    #[test]
    fn test_start() {
        let engine = Engine::default();
        assert_eq!(engine.fen(), START_FEN);
        assert_eq!(engine.board().count_pieces(), 32);
        assert_eq!(engine.side_to_move(), Color::White);
        assert_eq!(engine.move_number(), 1);
        assert!(!engine.is_check());
    }

    #[test]
    fn test_apply() {
        let engine = Engine::new(START_FEN);
        let next = engine.apply("Pe2e4");
        assert_ne!(next.fen(), engine.fen());
        assert_eq!(next.side_to_move(), Color::Black);
        assert_eq!(next.move_number(), 1);
        assert_eq!(next.figure_at(4, 1), '.');
        assert_eq!(next.figure_at(4, 3), 'P');
        assert_eq!(
            next.fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1"
        );
        // 原引擎不受影响
        assert_eq!(engine.fen(), START_FEN);
        assert_eq!(engine.figure_at(4, 1), 'P');

        let next = next.apply("Pe7e5");
        assert_eq!(next.side_to_move(), Color::White);
        assert_eq!(next.move_number(), 2);
    }

    #[test]
    fn test_apply_rejected() {
        let engine = Engine::new(START_FEN);
        for token in ["Pe2e5", "Pe7e5", "Qd1d4", "Ke1e2", "junk", "", "Pe2e4ZZ"] {
            assert_eq!(engine.apply(token).fen(), START_FEN, "{}", token);
        }
    }

    #[test]
    fn test_try_apply_reasons() {
        let engine = Engine::new(START_FEN);
        assert_eq!(
            engine.try_apply("Pe2e5").unwrap_err(),
            MoveError::Illegal("Pe2e5".to_owned())
        );
        assert_eq!(
            engine.try_apply("e2e4").unwrap_err(),
            MoveError::Malformed("e2e4".to_owned())
        );
        let pinned = Engine::new("4r3/8/8/8/8/8/4B3/4K3 w - - 0 1");
        assert_eq!(
            pinned.try_apply("Be2d3").unwrap_err(),
            MoveError::SelfCheck("Be2d3".to_owned())
        );
    }

    #[test]
    fn test_self_check_rejected() {
        // 王走到车的控制线上
        let engine = Engine::new("3r4/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(engine.apply("Ke1d1").fen(), engine.fen());
        assert_eq!(engine.apply("Ke1d2").fen(), engine.fen());
        assert_ne!(engine.apply("Ke1f1").fen(), engine.fen());
    }

    #[test]
    fn test_check_and_escape() {
        let engine = Engine::new("k3r3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(engine.is_check());
        assert!(engine.board().with_turn(Color::White).is_check());
        let next = engine.apply("Ke1d1");
        assert_ne!(next.fen(), engine.fen());
        assert!(!next.is_check());
        // 白王已离开车的控制线
        assert!(!next.board().with_turn(Color::White).is_check());

        let blocked = Engine::new("4r3/8/8/8/4P3/8/8/4K3 w - - 0 1");
        assert!(!blocked.is_check());
    }

    #[test]
    fn test_legal_moves_start() {
        let moves = Engine::default().legal_moves();
        assert_eq!(moves.len(), 20);
        assert_eq!(moves.iter().filter(|m| m.starts_with('P')).count(), 16);
        assert_eq!(moves.iter().filter(|m| m.starts_with('N')).count(), 4);
        assert_eq!(&moves[..4], ["Nb1a3", "Nb1c3", "Ng1f3", "Ng1h3"]);
        assert_eq!(&moves[4..6], ["Pa2a3", "Pa2a4"]);
    }

    #[test]
    fn test_legal_moves_black_tokens_uppercase() {
        let moves = Engine::default().apply("Pe2e4").legal_moves();
        assert_eq!(moves.len(), 20);
        assert!(moves.contains(&"Pe7e5".to_owned()));
        assert!(moves.contains(&"Ng8f6".to_owned()));
        let after = Engine::default().apply("Pe2e4");
        for token in &moves {
            assert_ne!(after.apply(token).fen(), after.fen(), "{}", token);
        }
    }

    #[test]
    fn test_legal_moves_exclude_self_check() {
        let engine = Engine::new("4r3/8/8/8/8/8/4B3/4K3 w - - 0 1");
        let moves = engine.legal_moves();
        assert!(moves.iter().all(|m| !m.starts_with("Be2")));
        assert!(moves.contains(&"Ke1d1".to_owned()));
        assert!(!moves.contains(&"Ke1e2".to_owned()));
    }

    #[test]
    fn test_promotion() {
        let engine = Engine::new("8/4P3/8/8/8/8/8/k6K w - - 0 30");
        let next = engine.apply("Pe7e8Q");
        assert_eq!(next.figure_at(4, 7), 'Q');
        let next = engine.apply("Pe7e8");
        assert_eq!(next.figure_at(4, 7), 'P');
    }

    #[test]
    fn test_king_can_be_captured() {
        let engine = Engine::new("4k3/8/8/8/8/8/8/4RK2 w - - 0 1");
        let next = engine.apply("Re1e8");
        assert_eq!(next.figure_at(4, 7), 'R');
        assert!(next.board().king_square(Color::Black).is_none());
        // 没有黑王时不算将军
        assert!(!next.is_check());
    }

    #[test]
    fn test_rows() {
        let rows = Engine::default().rows();
        assert_eq!(rows[0], "rnbqkbnr");
        assert_eq!(rows[2], "........");
        assert_eq!(rows[7], "RNBQKBNR");
        assert_eq!(Engine::default().figure_at(9, 9), '.');
    }
}
