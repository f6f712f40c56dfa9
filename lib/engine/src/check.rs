/*
 * 将军判断
 *
 * - is_check：把走棋方换成对方，看对方下一步能否吃掉我方的王
 * - can_eat_king：走棋方的任一棋子能否按走法规则走到对方王的位置
 *   对方的王不在棋盘上时视为没有可吃的目标，返回 false
 * - is_check_after_move：不校验走法直接走一步，再看走子方的王能否被吃
 */
use crate::board::Board;
use crate::moves::Move;

impl Board {
    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.with_turn(self.turn().flip()).can_eat_king()
    }

    /// Whether some piece of the side to move could capture the other king.
    pub fn can_eat_king(&self) -> bool {
        let Some(king) = self.king_square(self.turn().flip()) else {
            return false;
        };
        self.pieces()
            .any(|(square, piece)| self.can_move(&Move::new(piece, square, king)))
    }

    /// Whether playing `m` would leave the mover's own king capturable.
    pub fn is_check_after_move(&self, m: &Move) -> bool {
        self.apply_unchecked(m).can_eat_king()
    }
}
