/*
 * 走法规则（不考虑走后己方是否被将军）
 *
 * can_move = can_move_from && can_move_to && can_figure_move
 * - can_move_from：起点在棋盘内，且起点上确实是当前走棋方的这枚棋子
 * - can_move_to：终点在棋盘内、不同于起点、不是己方棋子（可以吃对方的王，将军判断靠它）
 * - can_figure_move：按棋种判断走法
 *
 * 不支持王车易位与吃过路兵
 */
use crate::board::Board;
use crate::moves::Move;
use crate::piece::PieceKind;

impl Board {
    /// Whether `m` follows the movement rules in this position.
    ///
    /// Leaving the own king attacked is not checked here, see
    /// [`Board::is_check_after_move`].
    pub fn can_move(&self, m: &Move) -> bool {
        self.can_move_from(m) && self.can_move_to(m) && self.can_figure_move(m)
    }

    fn can_move_from(&self, m: &Move) -> bool {
        m.from.on_board() && m.piece.belong_to(self.turn()) && self.piece_at(m.from) == m.piece
    }

    fn can_move_to(&self, m: &Move) -> bool {
        m.to.on_board() && m.to != m.from && !self.piece_at(m.to).belong_to(self.turn())
    }

    fn can_figure_move(&self, m: &Move) -> bool {
        match m.piece.kind() {
            Some(PieceKind::King) => m.abs_delta_x() <= 1 && m.abs_delta_y() <= 1,
            Some(PieceKind::Queen) => self.can_straight_move(m),
            Some(PieceKind::Rook) => (m.sign_x() == 0 || m.sign_y() == 0) && self.can_straight_move(m),
            Some(PieceKind::Bishop) => m.sign_x() != 0 && m.sign_y() != 0 && self.can_straight_move(m),
            Some(PieceKind::Knight) => {
                (m.abs_delta_x() == 1 && m.abs_delta_y() == 2) || (m.abs_delta_x() == 2 && m.abs_delta_y() == 1)
            }
            Some(PieceKind::Pawn) => self.can_pawn_move(m),
            None => false,
        }
    }

    // 沿 (sign_x, sign_y) 一步步走，先到终点则成功，出界或被挡则失败
    fn can_straight_move(&self, m: &Move) -> bool {
        let mut at = m.from;
        loop {
            at = at.offset(m.sign_x(), m.sign_y());
            if at == m.to {
                return true;
            }
            if !at.on_board() || !self.piece_at(at).is_none() {
                return false;
            }
        }
    }

    fn can_pawn_move(&self, m: &Move) -> bool {
        // 兵不可能在第 1 行或第 8 行起步
        if m.from.y() < 1 || m.from.y() > 6 {
            return false;
        }
        let step_y = self.turn().pawn_step();
        self.can_pawn_go(m, step_y) || self.can_pawn_jump(m, step_y) || self.can_pawn_eat(m, step_y)
    }

    fn can_pawn_go(&self, m: &Move, step_y: i32) -> bool {
        self.piece_at(m.to).is_none() && m.delta_x() == 0 && m.delta_y() == step_y
    }

    fn can_pawn_jump(&self, m: &Move, step_y: i32) -> bool {
        self.piece_at(m.to).is_none()
            && m.delta_x() == 0
            && m.delta_y() == 2 * step_y
            && (m.from.y() == 1 || m.from.y() == 6)
            && self.piece_at(m.from.offset(0, step_y)).is_none()
    }

    fn can_pawn_eat(&self, m: &Move, step_y: i32) -> bool {
        !self.piece_at(m.to).is_none() && m.abs_delta_x() == 1 && m.delta_y() == step_y
    }
}
