/*
 * 走法意图（Move）
 *
 * - 记录：走的棋子、起点、终点、升变棋子（无升变为 Piece::None）
 * - 两种构造方式：
 *   - 从固定格式的走法串解析，如 "Pe2e4"、"Pe7e8Q"
 *   - 从（棋子、起点、终点）直接构造，用于走法生成与将军判断
 * - 走法串中的字母总是大写，颜色由当前走棋方决定
 * - Move 不引用任何局面，构造后不可变
 */
use std::fmt;

use crate::error::MoveError;
use crate::piece::{Color, Piece, PieceKind};
use crate::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub piece: Piece,     // 走的棋子
    pub from: Square,     // 起手位置
    pub to: Square,       // 落子位置
    pub promotion: Piece, // 升变棋子
}

impl Move {
    pub fn new(piece: Piece, from: Square, to: Square) -> Move {
        Move {
            piece,
            from,
            to,
            promotion: Piece::None,
        }
    }

    pub fn with_promotion(self, promotion: Piece) -> Move {
        Move { promotion, ..self }
    }

    /// Parse a move token for the side `color`.
    ///
    /// The token is `<piece><from><to>[<promotion>]`; letter case is ignored
    /// because the color always comes from the side to move.
    pub fn parse(token: &str, color: Color) -> Result<Move, MoveError> {
        let malformed = || MoveError::Malformed(token.to_owned());
        if !token.is_ascii() || !(5..=6).contains(&token.len()) {
            return Err(malformed());
        }
        let bytes = token.as_bytes();
        let kind = PieceKind::from_letter(bytes[0] as char).ok_or_else(malformed)?;
        let from = Square::parse(&token[1..3]);
        let to = Square::parse(&token[3..5]);
        if !from.on_board() || !to.on_board() {
            return Err(malformed());
        }
        let promotion = match bytes.get(5) {
            Some(&letter) => {
                let kind = PieceKind::from_letter(letter as char).ok_or_else(malformed)?;
                Piece::new(kind, color)
            }
            None => Piece::None,
        };
        Ok(Move::new(Piece::new(kind, color), from, to).with_promotion(promotion))
    }

    pub fn delta_x(&self) -> i32 {
        self.to.x() - self.from.x()
    }

    pub fn delta_y(&self) -> i32 {
        self.to.y() - self.from.y()
    }

    pub fn abs_delta_x(&self) -> i32 {
        self.delta_x().abs()
    }

    pub fn abs_delta_y(&self) -> i32 {
        self.delta_y().abs()
    }

    pub fn sign_x(&self) -> i32 {
        self.delta_x().signum()
    }

    pub fn sign_y(&self) -> i32 {
        self.delta_y().signum()
    }

    // 落到终点的棋子：有升变则为升变棋子
    pub fn placed(&self) -> Piece {
        if self.promotion.is_none() {
            self.piece
        } else {
            self.promotion
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.piece.kind().map_or('?', |kind| kind.letter());
        write!(f, "{}{}{}", letter, self.from, self.to)?;
        if let Some(kind) = self.promotion.kind() {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
