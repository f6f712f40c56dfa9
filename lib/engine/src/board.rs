/*
 * 国际象棋局面模块（Board）
 *
 * 设计要点
 * - 棋盘 8 x 8，figures[y][x]，y = 0 为白方底线（第 1 行）
 * - 局面包含：棋子排布、走棋方、回合数，以及生成它的局面串
 * - 局面是不可变值：走子不修改原局面，而是返回新的 Board
 *
 * 局面串（六段，空白分隔）
 *   rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1
 *   0------------------------------------------ 1 2--- 3 4 5
 * - 第 0 段：棋子排布，从第 8 行写到第 1 行，数字表示连续空格
 * - 第 1 段：走棋方，"b" 为黑方，其余一律视为白方
 * - 第 2~4 段：只接受不解释，生成时固定写 "- - 0"
 * - 第 5 段：回合数，黑方走完后加一
 *
 * 解析失败的处理
 * - Board::parse 返回具体错误
 * - Board::from_fen 不报错：得到空棋盘、白方先走、回合数 0，局面串原样保留
 */
use tracing::debug;

use crate::constant::{BOARD_SIZE, FEN_FIELDS, FEN_PLACEHOLDERS, START_FEN};
use crate::error::FenError;
use crate::moves::Move;
use crate::piece::{Color, Piece, PieceKind};
use crate::square::Square;

const SIZE: usize = BOARD_SIZE as usize;

#[derive(Clone, Debug)]
pub struct Board {
    figures: [[Piece; SIZE]; SIZE],
    turn: Color,
    move_number: u32,
    fen: String,
}

impl Board {
    // 标准开局局面
    pub fn init() -> Self {
        Board::from_fen(START_FEN)
    }

    fn empty(fen: &str) -> Self {
        Board {
            figures: [[Piece::None; SIZE]; SIZE],
            turn: Color::White,
            move_number: 0,
            fen: fen.to_owned(),
        }
    }

    /// Parse a position encoding, reporting why it is unusable.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != FEN_FIELDS {
            return Err(FenError::FieldCount(parts.len()));
        }

        let mut board = Board::empty(fen);
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != SIZE {
            return Err(FenError::RankCount(ranks.len()));
        }
        for (i, rank) in ranks.iter().enumerate() {
            let y = BOARD_SIZE - 1 - i as i32;
            let mut x = 0;
            for c in rank.chars() {
                match c.to_digit(10) {
                    Some(run @ 1..=8) => x += run as i32,
                    Some(_) => return Err(FenError::UnknownPiece(c)),
                    None => {
                        let piece = Piece::from_fen_char(c).ok_or(FenError::UnknownPiece(c))?;
                        board.set_piece(Square::new(x, y), piece);
                        x += 1;
                    }
                }
            }
            if x != BOARD_SIZE {
                return Err(FenError::RankWidth {
                    rank: (y + 1) as usize,
                    width: x as usize,
                });
            }
        }

        if parts[1] == "b" {
            board.turn = Color::Black;
        }
        board.move_number = parts[5]
            .parse()
            .map_err(|_| FenError::MoveNumber(parts[5].to_owned()))?;
        Ok(board)
    }

    /// Parse a position encoding; an unusable one yields an empty board.
    pub fn from_fen(fen: &str) -> Self {
        Board::parse(fen).unwrap_or_else(|err| {
            debug!(%err, fen, "unusable position encoding, using an empty board");
            Board::empty(fen)
        })
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// The encoding this board was parsed from, or regenerated after a move.
    pub fn fen(&self) -> &str {
        &self.fen
    }

    /// Serialize the board. The placeholder fields are always `- - 0`.
    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(SIZE);
        for y in (0..BOARD_SIZE).rev() {
            let mut rank = String::new();
            let mut empty = 0;
            for x in 0..BOARD_SIZE {
                match self.piece_at(Square::new(x, y)).fen_char() {
                    Some(c) => {
                        if empty > 0 {
                            rank.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank.push(c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            ranks.push(rank);
        }
        format!(
            "{} {} {} {}",
            ranks.join("/"),
            self.turn.fen_letter(),
            FEN_PLACEHOLDERS,
            self.move_number
        )
    }

    pub fn piece_at(&self, square: Square) -> Piece {
        if square.on_board() {
            self.figures[square.y() as usize][square.x() as usize]
        } else {
            Piece::None
        }
    }

    fn set_piece(&mut self, square: Square, piece: Piece) {
        if square.on_board() {
            self.figures[square.y() as usize][square.x() as usize] = piece;
        }
    }

    /// Pieces of the side to move, in square scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(|square| (square, self.piece_at(square)))
            .filter(|(_, piece)| piece.belong_to(self.turn))
    }

    #[cfg(test)]
    pub fn count_pieces(&self) -> usize {
        Square::all().filter(|sq| !self.piece_at(*sq).is_none()).count()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|sq| {
            let piece = self.piece_at(*sq);
            piece.belong_to(color) && piece.kind() == Some(PieceKind::King)
        })
    }

    // 只改走棋方的假设局面，用于将军判断
    pub(crate) fn with_turn(&self, turn: Color) -> Board {
        Board {
            turn,
            ..self.clone()
        }
    }

    /// Build the successor board without checking legality.
    ///
    /// The source square is cleared and the moved (or promoted) piece lands on
    /// the destination. The move number grows after black moves and stops at
    /// `u32::MAX`.
    pub fn apply_unchecked(&self, m: &Move) -> Board {
        let mut next = self.clone();
        next.set_piece(m.from, Piece::None);
        next.set_piece(m.to, m.placed());
        if self.turn == Color::Black {
            next.move_number = next.move_number.saturating_add(1);
        }
        next.turn = self.turn.flip();
        next.fen = next.to_fen();
        next
    }

    /// Same grid, side to move and move number. The encoding text is ignored.
    #[cfg(test)]
    pub fn same_position(&self, other: &Board) -> bool {
        self.figures == other.figures
            && self.turn == other.turn
            && self.move_number == other.move_number
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::init()
    }
}
