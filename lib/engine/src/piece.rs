/*
 * 棋子表示
 *
 * - Piece 同时携带棋种与颜色：White(kind) / Black(kind)，空格为 Piece::None
 * - 颜色只由枚举分支决定，不单独存储
 * - 大小写（大写白、小写黑）只用于字符串格式
 */
use crate::constant::FEN_MAP;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn flip(&self) -> Color {
        if self == &Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    // 兵前进方向
    pub fn pawn_step(&self) -> i32 {
        if self == &Color::White { 1 } else { -1 }
    }

    pub fn fen_letter(&self) -> char {
        if self == &Color::White { 'w' } else { 'b' }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PieceKind {
    King,   // 王
    Queen,  // 后
    Rook,   // 车
    Bishop, // 象
    Knight, // 马
    Pawn,   // 兵
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Uppercase letter used by move tokens and white pieces in the encoding.
    pub fn letter(&self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    /// Case-insensitive inverse of [`PieceKind::letter`].
    pub fn from_letter(c: char) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.letter() == c.to_ascii_uppercase())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Piece {
    White(PieceKind),
    Black(PieceKind),
    None,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        match color {
            Color::White => Piece::White(kind),
            Color::Black => Piece::Black(kind),
        }
    }

    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Piece::White(kind) | Piece::Black(kind) => Some(*kind),
            Piece::None => None,
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Piece::White(_) => Some(Color::White),
            Piece::Black(_) => Some(Color::Black),
            Piece::None => None,
        }
    }

    pub fn belong_to(&self, color: Color) -> bool {
        Some(color) == self.color()
    }

    pub fn is_none(&self) -> bool {
        self == &Piece::None
    }

    /// Letter in the position encoding: uppercase white, lowercase black.
    pub fn fen_char(&self) -> Option<char> {
        match self {
            Piece::White(kind) => Some(kind.letter()),
            Piece::Black(kind) => Some(kind.letter().to_ascii_lowercase()),
            Piece::None => None,
        }
    }

    pub fn from_fen_char(c: char) -> Option<Piece> {
        FEN_MAP.get(&c).copied()
    }
}
