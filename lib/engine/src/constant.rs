use crate::piece::{Piece, PieceKind};
use std::{collections::HashMap, sync::LazyLock};

pub const BOARD_SIZE: i32 = 8;
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
// 空格在 figure_at 中的显示字符
pub const EMPTY_FIGURE: char = '.';
// 生成局面串时第 3~5 段固定写出的内容
pub const FEN_PLACEHOLDERS: &str = "- - 0";
pub const FEN_FIELDS: usize = 6;

pub static FEN_MAP: LazyLock<HashMap<char, Piece>> = LazyLock::new(|| {
    HashMap::from([
        ('k', Piece::Black(PieceKind::King)),
        ('q', Piece::Black(PieceKind::Queen)),
        ('r', Piece::Black(PieceKind::Rook)),
        ('b', Piece::Black(PieceKind::Bishop)),
        ('n', Piece::Black(PieceKind::Knight)),
        ('p', Piece::Black(PieceKind::Pawn)),
        ('K', Piece::White(PieceKind::King)),
        ('Q', Piece::White(PieceKind::Queen)),
        ('R', Piece::White(PieceKind::Rook)),
        ('B', Piece::White(PieceKind::Bishop)),
        ('N', Piece::White(PieceKind::Knight)),
        ('P', Piece::White(PieceKind::Pawn)),
    ])
});
