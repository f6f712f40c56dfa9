/*
 * 棋盘坐标
 *
 * - x 为列（a..h → 0..7），y 为行（1..8 → 0..7）
 * - Square::NONE 表示棋盘外或解析失败，与任何合法坐标都不相等
 * - 构造时越界一律折叠为 NONE，因此坐标要么完全合法，要么就是 NONE
 */
use std::fmt;

use crate::constant::BOARD_SIZE;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Square {
    x: i32,
    y: i32,
}

impl Square {
    pub const NONE: Square = Square { x: -1, y: -1 };

    pub fn new(x: i32, y: i32) -> Self {
        if (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y) {
            Square { x, y }
        } else {
            Square::NONE
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn on_board(&self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Parse a square name such as `e2`. Anything else gives [`Square::NONE`].
    pub fn parse(name: &str) -> Self {
        match name.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Square::new((file - b'a') as i32, (rank - b'1') as i32)
            }
            _ => Square::NONE,
        }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        if !self.on_board() {
            return Square::NONE;
        }
        Square::new(self.x + dx, self.y + dy)
    }

    /// All squares, a1..h1 then a2..h2 and so on.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Square { x, y }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.on_board() {
            return write!(f, "--");
        }
        write!(f, "{}{}", (b'a' + self.x as u8) as char, self.y + 1)
    }
}
