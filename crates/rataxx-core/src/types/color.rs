//! 手番（Color）

/// 手番（白/黒）
///
/// FEN では白が `o`、黒が `x`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// FEN の手番文字
    #[inline]
    pub const fn to_fen_char(self) -> char {
        match self {
            Color::White => 'o',
            Color::Black => 'x',
        }
    }

    /// FEN の手番文字から変換
    #[inline]
    pub const fn from_fen_char(c: char) -> Option<Color> {
        match c {
            'o' => Some(Color::White),
            'x' => Some(Color::Black),
            _ => None,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}
