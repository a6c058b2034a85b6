//! 升目（Square）

use std::fmt;

/// 升目（0-48）
///
/// 配置: `file + 7 * rank`
/// a1=0, b1=1, ..., g1=6, a2=7, ..., g7=48
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 49;

    /// 筋・段の数
    pub const WIDTH: u8 = 7;

    /// a1
    pub const A1: Square = Square(0);
    /// d4（中央）
    pub const D4: Square = Square(24);
    /// g7
    pub const G7: Square = Square(48);

    /// 筋(0-6)と段(0-6)から生成
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Square {
        debug_assert!(file < Self::WIDTH && rank < Self::WIDTH);
        Square(file + Self::WIDTH * rank)
    }

    /// 筋（0 = a）
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % Self::WIDTH
    }

    /// 段（0 = 1）
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / Self::WIDTH
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if n < Self::NUM as u8 { Some(Square(n)) } else { None }
    }

    /// u8から生成（範囲チェックなし）
    ///
    /// 呼び出し側で n < 49 を保証すること。
    #[inline]
    pub(crate) const fn from_u8_unchecked(n: u8) -> Square {
        debug_assert!(n < Self::NUM as u8);
        Square(n)
    }

    /// UAI形式の文字列（"b2"等）からSquareに変換
    pub fn from_uai(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let file = match file {
            'a'..='g' => file as u8 - b'a',
            _ => return None,
        };
        let rank = match rank {
            '1'..='7' => rank as u8 - b'1',
            _ => return None,
        };
        Some(Square::new(file, rank))
    }

    /// 全ての升を返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, (b'1' + self.rank()) as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_new() {
        assert_eq!(Square::new(0, 0), Square::A1);
        assert_eq!(Square::new(3, 3), Square::D4);
        assert_eq!(Square::new(6, 6), Square::G7);
    }

    #[test]
    fn test_square_file_rank() {
        let sq = Square::new(2, 5);
        assert_eq!(sq.file(), 2);
        assert_eq!(sq.rank(), 5);
        assert_eq!(sq.index(), 37);
    }

    #[test]
    fn test_square_from_u8() {
        assert_eq!(Square::from_u8(0), Some(Square::A1));
        assert_eq!(Square::from_u8(48), Some(Square::G7));
        assert_eq!(Square::from_u8(49), None);
    }

    #[test]
    fn test_square_uai() {
        assert_eq!(Square::new(1, 1).to_string(), "b2");
        assert_eq!(Square::G7.to_string(), "g7");
        assert_eq!(Square::from_uai("a1"), Some(Square::A1));
        assert_eq!(Square::from_uai("g7"), Some(Square::G7));
        assert_eq!(Square::from_uai("h1"), None);
        assert_eq!(Square::from_uai("a8"), None);
        assert_eq!(Square::from_uai("a"), None);
        assert_eq!(Square::from_uai("a1b"), None);
    }

    #[test]
    fn test_square_all() {
        let all: Vec<_> = Square::all().collect();
        assert_eq!(all.len(), 49);
        assert_eq!(all[0], Square::A1);
        assert_eq!(all[48], Square::G7);
    }
}
