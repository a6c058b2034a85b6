//! Bitboard（49bit盤面表現）

use crate::types::Square;

/// Bitboard
///
/// bit 0-48 のみ使用。bit 49 以上は常に 0。
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// 空のBitboard
    pub const EMPTY: Bitboard = Bitboard(0);

    /// 全マスが立っているBitboard
    pub const ALL: Bitboard = Bitboard(0x1_FFFF_FFFF_FFFF);

    /// 内部値を直接指定して生成（盤外ビットはマスク）
    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits & Self::ALL.0)
    }

    /// 単一マスのBitboard
    #[inline]
    pub const fn from_square(sq: Square) -> Bitboard {
        Bitboard(1u64 << sq.index())
    }

    /// インデックス(0-48)から単一マスのBitboard
    #[inline]
    pub const fn from_index(idx: u8) -> Bitboard {
        debug_assert!((idx as usize) < Square::NUM);
        Bitboard(1u64 << idx)
    }

    /// 内部値を取得
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// 空かどうか
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 空でないかどうか
    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// ビットが立っている数
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// 補集合（盤内のみ）
    #[inline]
    pub const fn complement(self) -> Bitboard {
        Bitboard(!self.0 & Self::ALL.0)
    }

    /// 最下位ビットのSquareを取得して消す
    #[inline]
    pub fn pop(&mut self) -> Square {
        debug_assert!(!self.is_empty(), "pop() called on empty Bitboard");
        let idx = self.0.trailing_zeros();
        self.0 &= self.0.wrapping_sub(1);
        Square::from_u8_unchecked(idx as u8)
    }

    /// 最下位ビットのSquareを取得（消さない）
    ///
    /// 空の場合はNoneを返す。
    #[inline]
    pub fn lsb(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(Square::from_u8_unchecked(self.0.trailing_zeros() as u8))
        }
    }

    /// 指定マスにビットが立っているか
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 >> sq.index()) & 1 != 0
    }

    /// ビットを立てる
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    /// ビットを消す
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.index());
    }

    /// ビットをXOR（トグル）
    #[inline]
    pub fn toggle(&mut self, sq: Square) {
        self.0 ^= 1u64 << sq.index();
    }

    /// イテレータを返す（インデックス昇順）
    #[inline]
    pub const fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

// ビット演算
impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl std::ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        // 未使用ビットはマスク
        self.complement()
    }
}

impl std::fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bitboard {{")?;
        // 7段目から1段目、a筋からg筋
        for rank in (0..7).rev() {
            write!(f, "  ")?;
            for file in 0..7 {
                let bit = (self.0 >> (file + 7 * rank)) & 1;
                write!(f, "{}", if bit == 1 { '●' } else { '・' })?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// Bitboardイテレータ
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.pop())
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitboardIter {}
