//! 指し手（Move）

use super::Square;
use std::fmt;

/// 指し手のパースエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("invalid move format: {0}")]
    InvalidFormat(String),
    #[error("invalid square in move: {0}")]
    InvalidSquare(String),
}

/// 指し手
///
/// 移動元と移動先の升インデックスの組で表す。
/// - clone: `from == to`（移動元は残り、隣接マスに駒が増える）
/// - jump: `from != to`（2マス先へ跳び、移動元は空く）
/// - pass: 番兵 `(50, 51)`
/// - none: 番兵 `(49, 50)`（生成されない。既定値/エラー値専用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: u8,
    to: u8,
}

impl Move {
    /// 無効な指し手
    pub const NONE: Move = Move { from: 49, to: 50 };

    /// パス
    pub const PASS: Move = Move { from: 50, to: 51 };

    /// clone手を生成
    #[inline]
    pub const fn clone_to(to: Square) -> Move {
        Move {
            from: to.raw(),
            to: to.raw(),
        }
    }

    /// jump手を生成
    #[inline]
    pub const fn jump(from: Square, to: Square) -> Move {
        Move {
            from: from.raw(),
            to: to.raw(),
        }
    }

    /// 升インデックスの組から生成（番兵を含む）
    #[inline]
    pub const fn from_raw(from: u8, to: u8) -> Move {
        Move { from, to }
    }

    /// 移動元インデックス
    #[inline]
    pub const fn from_raw_index(self) -> u8 {
        self.from
    }

    /// 移動先インデックス
    #[inline]
    pub const fn to_raw_index(self) -> u8 {
        self.to
    }

    /// 移動元の升（番兵では呼ばないこと）
    #[inline]
    pub const fn from(self) -> Square {
        Square::from_u8_unchecked(self.from)
    }

    /// 移動先の升（番兵では呼ばないこと）
    #[inline]
    pub const fn to(self) -> Square {
        Square::from_u8_unchecked(self.to)
    }

    #[inline]
    pub const fn is_pass(self) -> bool {
        self.from == Self::PASS.from && self.to == Self::PASS.to
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.from == Self::NONE.from && self.to == Self::NONE.to
    }

    /// 盤上の升を指す通常の指し手か
    #[inline]
    pub const fn is_normal(self) -> bool {
        (self.from as usize) < Square::NUM && (self.to as usize) < Square::NUM
    }

    #[inline]
    pub const fn is_clone(self) -> bool {
        self.is_normal() && self.from == self.to
    }

    #[inline]
    pub const fn is_jump(self) -> bool {
        self.is_normal() && self.from != self.to
    }

    /// UAI形式の文字列に変換（"b2b2", "a1c3", パスは "0000"）
    pub fn to_uai(self) -> String {
        self.to_string()
    }

    /// UAI形式の文字列から変換
    ///
    /// 4文字の "a1c3" 形式と "0000"（パス）に加え、2文字の "b2" を clone の省略形として受け付ける。
    /// 合法性は検査しない（`Position::resolve_move` を参照）。
    pub fn from_uai(s: &str) -> Result<Move, MoveParseError> {
        if s == "0000" {
            return Ok(Move::PASS);
        }
        if !s.is_ascii() {
            return Err(MoveParseError::InvalidFormat(s.to_string()));
        }
        match s.len() {
            2 => {
                let to = Square::from_uai(s)
                    .ok_or_else(|| MoveParseError::InvalidSquare(s.to_string()))?;
                Ok(Move::clone_to(to))
            }
            4 => {
                let from = Square::from_uai(&s[0..2])
                    .ok_or_else(|| MoveParseError::InvalidSquare(s[0..2].to_string()))?;
                let to = Square::from_uai(&s[2..4])
                    .ok_or_else(|| MoveParseError::InvalidSquare(s[2..4].to_string()))?;
                Ok(Move::from_raw(from.raw(), to.raw()))
            }
            _ => Err(MoveParseError::InvalidFormat(s.to_string())),
        }
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NONE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            return f.write_str("0000");
        }
        // NONEも同じ式で描画される（盤外の文字になる）
        let from = self.from;
        let to = self.to;
        write!(
            f,
            "{}{}{}{}",
            (b'a' + from % 7) as char,
            (b'1' + from / 7) as char,
            (b'a' + to % 7) as char,
            (b'1' + to / 7) as char
        )
    }
}
