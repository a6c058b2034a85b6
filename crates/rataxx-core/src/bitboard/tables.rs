//! 筋・段マスクと到達範囲の計算
//!
//! シフト量の対応（`file + 7 * rank` 配置）:
//! - 上下: ±7、左右: ±1、斜め: ±6, ±8
//! - 2マス先: ±14, ±13, ±15, ±2, ±16, ±12, ±9, ±5
//!
//! 左右方向へのシフトは反対側の筋に回り込むため、移動先の筋マスクで落とす。

use super::Bitboard;
use crate::types::Square;

pub const FILE_A: Bitboard = Bitboard::new(0x0408_1020_4081);
pub const FILE_B: Bitboard = Bitboard::new(0x0810_2040_8102);
pub const FILE_C: Bitboard = Bitboard::new(0x1020_4081_0204);
pub const FILE_D: Bitboard = Bitboard::new(0x2040_8102_0408);
pub const FILE_E: Bitboard = Bitboard::new(0x4081_0204_0810);
pub const FILE_F: Bitboard = Bitboard::new(0x8102_0408_1020);
pub const FILE_G: Bitboard = Bitboard::new(0x1_0204_0810_2040);

pub const RANK_1: Bitboard = Bitboard::new(0x7F);
pub const RANK_2: Bitboard = Bitboard::new(0x3F80);
pub const RANK_3: Bitboard = Bitboard::new(0x1F_C000);
pub const RANK_4: Bitboard = Bitboard::new(0xFE0_0000);
pub const RANK_5: Bitboard = Bitboard::new(0x7_F000_0000);
pub const RANK_6: Bitboard = Bitboard::new(0x3F8_0000_0000);
pub const RANK_7: Bitboard = Bitboard::new(0x1_FC00_0000_0000);

/// 筋マスク（a-g）
pub const FILE_BB: [Bitboard; 7] = [FILE_A, FILE_B, FILE_C, FILE_D, FILE_E, FILE_F, FILE_G];

/// 段マスク（1-7）
pub const RANK_BB: [Bitboard; 7] = [RANK_1, RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7];

const NOT_FILE_A: u64 = !FILE_A.bits();
const NOT_FILE_G: u64 = !FILE_G.bits();
const NOT_FILE_AB: u64 = !(FILE_A.bits() | FILE_B.bits());
const NOT_FILE_FG: u64 = !(FILE_F.bits() | FILE_G.bits());

/// 筋(0-6)と段(0-6)の交点
#[inline]
pub const fn square_bb(file: u8, rank: u8) -> Bitboard {
    Bitboard::new(FILE_BB[file as usize].bits() & RANK_BB[rank as usize].bits())
}

/// 1マス先（clone で届くマス）の和集合
#[inline]
pub const fn singles(b: Bitboard) -> Bitboard {
    let b = b.bits();
    let vertical = (b << 7) | (b >> 7);
    // 右、右上、右下
    let right = ((b << 1) | (b << 8) | (b >> 6)) & NOT_FILE_A;
    // 左、左上、左下
    let left = ((b >> 1) | (b << 6) | (b >> 8)) & NOT_FILE_G;
    Bitboard::new(vertical | right | left)
}

/// 2マス先（jump で届くマス）の和集合
#[inline]
pub const fn doubles(b: Bitboard) -> Bitboard {
    let b = b.bits();
    // 上上、下下
    let vertical = (b << 14) | (b >> 14);
    // 右上上、右下下
    let right1 = ((b << 15) | (b >> 13)) & NOT_FILE_A;
    // 左上上、左下下
    let left1 = ((b << 13) | (b >> 15)) & NOT_FILE_G;
    // 右右、右右上上、右右下下、右右上、右右下
    let right2 = ((b << 2) | (b << 16) | (b >> 12) | (b << 9) | (b >> 5)) & NOT_FILE_AB;
    // 左左、左左上上、左左下下、左左上、左左下
    let left2 = ((b >> 2) | (b << 12) | (b >> 16) | (b << 5) | (b >> 9)) & NOT_FILE_FG;
    Bitboard::new(vertical | right1 | left1 | right2 | left2)
}

/// clone または jump で届くマス
#[inline]
pub const fn reach(b: Bitboard) -> Bitboard {
    Bitboard::new(singles(b).bits() | doubles(b).bits())
}

/// 単一マスからの1マス先
#[inline]
pub const fn singles_from(sq: Square) -> Bitboard {
    singles(Bitboard::from_square(sq))
}

/// 単一マスからの2マス先
#[inline]
pub const fn doubles_from(sq: Square) -> Bitboard {
    doubles(Bitboard::from_square(sq))
}
