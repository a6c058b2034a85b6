//! ビットボードモジュール
//!
//! 49マスの盤面を64bitの下位49bitで表現し、ビット演算と到達範囲の計算を提供する。
//!
//! - `Bitboard`: 49bit盤面表現（`file + 7 * rank`）
//! - 筋・段ごとのマスク（`FILE_BB`, `RANK_BB`）
//! - 1マス先（clone）・2マス先（jump）の到達範囲

mod core;
mod tables;

pub use core::Bitboard;
pub use core::BitboardIter;
pub use tables::*;
