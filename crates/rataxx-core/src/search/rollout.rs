//! ロールアウトによる葉ノード評価（default policy）
//!
//! ロールアウト値は常に白から見た値（白勝ち 1.0、引き分け 0.2、黒勝ち 0.0）。
//! `mean_rollout` で手番側から見た値に直し、`default_policy` でさらに反転して
//! 逆伝播に渡す。2回の反転はどちらも省略しない。

use rand::RngCore;

use crate::movegen::generate_moves;
use crate::position::{Outcome, Position};
use crate::types::Color;

/// 白勝ちの値
pub const WHITE_WIN_VALUE: f32 = 1.0;
/// 引き分けの値
pub const DRAW_VALUE: f32 = 0.2;
/// 黒勝ちの値
pub const BLACK_WIN_VALUE: f32 = 0.0;

/// 終局結果を白から見た値に変換
#[inline]
pub fn outcome_value(outcome: Option<Outcome>) -> f32 {
    match outcome {
        Some(Outcome::Win(Color::White)) => WHITE_WIN_VALUE,
        Some(Outcome::Draw) => DRAW_VALUE,
        _ => BLACK_WIN_VALUE,
    }
}

/// 一様ランダムな合法手で終局まで指し、白から見た値を返す
///
/// 手の選択は `next_u32() % 合法手数`。
pub fn rollout<R: RngCore + ?Sized>(pos: &Position, rng: &mut R) -> f32 {
    let mut pos = *pos;
    while !pos.is_game_over() {
        let moves = generate_moves(&pos);
        let idx = (rng.next_u32() % moves.len() as u32) as usize;
        pos.do_move(moves.at(idx));
    }
    outcome_value(pos.winner())
}

/// `n` 回のロールアウトの平均を手番側から見た値で返す
///
/// 黒番なら `1 - 平均`。`n = 0` は 1 として扱う。
pub fn mean_rollout<R: RngCore + ?Sized>(pos: &Position, n: u32, rng: &mut R) -> f32 {
    let n = n.max(1);
    let mut total = 0.0f32;
    for _ in 0..n {
        total += rollout(pos, rng);
    }
    let mean = total / n as f32;
    match pos.side_to_move() {
        Color::White => mean,
        Color::Black => 1.0 - mean,
    }
}

/// 逆伝播に渡す葉ノードの値（`1 - mean_rollout`）
#[inline]
pub fn default_policy<R: RngCore + ?Sized>(pos: &Position, n: u32, rng: &mut R) -> f32 {
    1.0 - mean_rollout(pos, n, rng)
}
