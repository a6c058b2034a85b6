//! 合法手生成モジュール
//!
//! - `generate_moves`: 合法手を生成順序の契約どおりに列挙する
//! - `MoveList`: 固定長の指し手バッファ
//!
//! 生成順序: clone 手を移動先インデックス昇順、続いて jump 手を移動元インデックス昇順
//! （同じ移動元の中では移動先インデックス昇順）。探索木の展開カーソルはこの順序に依存する。

mod movelist;

pub use movelist::{MAX_MOVES, MoveList};

use crate::bitboard::{doubles_from, singles};
use crate::position::Position;
use crate::types::Move;

/// 合法手を生成
///
/// パスしかない局面では `[PASS]` を返す。
/// 終局していて空きマスに届く駒がない局面では空になる。
pub fn generate_moves(pos: &Position) -> MoveList {
    let mut moves = MoveList::new();
    if pos.must_pass() {
        moves.push(Move::PASS);
        return moves;
    }

    let own = pos.colored(pos.side_to_move());
    let empty = pos.empty();

    for to in (singles(own) & empty).iter() {
        moves.push(Move::clone_to(to));
    }

    for from in own.iter() {
        for to in (doubles_from(from) & empty).iter() {
            moves.push(Move::jump(from, to));
        }
    }

    moves
}
