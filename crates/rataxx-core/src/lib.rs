//! # rataxx-core
//!
//! 7×7 Ataxx エンジンのコアライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, Move）
//! - `bitboard`: 49bit ビットボード演算
//! - `position`: 局面表現と do_move、FEN 入出力
//! - `movegen`: 合法手生成
//! - `search`: モンテカルロ木探索（UCB1 + ランダムロールアウト）
//!

pub mod types;

pub mod bitboard;
pub mod position;

pub mod movegen;

pub mod search;
