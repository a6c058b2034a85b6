//! 探索モジュール
//!
//! UCB1 選択とランダムロールアウト評価によるモンテカルロ木探索。
//!
//! - `SearchConfig`: 持ち時間、ロールアウト回数、探索定数、乱数シード
//! - `Tree` / `Node`: インデックス参照のノードアリーナ
//! - `ucb1` / `best_child`: 選択方策
//! - `rollout` / `default_policy`: ロールアウト評価
//! - `Searcher`: 選択→展開→シミュレーション→逆伝播を時間切れまで繰り返す

mod config;
mod mcts;
mod rollout;
mod stats;
mod tree;
mod ucb;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_ROLLOUTS, DEFAULT_SEED, DEFAULT_TIME_BUDGET_MS, SearchConfig};
pub use mcts::{SearchResult, Searcher, backpropagate, best_move, tree_policy};
pub use rollout::{
    BLACK_WIN_VALUE, DRAW_VALUE, WHITE_WIN_VALUE, default_policy, mean_rollout, outcome_value,
    rollout,
};
pub use stats::SearchStats;
pub use tree::{Node, NodeId, Tree};
pub use ucb::{DEFAULT_EXPLORATION, best_child, ucb1};
