//! 探索ドライバ
//!
//! 選択（UCB1）→ 展開（1ノード）→ ロールアウト評価 → 逆伝播 を持ち時間まで繰り返し、
//! 根の子のうち平均価値が最大の手を返す。

use std::time::Instant;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::movegen::generate_moves;
use crate::position::Position;
use crate::types::Move;

use super::config::SearchConfig;
use super::rollout::default_policy;
use super::stats::SearchStats;
use super::tree::{NodeId, Tree};
use super::ucb::best_child;

/// 探索結果
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchResult {
    /// 最善手（終局局面では None）
    pub best_move: Option<Move>,
    pub stats: SearchStats,
}

impl SearchResult {
    fn immediate(best_move: Option<Move>, start: Instant) -> Self {
        Self {
            best_move,
            stats: SearchStats {
                elapsed: start.elapsed(),
                ..Default::default()
            },
        }
    }
}

/// 根から葉まで降り、展開できるノードがあれば1つ展開してその番号を返す
///
/// 終局ノードに達した場合はそのノードを返す。
pub fn tree_policy(tree: &mut Tree, c: f32) -> NodeId {
    let mut id = Tree::ROOT;
    loop {
        let node = tree.get(id);
        if node.is_terminal() {
            return id;
        }
        if node.is_expandable() {
            return tree.expand(id);
        }
        match best_child(tree, id, c) {
            Some(next) => id = next,
            None => return id,
        }
    }
}

/// 葉から根までの各ノードに訪問と価値を加える
///
/// 1段上がるごとに手番が入れ替わるので、価値は `v -> 1 - v` と反転させる。
pub fn backpropagate(tree: &mut Tree, leaf: NodeId, v: f32) {
    let mut v = v;
    let mut current = Some(leaf);
    while let Some(id) = current {
        let node = tree.get_mut(id);
        node.visits += 1;
        node.value += v;
        v = 1.0 - v;
        current = node.parent;
    }
}

/// 平均価値が最大の根の子（同値なら先に生成された子）
fn best_root_child(tree: &Tree) -> Option<NodeId> {
    let mut best = f32::NEG_INFINITY;
    let mut best_id = None;
    for &child in tree.root().children() {
        let Some(mean) = tree.get(child).mean_value() else {
            continue;
        };
        if mean > best {
            best = mean;
            best_id = Some(child);
        }
    }
    best_id
}

/// 根の子のうち平均価値が最大の手
///
/// 子がなければ None。
pub fn best_move(tree: &Tree) -> Option<Move> {
    best_root_child(tree).map(|id| tree.get(id).mv())
}

/// モンテカルロ木探索器
///
/// 乱数生成器を所有し、探索をまたいで状態を引き継ぐ。
/// 同じシード・同じ反復上限なら同じ手を返す。
pub struct Searcher {
    config: SearchConfig,
    rng: Xoshiro256PlusPlus,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        let rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
        Self { config, rng }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 設定を差し替える（乱数の状態はそのまま）
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// 乱数生成器を指定シードで初期化し直す
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    }

    /// `pos` の手番側の最善手を探索する
    pub fn search(&mut self, pos: &Position) -> SearchResult {
        let start = Instant::now();
        let moves = generate_moves(pos);
        match moves.len() {
            0 => {
                warn!("search called on a finished game: {}", pos.to_fen());
                return SearchResult::immediate(None, start);
            }
            1 => {
                let mv = moves.at(0);
                debug!("only one legal move: {mv}");
                return SearchResult::immediate(Some(mv), start);
            }
            _ => {}
        }

        let budget = self.config.time_budget();
        let rollouts = self.config.rollouts();
        let c = self.config.exploration;
        let max_iterations = self.config.max_iterations;

        let mut tree = Tree::new(*pos);
        let mut iterations: u64 = 0;
        loop {
            let leaf = tree_policy(&mut tree, c);
            let v = default_policy(tree.get(leaf).pos(), rollouts, &mut self.rng);
            backpropagate(&mut tree, leaf, v);
            iterations += 1;

            if start.elapsed() >= budget {
                break;
            }
            if max_iterations.is_some_and(|max| iterations >= max) {
                break;
            }
        }

        let best = best_root_child(&tree);
        let mut stats = SearchStats {
            iterations,
            nodes: tree.len(),
            elapsed: start.elapsed(),
            ..Default::default()
        };
        if let Some(id) = best {
            let node = tree.get(id);
            stats.best_visits = node.visits();
            stats.best_value = node.mean_value().unwrap_or_default();
        }

        let best_move = best.map(|id| tree.get(id).mv());
        info!(
            "search done: bestmove={} {stats}",
            best_move.map_or_else(|| "none".to_string(), |m| m.to_uai())
        );
        for &child in tree.root().children() {
            let node = tree.get(child);
            debug!(
                "  {} visits={} mean={:.4}",
                node.mv(),
                node.visits(),
                node.mean_value().unwrap_or_default()
            );
        }

        SearchResult { best_move, stats }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
