//! UCB1 による子ノード選択

use super::tree::{NodeId, Tree};

/// 既定の探索定数 √2
pub const DEFAULT_EXPLORATION: f32 = std::f32::consts::SQRT_2;

/// UCB1 値
///
/// 未訪問なら +∞。それ以外は `value / visits + c * sqrt(2 * ln(parent.visits) / visits)`。
pub fn ucb1(tree: &Tree, id: NodeId, c: f32) -> f32 {
    let node = tree.get(id);
    if node.visits == 0 {
        return f32::INFINITY;
    }
    let visits = node.visits as f32;
    let exploitation = node.value / visits;
    let parent_visits = node.parent.map_or(node.visits, |p| tree.get(p).visits) as f32;
    let exploration = c * (2.0 * parent_visits.ln() / visits).sqrt();
    exploitation + exploration
}

/// UCB1 値が最大の子（同値なら先に生成された子）
///
/// 子がなければ None。
pub fn best_child(tree: &Tree, id: NodeId, c: f32) -> Option<NodeId> {
    let mut best = f32::NEG_INFINITY;
    let mut best_id = None;
    for &child in tree.get(id).children() {
        let value = ucb1(tree, child, c);
        if value > best {
            best = value;
            best_id = Some(child);
        }
    }
    best_id
}
