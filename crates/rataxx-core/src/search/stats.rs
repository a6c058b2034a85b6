//! 探索統計

use std::fmt;
use std::time::Duration;

/// 1回の探索の統計
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchStats {
    /// 選択→評価→逆伝播の反復回数
    pub iterations: u64,
    /// 木のノード数（根を含む）
    pub nodes: usize,
    /// 経過時間
    pub elapsed: Duration,
    /// 選ばれた手の訪問回数
    pub best_visits: u32,
    /// 選ばれた手の平均価値
    pub best_value: f32,
}

impl SearchStats {
    /// 1秒あたりの反復回数
    pub fn nps(&self) -> u64 {
        let ms = self.elapsed.as_millis() as u64;
        if ms == 0 {
            self.iterations * 1000
        } else {
            self.iterations * 1000 / ms
        }
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iterations={} nodes={} time_ms={} nps={} best_visits={} best_value={:.4}",
            self.iterations,
            self.nodes,
            self.elapsed.as_millis(),
            self.nps(),
            self.best_visits,
            self.best_value
        )
    }
}
