//! 探索設定

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ucb::DEFAULT_EXPLORATION;

/// 1手あたりの既定の思考時間（ミリ秒）
pub const DEFAULT_TIME_BUDGET_MS: u64 = 5_000;

/// 1回の評価で行う既定のロールアウト回数
pub const DEFAULT_ROLLOUTS: u32 = 10;

/// 既定の乱数シード
pub const DEFAULT_SEED: u64 = 0;

/// 探索設定
///
/// JSON で読み書きできる。省略したフィールドは既定値になる。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 思考時間（ミリ秒）。1反復の途中では打ち切らない
    pub time_budget_ms: u64,
    /// 葉ノード1回の評価で行うロールアウト回数（0 は 1 として扱う）
    pub rollouts_per_eval: u32,
    /// UCB1 の探索定数
    pub exploration: f32,
    /// 反復回数の上限（None なら時間のみ）
    pub max_iterations: Option<u64>,
    /// ロールアウト用乱数のシード
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: DEFAULT_TIME_BUDGET_MS,
            rollouts_per_eval: DEFAULT_ROLLOUTS,
            exploration: DEFAULT_EXPLORATION,
            max_iterations: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl SearchConfig {
    #[inline]
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }

    #[inline]
    pub fn rollouts(&self) -> u32 {
        self.rollouts_per_eval.max(1)
    }

    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = ms;
        self
    }

    pub fn with_rollouts(mut self, rollouts: u32) -> Self {
        self.rollouts_per_eval = rollouts;
        self
    }

    pub fn with_exploration(mut self, c: f32) -> Self {
        self.exploration = c;
        self
    }

    pub fn with_max_iterations(mut self, max: Option<u64>) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.time_budget(), Duration::from_secs(5));
        assert_eq!(config.rollouts(), 10);
        assert!((config.exploration - 2f32.sqrt()).abs() < 1e-6);
        assert_eq!(config.max_iterations, None);
    }

    #[test]
    fn test_zero_rollouts_clamped() {
        assert_eq!(SearchConfig::default().with_rollouts(0).rollouts(), 1);
    }

    #[test]
    fn test_json_partial_fields_use_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"time_budget_ms": 250, "seed": 7}"#).unwrap();
        assert_eq!(config.time_budget_ms, 250);
        assert_eq!(config.seed, 7);
        assert_eq!(config.rollouts_per_eval, DEFAULT_ROLLOUTS);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SearchConfig::default()
            .with_time_budget_ms(100)
            .with_max_iterations(Some(42))
            .with_exploration(0.5);
        let text = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
