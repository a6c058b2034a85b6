//! 探索の結合テスト
