use rataxx_core::position::Position;
use rataxx_core::search::{SearchConfig, Searcher};

/// エンジンの状態
///
/// `config` は `setoption` で変更される永続的な設定。`go` の引数による上書きは
/// その探索だけに適用する。
pub struct EngineState {
    pub config: SearchConfig,
    pub searcher: Searcher,
    pub position: Position,
}

impl EngineState {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config.clone()),
            config,
            position: Position::startpos(),
        }
    }

    /// 新しい対局に備えて局面と乱数を初期化する
    pub fn new_game(&mut self) {
        self.position = Position::startpos();
        self.searcher.reseed(self.config.seed);
    }
}
