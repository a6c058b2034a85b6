mod io;
mod options;
mod search;
mod state;

use std::fs;
use std::io::{self as stdio, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{error, info};

use rataxx_core::search::SearchConfig;

use io::{info_string, uai_println};
use options::{handle_setoption, send_id_and_options};
use search::{handle_go, parse_position};
use state::EngineState;

#[derive(Parser, Debug)]
#[command(author, version, about = "UAI engine for 7x7 Ataxx (MCTS)")]
struct Cli {
    /// 探索設定の JSON ファイル（省略したフィールドは既定値）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 1手あたりの思考時間（ミリ秒）
    #[arg(long)]
    movetime_ms: Option<u64>,

    /// 葉ノード1回の評価で行うロールアウト回数
    #[arg(long)]
    rollouts: Option<u32>,

    /// 乱数シード
    #[arg(long)]
    seed: Option<u64>,

    /// UCB1 の探索定数
    #[arg(long)]
    exploration: Option<f32>,
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => SearchConfig::default(),
        };
        if let Some(ms) = self.movetime_ms {
            config.time_budget_ms = ms;
        }
        if let Some(n) = self.rollouts {
            config.rollouts_per_eval = n;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(c) = self.exploration {
            config.exploration = c;
        }
        Ok(config)
    }
}

/// 1行分のコマンドを処理する。`quit` なら false を返す
fn handle_command(cmd: &str, state: &mut EngineState) -> Result<bool> {
    let keyword = cmd.split_whitespace().next().unwrap_or("");
    match keyword {
        "uai" => {
            send_id_and_options(state);
            uai_println("uaiok");
        }
        "isready" => uai_println("readyok"),
        "uainewgame" => state.new_game(),
        "setoption" => handle_setoption(cmd, state)?,
        "position" => parse_position(cmd, state)?,
        "go" => handle_go(cmd, state)?,
        "quit" => return Ok(false),
        _ => bail!("unknown command: {cmd}"),
    }
    Ok(true)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.search_config()?;
    info!("search config: {config:?}");
    let mut state = EngineState::new(config);

    let stdin = stdio::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }

        match handle_command(cmd, &mut state) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                error!("{e:#}");
                info_string(format!("error={e:#}"));
                return Err(e);
            }
        }
    }

    Ok(())
}
