use anyhow::{Context, Result, bail};
use log::info;

use crate::io::{info_string, uai_println};
use crate::state::EngineState;

pub fn send_id_and_options(state: &EngineState) {
    let config = &state.config;
    uai_println("id name rataxx");
    uai_println("id author rataxx developers");
    uai_println(&format!(
        "option name MoveTime type spin default {} min 1 max 3600000",
        config.time_budget_ms
    ));
    uai_println(&format!(
        "option name Rollouts type spin default {} min 1 max 1000",
        config.rollouts_per_eval
    ));
    uai_println(&format!("option name Seed type string default {}", config.seed));
    uai_println(&format!("option name Exploration type string default {}", config.exploration));
}

/// `setoption name <Name> value <v>` を解釈して設定に反映する
///
/// 未知のオプションは無視する。値が読めない場合はエラー。
pub fn handle_setoption(cmd: &str, state: &mut EngineState) -> Result<()> {
    let body = cmd.strip_prefix("setoption").unwrap_or("").trim();
    let Some(after_name) = body.strip_prefix("name") else {
        bail!("malformed setoption: {cmd}");
    };
    let after_name = after_name.trim_start();
    let (name, value) = match after_name.find(" value ") {
        Some(value_pos) => (
            after_name[..value_pos].trim(),
            Some(after_name[value_pos + 7..].trim()),
        ),
        None => (after_name.trim(), None),
    };
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        bail!("setoption {name} without a value");
    };

    match name {
        "MoveTime" => {
            let ms: u64 = value
                .parse()
                .with_context(|| format!("invalid MoveTime value: {value}"))?;
            state.config.time_budget_ms = ms;
        }
        "Rollouts" => {
            let n: u32 = value
                .parse()
                .with_context(|| format!("invalid Rollouts value: {value}"))?;
            state.config.rollouts_per_eval = n;
        }
        "Seed" => {
            let seed: u64 = value.parse().with_context(|| format!("invalid Seed value: {value}"))?;
            state.config.seed = seed;
            state.searcher.reseed(seed);
        }
        "Exploration" => {
            let c: f32 = value
                .parse()
                .with_context(|| format!("invalid Exploration value: {value}"))?;
            if !c.is_finite() || c < 0.0 {
                bail!("Exploration must be a non-negative number: {value}");
            }
            state.config.exploration = c;
        }
        _ => {
            info!("Ignoring unknown option: {name}");
            info_string(format!("unknown_option name={name}"));
            return Ok(());
        }
    }

    info!("option {name} = {value}");
    state.searcher.set_config(state.config.clone());
    Ok(())
}
