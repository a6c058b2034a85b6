use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info};

use rataxx_core::position::Position;
use rataxx_core::types::Move;

use crate::io::{info_string, uai_println};
use crate::state::EngineState;

/// 開始局面（または FEN）に指し手列を適用した局面を作る
///
/// 指し手は1手ずつ合法性を検査する。
pub fn create_position(startpos: bool, fen: Option<&str>, moves: &[String]) -> Result<Position> {
    let mut pos = if startpos {
        Position::startpos()
    } else {
        let fen = fen.ok_or_else(|| anyhow!("position command without startpos or fen"))?;
        Position::from_fen(fen).with_context(|| format!("invalid fen: {fen}"))?
    };

    for (ply, text) in moves.iter().enumerate() {
        let parsed = Move::from_uai(text).with_context(|| format!("invalid move at ply {ply}"))?;
        let Some(mv) = pos.resolve_move(parsed) else {
            bail!("illegal move {text} at ply {ply} in {}", pos.to_fen());
        };
        pos.do_move(mv);
    }
    Ok(pos)
}

/// `position (startpos | fen <fen>) [moves m1 m2 ...]`
pub fn parse_position(cmd: &str, state: &mut EngineState) -> Result<()> {
    let mut tokens = cmd.split_whitespace().skip(1).peekable();
    let mut startpos = false;
    let mut fen = None;
    let mut moves = Vec::new();

    while let Some(tok) = tokens.next() {
        match tok {
            "startpos" => startpos = true,
            "fen" => {
                let mut parts = Vec::new();
                while let Some(t) = tokens.next_if(|t| *t != "moves") {
                    parts.push(t);
                }
                if parts.is_empty() {
                    bail!("empty fen in position command");
                }
                fen = Some(parts.join(" "));
            }
            "moves" => moves.extend(tokens.by_ref().map(str::to_string)),
            other => bail!("unexpected token in position command: {other}"),
        }
    }

    if startpos && fen.is_some() {
        bail!("position command with both startpos and fen");
    }
    state.position = create_position(startpos, fen.as_deref(), &moves)?;
    debug!("position set: {}", state.position.to_fen());
    Ok(())
}

/// `go` コマンドの引数
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GoParams {
    pub movetime: Option<u64>,
    pub iterations: Option<u64>,
}

pub fn parse_go(cmd: &str) -> Result<GoParams> {
    let mut gp = GoParams::default();
    let mut it = cmd.split_whitespace().skip(1);
    while let Some(tok) = it.next() {
        match tok {
            "movetime" => {
                let v = it.next().ok_or_else(|| anyhow!("go movetime without a value"))?;
                gp.movetime = Some(v.parse().with_context(|| format!("invalid movetime: {v}"))?);
            }
            "iterations" => {
                let v = it.next().ok_or_else(|| anyhow!("go iterations without a value"))?;
                gp.iterations =
                    Some(v.parse().with_context(|| format!("invalid iterations: {v}"))?);
            }
            other => info!("Ignoring go argument: {other}"),
        }
    }
    Ok(gp)
}

/// 探索して `bestmove` を出力する
///
/// 終局している局面では `bestmove 0000`。
pub fn handle_go(cmd: &str, state: &mut EngineState) -> Result<()> {
    let gp = parse_go(cmd)?;

    if state.position.is_game_over() {
        info_string("game_over");
        uai_println("bestmove 0000");
        return Ok(());
    }

    let mut config = state.config.clone();
    if let Some(ms) = gp.movetime {
        config.time_budget_ms = ms;
    }
    if gp.iterations.is_some() {
        config.max_iterations = gp.iterations;
    }
    state.searcher.set_config(config);

    let result = state.searcher.search(&state.position);
    state.searcher.set_config(state.config.clone());

    info_string(result.stats.to_string());
    let best = result.best_move.unwrap_or(Move::PASS);
    uai_println(&format!("bestmove {}", best.to_uai()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_go_reads_limits() {
        let gp = parse_go("go movetime 250 iterations 1000").unwrap();
        assert_eq!(gp.movetime, Some(250));
        assert_eq!(gp.iterations, Some(1000));
        assert_eq!(parse_go("go").unwrap(), GoParams::default());
        assert!(parse_go("go movetime").is_err());
        assert!(parse_go("go iterations many").is_err());
    }

    #[test]
    fn create_position_applies_moves() {
        let moves = vec!["a6".to_string(), "a1".to_string()];
        // 黒 a7 から a6 へ clone、白 a1 はすでに埋まっているので不正
        assert!(create_position(true, None, &moves).is_err());

        let moves = vec!["a6".to_string(), "b1".to_string()];
        let pos = create_position(true, None, &moves).unwrap();
        assert_eq!(pos.half_turns(), 2);
        assert_eq!(pos.to_fen(), "x5o/x6/7/7/7/7/oo4x x 2");
    }

    #[test]
    fn create_position_accepts_adjacent_pair_as_clone() {
        let moves = vec!["a7a6".to_string()];
        let pos = create_position(true, None, &moves).unwrap();
        assert_eq!(pos.to_fen(), "x5o/x6/7/7/7/7/o5x o 1");
    }

    #[test]
    fn create_position_from_fen() {
        let pos = create_position(false, Some("7/7/7/7/7/7/o5x o 0"), &[]).unwrap();
        assert_eq!(pos.half_turns(), 0);
        assert!(create_position(false, Some("7/7/7 o 0"), &[]).is_err());
        assert!(create_position(false, None, &[]).is_err());
    }
}
