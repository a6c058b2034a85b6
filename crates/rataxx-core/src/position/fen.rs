//! FEN 形式の入出力
//!
//! `<7段目>/<6段目>/.../<1段目> <手番> [手数]`
//! - `x`: 黒、`o`: 白、`-`: ブロック、数字: 連続する空きマス
//! - 手番は `x` / `o`
//! - 手数は省略時 0。以降のトークンは無視する

use super::Position;
use crate::bitboard::{Bitboard, square_bb};
use crate::types::Color;

/// FEN のパースエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("invalid character in FEN: {0}")]
    InvalidChar(char),
    #[error("rank {rank} describes more than 7 cells")]
    RowOverflow { rank: u8 },
    #[error("rank {rank} describes fewer than 7 cells")]
    RowUnderflow { rank: u8 },
    #[error("invalid rank count: {0} (expected 7)")]
    RowCount(usize),
    #[error("missing side to move in FEN")]
    MissingTurn,
    #[error("invalid turn in FEN: {0}")]
    InvalidTurn(String),
    #[error("invalid half-turn count in FEN: {0}")]
    InvalidHalfTurns(String),
}

const WIDTH: u8 = 7;

impl Position {
    /// FEN 文字列から局面を生成
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let fen = fen.trim();
        let (board, rest) = fen.split_once(' ').ok_or(FenError::MissingTurn)?;

        let mut white = Bitboard::EMPTY;
        let mut black = Bitboard::EMPTY;
        let mut blocked = Bitboard::EMPTY;

        let rows: Vec<&str> = board.split('/').collect();
        if rows.len() > WIDTH as usize {
            return Err(FenError::RowCount(rows.len()));
        }
        for (i, row) in rows.iter().enumerate() {
            let rank = WIDTH - 1 - i as u8;
            let mut file: u8 = 0;
            for c in row.chars() {
                let target = match c {
                    'x' => Some(&mut black),
                    'o' => Some(&mut white),
                    '-' => Some(&mut blocked),
                    '0'..='9' => None,
                    _ => return Err(FenError::InvalidChar(c)),
                };
                match target {
                    Some(bb) => {
                        if file >= WIDTH {
                            return Err(FenError::RowOverflow { rank: rank + 1 });
                        }
                        *bb |= square_bb(file, rank);
                        file += 1;
                    }
                    None => {
                        file += c as u8 - b'0';
                        if file > WIDTH {
                            return Err(FenError::RowOverflow { rank: rank + 1 });
                        }
                    }
                }
            }
            if file < WIDTH {
                return Err(FenError::RowUnderflow { rank: rank + 1 });
            }
        }
        if rows.len() != WIDTH as usize {
            return Err(FenError::RowCount(rows.len()));
        }

        let mut tokens = rest.split_whitespace();
        let turn = tokens.next().ok_or(FenError::MissingTurn)?;
        let side_to_move = match turn {
            "x" => Color::Black,
            "o" => Color::White,
            _ => return Err(FenError::InvalidTurn(turn.to_string())),
        };

        let half_turns = match tokens.next() {
            Some(tok) => tok
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfTurns(tok.to_string()))?,
            None => 0,
        };

        Ok(Position::new(white, black, blocked, side_to_move, half_turns))
    }

    /// FEN 文字列に変換
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(64);
        for rank in (0..WIDTH).rev() {
            let mut run = 0;
            for file in 0..WIDTH {
                let sq = square_bb(file, rank);
                let c = if (self.black & sq).is_not_empty() {
                    'x'
                } else if (self.white & sq).is_not_empty() {
                    'o'
                } else if (self.blocked & sq).is_not_empty() {
                    '-'
                } else {
                    run += 1;
                    continue;
                };
                if run > 0 {
                    out.push_str(&run.to_string());
                    run = 0;
                }
                out.push(c);
            }
            if run > 0 {
                out.push_str(&run.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out.push(' ');
        out.push(self.side_to_move.to_fen_char());
        out.push(' ');
        out.push_str(&self.half_turns.to_string());
        out
    }
}
