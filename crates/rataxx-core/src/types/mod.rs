//! 基本型モジュール
//!
//! - `Color`: 手番（白 `o` / 黒 `x`）
//! - `Square`: 升目（0-48）
//! - `Move`: 指し手（clone / jump / pass）

mod color;
mod moves;
mod square;

pub use color::Color;
pub use moves::{Move, MoveParseError};
pub use square::Square;
