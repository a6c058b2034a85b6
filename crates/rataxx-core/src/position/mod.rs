//! 局面モジュール
//!
//! 白・黒・ブロックの3枚のBitboardと手番、手数カウンタで局面を表す。
//! 局面は `Copy` な値型で、探索木の各ノードがそれぞれスナップショットを所有する。
//!
//! - `Position`: 局面
//! - `Outcome`: 終局結果
//! - `FenError`: FEN のパースエラー

mod fen;

pub use fen::FenError;

use crate::bitboard::{Bitboard, reach, singles};
use crate::movegen::generate_moves;
use crate::types::{Color, Move, Square};
use std::fmt;

/// 引き分けとなる手数（パスを含む）
pub const MAX_HALF_TURNS: u32 = 100;

/// 終局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Color),
    Draw,
}

/// 局面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    white: Bitboard,
    black: Bitboard,
    blocked: Bitboard,
    side_to_move: Color,
    half_turns: u32,
}

impl Position {
    /// 各Bitboardから局面を生成
    ///
    /// 3枚のBitboardは互いに素であること。
    pub fn new(
        white: Bitboard,
        black: Bitboard,
        blocked: Bitboard,
        side_to_move: Color,
        half_turns: u32,
    ) -> Position {
        debug_assert!((white & black).is_empty());
        debug_assert!((white & blocked).is_empty());
        debug_assert!((black & blocked).is_empty());
        Position {
            white,
            black,
            blocked,
            side_to_move,
            half_turns,
        }
    }

    /// 平手初期局面（`x5o/7/7/7/7/7/o5x x 0`）
    pub fn startpos() -> Position {
        let corner = |file, rank| Bitboard::from_square(Square::new(file, rank));
        Position::new(
            corner(6, 6) | corner(0, 0),
            corner(0, 6) | corner(6, 0),
            Bitboard::EMPTY,
            Color::Black,
            0,
        )
    }

    #[inline]
    pub const fn white(&self) -> Bitboard {
        self.white
    }

    #[inline]
    pub const fn black(&self) -> Bitboard {
        self.black
    }

    #[inline]
    pub const fn blocked(&self) -> Bitboard {
        self.blocked
    }

    #[inline]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub const fn half_turns(&self) -> u32 {
        self.half_turns
    }

    /// 空きマス
    #[inline]
    pub fn empty(&self) -> Bitboard {
        (self.white | self.black | self.blocked).complement()
    }

    /// 指定手番の駒
    #[inline]
    pub const fn colored(&self, c: Color) -> Bitboard {
        match c {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// 両手番の駒
    #[inline]
    pub fn both_sides(&self) -> Bitboard {
        self.white | self.black
    }

    /// 指定手番の駒数
    #[inline]
    pub fn piece_count(&self, c: Color) -> u32 {
        self.colored(c).count()
    }

    /// 終局判定
    ///
    /// どちらかの駒が全滅、手数上限、または両者とも空きマスに届かない場合に終局。
    pub fn is_game_over(&self) -> bool {
        let white_dead = self.white.is_empty();
        let black_dead = self.black.is_empty();
        let too_many_half_turns = self.half_turns >= MAX_HALF_TURNS;
        let no_moves = (reach(self.both_sides()) & self.empty()).is_empty();
        white_dead || black_dead || too_many_half_turns || no_moves
    }

    /// 手番側がパスしかできないか（終局時は false）
    pub fn must_pass(&self) -> bool {
        if self.is_game_over() {
            return false;
        }
        (reach(self.colored(self.side_to_move)) & self.empty()).is_empty()
    }

    /// 終局結果（終局していなければ None）
    ///
    /// 全滅判定が駒数比較より先に行われる。
    pub fn winner(&self) -> Option<Outcome> {
        if !self.is_game_over() {
            return None;
        }
        if self.white.is_empty() {
            return Some(Outcome::Win(Color::Black));
        }
        if self.black.is_empty() {
            return Some(Outcome::Win(Color::White));
        }
        let white_count = self.white.count();
        let black_count = self.black.count();
        Some(match white_count.cmp(&black_count) {
            std::cmp::Ordering::Greater => Outcome::Win(Color::White),
            std::cmp::Ordering::Less => Outcome::Win(Color::Black),
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    /// 合法手の数
    #[inline]
    pub fn legal_move_count(&self) -> usize {
        generate_moves(self).len()
    }

    /// 指し手を適用する
    ///
    /// 合法性は検査しない。移動元と移動先をトグルし（clone では相殺される）、
    /// 移動先に隣接する相手駒を自駒に反転させる。
    pub fn do_move(&mut self, m: Move) {
        if m.is_pass() {
            self.new_turn();
            return;
        }
        debug_assert!(m.is_normal(), "do_move() called with {m:?}");

        let from = Bitboard::from_index(m.from_raw_index());
        let to = Bitboard::from_index(m.to_raw_index());

        let (own, opp) = match self.side_to_move {
            Color::White => (&mut self.white, &mut self.black),
            Color::Black => (&mut self.black, &mut self.white),
        };

        *own ^= from | to;

        let captured = singles(to) & *opp;
        *opp ^= captured;
        *own |= captured;

        self.new_turn();
    }

    /// 指し手を適用した局面を返す
    #[inline]
    pub fn after(&self, m: Move) -> Position {
        let mut pos = *self;
        pos.do_move(m);
        pos
    }

    /// テキストから読んだ指し手を合法手に対応付ける
    ///
    /// 隣接マスへの `from-to` 表記は clone として扱う。合法手でなければ None。
    pub fn resolve_move(&self, m: Move) -> Option<Move> {
        let moves = generate_moves(self);
        if moves.contains(m) {
            return Some(m);
        }
        if m.is_jump() && singles(Bitboard::from_square(m.from())).contains(m.to()) {
            let clone = Move::clone_to(m.to());
            if self.colored(self.side_to_move).contains(m.from()) && moves.contains(clone) {
                return Some(clone);
            }
        }
        None
    }

    fn new_turn(&mut self) {
        self.side_to_move = !self.side_to_move;
        self.half_turns = self.half_turns.saturating_add(1);
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..7).rev() {
            for file in 0..7 {
                let sq = Square::new(file, rank);
                let c = if self.black.contains(sq) {
                    'x'
                } else if self.white.contains(sq) {
                    'o'
                } else if self.blocked.contains(sq) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{c}")?;
            }
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    #[test]
    fn test_startpos() {
        let p = Position::startpos();
        assert_eq!(p.to_fen(), "x5o/7/7/7/7/7/o5x x 0");
        assert_eq!(p.piece_count(Color::White), 2);
        assert_eq!(p.piece_count(Color::Black), 2);
        assert!(!p.is_game_over());
        assert!(!p.must_pass());
        assert_eq!(p.winner(), None);
    }

    #[test]
    fn test_empty_and_colored() {
        let p = pos("x5o/7/3-3/7/7/7/o5x x 0");
        assert_eq!(p.empty().count(), 49 - 5);
        assert_eq!(p.colored(Color::White), p.white());
        assert_eq!(p.colored(Color::Black), p.black());
        assert_eq!(p.both_sides().count(), 4);
    }

    #[test]
    fn test_game_over_black_empty() {
        for half_turns in [0, 5, 99, 150] {
            let p = pos(&format!("7/7/7/7/7/7/o6 x {half_turns}"));
            assert!(p.is_game_over());
            assert!(!p.must_pass());
            assert_eq!(p.winner(), Some(Outcome::Win(Color::White)));
        }
        // 駒数が多くても全滅側が負け
        let p = pos("ooooooo/7/7/7/7/7/7 o 0");
        assert_eq!(p.winner(), Some(Outcome::Win(Color::White)));
    }

    #[test]
    fn test_game_over_white_empty() {
        let p = pos("7/7/7/3x3/7/7/7 o 0");
        assert!(p.is_game_over());
        assert_eq!(p.winner(), Some(Outcome::Win(Color::Black)));
    }

    #[test]
    fn test_game_over_half_turns() {
        let p = pos("x5o/7/7/7/7/7/oo4x x 99");
        assert!(!p.is_game_over());
        let p = pos("x5o/7/7/7/7/7/oo4x x 100");
        assert!(p.is_game_over());
        assert_eq!(p.winner(), Some(Outcome::Win(Color::White)));
    }

    #[test]
    fn test_full_board_equal_counts_is_draw() {
        let p = pos("ooooooo/ooooooo/ooooooo/oooxxxx/xxxxxxx/xxxxxxx/xxxxxx- o 0");
        assert_eq!(p.piece_count(Color::White), 24);
        assert_eq!(p.piece_count(Color::Black), 24);
        assert!(p.is_game_over());
        assert_eq!(p.winner(), Some(Outcome::Draw));
    }

    #[test]
    fn test_game_over_uses_both_sides_reach() {
        // 黒は動けないが白は動ける
        let p = pos("x--4/---4/---4/7/7/7/6o x 0");
        assert!(!p.is_game_over());
        assert!(p.must_pass());
        assert_eq!(p.winner(), None);
    }

    #[test]
    fn test_do_move_pass() {
        let p = pos("x--4/---4/---4/7/7/7/6o x 7");
        let q = p.after(Move::PASS);
        assert_eq!(q.side_to_move(), Color::White);
        assert_eq!(q.half_turns(), 8);
        assert_eq!(q.white(), p.white());
        assert_eq!(q.black(), p.black());
    }

    #[test]
    fn test_half_turns_saturate() {
        let p = pos("x5o/7/7/7/7/7/o5x x 4294967295");
        assert!(p.is_game_over());
        let q = p.after(Move::clone_to(Square::from_uai("a6").unwrap()));
        assert_eq!(q.half_turns(), u32::MAX);
        assert_eq!(q.side_to_move(), Color::White);
        assert_eq!(q.after(Move::PASS).half_turns(), u32::MAX);
    }

    #[test]
    fn test_do_move_clone() {
        let p = Position::startpos();
        // 黒 a7 -> b6 に clone
        let b6 = Square::new(1, 5);
        let q = p.after(Move::clone_to(b6));
        assert_eq!(q.piece_count(Color::Black), 3);
        assert!(q.black().contains(Square::new(0, 6)));
        assert!(q.black().contains(b6));
        assert_eq!(q.side_to_move(), Color::White);
        assert_eq!(q.half_turns(), 1);
    }

    #[test]
    fn test_do_move_jump() {
        let p = Position::startpos();
        let a7 = Square::new(0, 6);
        let c5 = Square::new(2, 4);
        let q = p.after(Move::jump(a7, c5));
        assert_eq!(q.piece_count(Color::Black), 2);
        assert!(!q.black().contains(a7));
        assert!(q.black().contains(c5));
    }

    #[test]
    fn test_do_move_captures_adjacent_only() {
        // e4 に clone すると隣接する d5, e3 だけが反転する
        let p = pos("7/7/2xx3/3o3/4x2/2x4/7 o 0");
        let e4 = Square::new(4, 3);
        let q = p.after(Move::clone_to(e4));
        assert!(q.white().contains(Square::new(3, 4))); // d5
        assert!(q.white().contains(Square::new(4, 2))); // e3
        assert!(q.black().contains(Square::new(2, 4))); // c5 は e4 から2マス
        assert!(q.black().contains(Square::new(2, 1))); // c2
        assert_eq!(q.piece_count(Color::White), 1 + 1 + 2);
        assert_eq!(q.piece_count(Color::Black), 2);
    }

    #[test]
    fn test_resolve_move() {
        let p = Position::startpos();
        let a7 = Square::new(0, 6);
        let b6 = Square::new(1, 5);
        let c5 = Square::new(2, 4);

        assert_eq!(p.resolve_move(Move::clone_to(b6)), Some(Move::clone_to(b6)));
        // "a7b6" は clone として扱う
        assert_eq!(p.resolve_move(Move::jump(a7, b6)), Some(Move::clone_to(b6)));
        assert_eq!(p.resolve_move(Move::jump(a7, c5)), Some(Move::jump(a7, c5)));
        // 相手の駒からは動かせない
        assert_eq!(p.resolve_move(Move::jump(Square::new(6, 6), Square::new(4, 4))), None);
        assert_eq!(p.resolve_move(Move::PASS), None);
        assert_eq!(p.resolve_move(Move::clone_to(Square::D4)), None);
    }

    #[test]
    fn test_display() {
        let p = pos("x5o/7/3-3/7/7/7/o5x x 0");
        let text = p.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "x.....o");
        assert_eq!(lines[2], "...#...");
        assert_eq!(lines[6], "o.....x");
    }
}
