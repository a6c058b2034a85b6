//! 探索木（ノードアリーナ）
//!
//! ノードは `Vec<Node>` に追加されるだけで削除されない。親子関係はインデックスで持つため、
//! アリーナの再確保で参照が無効になることはない。木全体は1回の探索の後に捨てる。

use crate::movegen::generate_moves;
use crate::position::Position;
use crate::types::Move;

/// アリーナ内のノード番号
pub type NodeId = u32;

/// 探索木のノード
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) visits: u32,
    pub(crate) value: f32,
    pub(crate) pos: Position,
    pub(crate) mv: Move,
}

impl Node {
    /// 訪問回数0・価値0・子なしのノードを作る
    pub fn new(id: NodeId, parent: Option<NodeId>, pos: Position, mv: Move) -> Self {
        Self {
            id,
            parent,
            children: Vec::new(),
            visits: 0,
            value: 0.0,
            pos,
            mv,
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn visits(&self) -> u32 {
        self.visits
    }

    /// 価値の合計
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// 平均価値（未訪問なら None）
    #[inline]
    pub fn mean_value(&self) -> Option<f32> {
        (self.visits > 0).then(|| self.value / self.visits as f32)
    }

    #[inline]
    pub fn pos(&self) -> &Position {
        &self.pos
    }

    /// このノードに至った指し手（根は `Move::NONE`）
    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// 未展開の合法手が残っているか
    ///
    /// 合法手数は毎回数え直す（ロールアウトに比べれば十分安い）。
    #[inline]
    pub fn is_expandable(&self) -> bool {
        self.children.len() < self.pos.legal_move_count()
    }

    /// 合法手も子もない葉（ゲーム木の末端）
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.is_expandable() && !self.is_expanded()
    }
}

/// 探索木
///
/// インデックス0が常に根。
#[derive(Clone, Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// 根のノード番号
    pub const ROOT: NodeId = 0;

    /// 根だけの木を作る
    pub fn new(root: Position) -> Self {
        Self {
            nodes: vec![Node::new(Self::ROOT, None, root, Move::NONE)],
        }
    }

    /// ノード数（根を含むので常に 1 以上）
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }


    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[Self::ROOT as usize]
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }

    /// 次の未展開の手で子ノードを1つ作り、その番号を返す
    ///
    /// 子の数がそのまま合法手リスト上の展開カーソルになる。
    ///
    /// # Panics
    /// 全ての合法手が展開済みのノードに対して呼んだ場合
    pub fn expand(&mut self, id: NodeId) -> NodeId {
        let child_id = self.nodes.len() as NodeId;
        let node = self.get(id);
        let moves = generate_moves(&node.pos);
        let cursor = node.children.len();
        assert!(
            cursor < moves.len(),
            "expand() called on fully expanded node {id} ({cursor} of {} moves)",
            moves.len()
        );
        let mv = moves.at(cursor);
        let pos = node.pos.after(mv);

        self.nodes.push(Node::new(child_id, Some(id), pos, mv));
        self.get_mut(id).children.push(child_id);
        child_id
    }
}
