//! 1 手分の履歴（PlyRecord）
//!
//! make_move 時に積み、undo_move 時に取り出して局面を復元する。
//! 指し手・取った駒・手番に加えて、長将/長捉判定と無吃子カウンタの復元に必要な情報を 1 レコードにまとめる。
//! 履歴は単一のスタックなので、指し手とメタ情報の長さが食い違うことはない。

use serde::{Deserialize, Serialize};

use crate::types::{Color, Move, Piece, PieceId};

/// 追っている駒と追われている駒の組（長捉判定用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChasePair {
    /// 動いた駒
    pub attacker: PieceId,
    /// 動いた駒が直接取れる相手の駒（複数あれば生成順で最初の駒）
    pub target: PieceId,
}

/// 1 手分の履歴
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlyRecord {
    /// 指し手
    pub mv: Move,
    /// 取った駒
    pub captured: Option<Piece>,
    /// 指す前の手番（undo で復元する）
    pub side_before: Color,
    /// 動かした駒の手番
    pub mover: Color,
    /// 動かした駒の識別子
    pub moved_id: PieceId,
    /// この手で相手に王手をかけたか
    pub gave_check: bool,
    /// この手で成立した「追い」（駒を取った手では常に None）
    pub chase: Option<ChasePair>,
    /// 指す前の無吃子カウンタ
    pub prev_halfmove: u32,
}

impl PlyRecord {
    /// 駒を取った手か
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
