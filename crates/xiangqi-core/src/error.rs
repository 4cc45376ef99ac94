//! エラー型
//!
//! 盤面操作・FEN 解析・棋譜照合のエラーを定義する。
//! それ以外の操作（合法手生成・王手判定・終局判定）は整形式の盤面に対して全域的で、失敗しない。

use crate::types::Square;

/// 盤面操作のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// 移動元に駒がない
    #[error("Invalid move: no piece on source square {from}")]
    InvalidMove { from: Square },

    /// 戻す手がない
    #[error("Cannot undo: history is empty")]
    EmptyHistory,
}

/// FEN 解析エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// 段数が 10 ではない
    #[error("Expected 10 rows, got {0}")]
    RowCount(usize),

    /// 1 段のマス数が 9 ではない
    #[error("Row {row} describes {width} squares, expected 9")]
    RowWidth { row: usize, width: usize },

    /// 未知の駒文字
    #[error("Unknown piece character '{0}'")]
    UnknownPiece(char),

    /// 手番の形式が不正
    #[error("Invalid side to move: {0}")]
    SideToMove(String),
}

/// 棋譜照合のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// 現局面の合法手にどれも一致しない
    #[error("No legal move matches notation '{0}'")]
    NoMatch(String),

    /// 一致した手の実行に失敗した
    #[error(transparent)]
    Board(#[from] BoardError),
}
