//! 試し指し（TrialMove）
//!
//! 合法手判定や長将/長捉の問い合わせは「指してみて、調べて、戻す」で行う。
//! `TrialMove` は指した状態の盤面への読み取り専用ビューで、破棄時（パニックによる巻き戻しを含む）に必ず 1 手戻す。
//! 生存中は盤面を排他的に借用するため、戻す前に他の変更が入ることはない。

use std::ops::Deref;

use crate::error::BoardError;
use crate::types::{Move, Piece};

use super::pos::Board;
use super::state::PlyRecord;

/// 試し指しのスコープ
pub struct TrialMove<'a> {
    board: &'a mut Board,
    captured: Option<Piece>,
}

impl Board {
    /// 指し手を試し指しする
    ///
    /// 返り値を破棄すると盤面は元に戻る。移動元が空ならエラーで、盤面は変更しない。
    pub fn trial(&mut self, mv: &Move) -> Result<TrialMove<'_>, BoardError> {
        let captured = self.make_move(mv)?;
        Ok(TrialMove {
            board: self,
            captured,
        })
    }
}

impl TrialMove<'_> {
    /// 試し指しで取った駒
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// 試し指しした手の履歴
    #[inline]
    pub fn record(&self) -> &PlyRecord {
        // trial() で 1 手積んでいるので空にはならない
        &self.board.history[self.board.history.len() - 1]
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        let undone = self.board.undo_move();
        debug_assert!(undone.is_ok(), "trial move must leave one ply to undo");
    }
}
