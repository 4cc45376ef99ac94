//! 合法手の絞り込み
//!
//! 擬似合法手を 1 手ずつ試し指しし、指した側の王が王手されている手・長将・長捉を除く。

use std::fmt;

use crate::board::Board;
use crate::config::RuleConfig;
use crate::movegen::piece_destinations;
use crate::types::{Color, Move};

/// 非合法の理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalReason {
    /// 移動元に駒がないか、駒の動きとして不可能
    NotPseudoLegal,
    /// 指した後に自分の王が王手されている（对面将を含む）
    LeavesKingInCheck,
    /// 長将
    LongCheck,
    /// 長捉
    LongChase,
}

impl IllegalReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            IllegalReason::NotPseudoLegal => "not pseudo-legal",
            IllegalReason::LeavesKingInCheck => "leaves king in check",
            IllegalReason::LongCheck => "perpetual check",
            IllegalReason::LongChase => "perpetual chase",
        }
    }
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 試し指し後の盤面で、`mover` の直前の手を判定する
fn classify(board: &Board, mover: Color, rules: &RuleConfig) -> Option<IllegalReason> {
    if board.is_in_check(mover) {
        Some(IllegalReason::LeavesKingInCheck)
    } else if board.is_long_check_after_last_move(mover, rules.long_check_limit) {
        Some(IllegalReason::LongCheck)
    } else if board.is_long_chase_after_last_move(mover, rules.long_chase_limit) {
        Some(IllegalReason::LongChase)
    } else {
        None
    }
}

impl Board {
    /// 指定手番の合法手を生成する
    ///
    /// 順序は擬似合法手の生成順のまま。盤面は最終的に元に戻る。
    pub fn generate_legal_moves(&mut self, color: Color) -> Vec<Move> {
        let rules = *self.rules();
        let pseudo = self.generate_pseudo_legal_moves(color);
        let mut legal = Vec::with_capacity(pseudo.len());

        for mv in pseudo {
            let reason = match self.trial(&mv) {
                Ok(trial) => classify(&trial, color, &rules),
                Err(_) => continue,
            };
            match reason {
                None => legal.push(mv),
                Some(r @ (IllegalReason::LongCheck | IllegalReason::LongChase)) => {
                    log::debug!("{} {mv} rejected: {r}", color.chinese_name());
                }
                Some(_) => {}
            }
        }

        legal
    }

    /// 指定手番に合法手が 1 つでもあるか
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let rules = *self.rules();
        self.generate_pseudo_legal_moves(color).into_iter().any(|mv| {
            self.trial(&mv)
                .is_ok_and(|trial| classify(&trial, color, &rules).is_none())
        })
    }

    /// 指し手が非合法ならその理由を返す（合法なら None）
    ///
    /// 指す側は移動元の駒の色。手番とは照合しない。
    pub fn illegal_reason(&mut self, mv: &Move) -> Option<IllegalReason> {
        let Some(piece) = self.piece_at(mv.from) else {
            return Some(IllegalReason::NotPseudoLegal);
        };
        if !piece_destinations(self, mv.from, piece).contains(&mv.to) {
            return Some(IllegalReason::NotPseudoLegal);
        }

        let rules = *self.rules();
        match self.trial(mv) {
            Ok(trial) => classify(&trial, piece.color(), &rules),
            Err(_) => Some(IllegalReason::NotPseudoLegal),
        }
    }

    /// 指し手が合法か
    #[inline]
    pub fn is_legal(&mut self, mv: &Move) -> bool {
        self.illegal_reason(mv).is_none()
    }
}
