//! 終局判定
//!
//! 優先順位は 無吃子判和 → 詰み（红・黑の順）→ 合法手なし（红・黑の順）。

use crate::board::Board;
use crate::config::StalematePolicy;
use crate::types::{Color, GameResult};

impl Board {
    /// 指定手番が詰んでいるか（王手されていて合法手がない）
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// 無吃子の半手数が引き分けの上限に達したか
    #[inline]
    pub fn is_no_capture_draw(&self) -> bool {
        self.halfmove_clock() >= self.rules().no_capture_draw_plies
    }

    /// 終局結果（対局が続いていれば None）
    pub fn game_result(&mut self) -> Option<GameResult> {
        if self.is_no_capture_draw() {
            return Some(GameResult::Draw);
        }

        for color in Color::ALL {
            if self.is_checkmate(color) {
                return Some(GameResult::Checkmate {
                    winner: color.opponent(),
                });
            }
        }

        for color in Color::ALL {
            if !self.has_legal_move(color) {
                return Some(match self.rules().stalemate {
                    StalematePolicy::Loss => GameResult::NoLegalMoves { loser: color },
                    StalematePolicy::Draw => GameResult::Draw,
                });
            }
        }

        None
    }
}
