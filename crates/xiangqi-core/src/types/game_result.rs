//! 終局結果（GameResult）

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Color;

/// 終局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// 引き分け（無吃子規則など）
    Draw,
    /// 詰み（winner の勝ち）
    Checkmate { winner: Color },
    /// 王手されていないが合法手がない（loser の負け）
    NoLegalMoves { loser: Color },
}

impl GameResult {
    /// 勝者（引き分けなら None）
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::Draw => None,
            GameResult::Checkmate { winner } => Some(winner),
            GameResult::NoLegalMoves { loser } => Some(loser.opponent()),
        }
    }

    /// 短い結果コード
    ///
    /// - `d`: 引き分け
    /// - `r+` / `b+`: 詰みによる红/黑の勝ち
    /// - `r-` / `b-`: 相手に合法手がないことによる红/黑の勝ち
    pub const fn code(self) -> &'static str {
        match self {
            GameResult::Draw => "d",
            GameResult::Checkmate { winner: Color::Red } => "r+",
            GameResult::Checkmate { winner: Color::Black } => "b+",
            GameResult::NoLegalMoves { loser: Color::Black } => "r-",
            GameResult::NoLegalMoves { loser: Color::Red } => "b-",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
