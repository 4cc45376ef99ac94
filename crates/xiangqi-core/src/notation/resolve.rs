//! 表記 → 合法手

use crate::board::Board;
use crate::error::NotationError;
use crate::types::Move;

use super::normalize::normalize_notation;

/// 候補の表記が入力に一致するか
///
/// 完全一致、正規化後の一致、さらに `.` を除いた一致の順に試す。
fn notation_matches(candidate: &str, text: &str, normalized_text: &str) -> bool {
    if candidate == text {
        return true;
    }
    let normalized = normalize_notation(candidate);
    normalized == normalized_text || normalized.replace('.', "") == normalized_text.replace('.', "")
}

/// 手番側の合法手のうち、表記が `text` に一致する最初の手
pub fn find_move_by_notation(board: &mut Board, text: &str) -> Option<Move> {
    let normalized_text = normalize_notation(text);
    let color = board.side_to_move();
    board
        .generate_legal_moves(color)
        .into_iter()
        .find(|mv| notation_matches(&board.move_to_chinese(mv), text, &normalized_text))
}

impl Board {
    /// 表記に一致する合法手を探して指す
    pub fn play_notation(&mut self, text: &str) -> Result<Move, NotationError> {
        let mv = find_move_by_notation(self, text)
            .ok_or_else(|| NotationError::NoMatch(text.to_string()))?;
        self.make_move(&mv)?;
        Ok(mv)
    }
}
