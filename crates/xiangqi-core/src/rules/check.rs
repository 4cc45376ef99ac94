//! 王手判定

use crate::board::Board;
use crate::movegen::piece_destinations;
use crate::types::{Color, Square};

impl Board {
    /// 指定手番の帅/將が王手されているか
    ///
    /// 相手の駒の擬似合法な行き先に王がいる場合と、両王が同じ筋で間に駒なく向かい合う場合（对面将）に真。
    /// 王が盤上にいなければ真を返す。
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.find_king(color) else {
            return true;
        };

        if self.kings_facing() {
            return true;
        }

        self.pieces(color.opponent())
            .any(|(from, piece)| piece_destinations(self, from, piece).contains(&king))
    }

    /// 両王が同じ筋で、間に駒なく向かい合っているか
    pub fn kings_facing(&self) -> bool {
        let (Some(red), Some(black)) = (self.find_king(Color::Red), self.find_king(Color::Black))
        else {
            return false;
        };
        if red.col() != black.col() {
            return false;
        }

        let (top, bottom) = (red.row().min(black.row()), red.row().max(black.row()));
        (top + 1..bottom).all(|row| self.is_empty(Square::new(row, red.col())))
    }
}
