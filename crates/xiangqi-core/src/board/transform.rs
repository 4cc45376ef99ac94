//! 盤面変換（左右反転・先後入れ替え）
//!
//! 変換後の盤面は履歴が空になる。駒は元の ID を保ったまま移され、
//! 払い出し器も引き継ぐので、変換後に置いた駒の ID が既存の駒と衝突することはない。

use crate::types::{Color, Piece, Square};

use super::pos::Board;

impl Board {
    /// 左右反転した盤面（手番・駒色はそのまま）
    pub fn mirrored(&self) -> Board {
        self.transformed(|sq, pc| (sq.mirror(), pc), self.side_to_move)
    }

    /// 盤を 180 度回して駒色を入れ替えた盤面（手番も入れ替わる）
    pub fn color_swapped(&self) -> Board {
        self.transformed(
            |sq, pc| {
                let swapped = Piece::with_id(pc.color().opponent(), pc.piece_type(), pc.id());
                (sq.rotate(), swapped)
            },
            self.side_to_move.opponent(),
        )
    }

    fn transformed(
        &self,
        map: impl Fn(Square, Piece) -> (Square, Piece),
        side_to_move: Color,
    ) -> Board {
        let mut board = Board::new().with_rules(self.rules);
        board.ids = self.ids.clone();
        for sq in Square::all() {
            if let Some(pc) = self.piece_at(sq) {
                let (to, moved) = map(sq, pc);
                board.set_piece(to, Some(moved));
            }
        }
        board.side_to_move = side_to_move;
        board
    }
}
