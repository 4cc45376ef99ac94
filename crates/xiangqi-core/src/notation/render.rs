//! 指し手 → 中国式表記
//!
//! `[前|后]` + 駒名 + 移動元の筋 + 動作（进/退/平）+ 移動先の筋または歩数。
//! 红方は漢数字で右から数え、黑方は算用数字で左から数える。

use crate::board::Board;
use crate::types::{Color, Move, Piece, Square};

const CN_DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// 数字を手番の書式で表す
fn number_label(n: u8, color: Color) -> String {
    match color {
        Color::Red => CN_DIGITS[n as usize % 10].to_string(),
        Color::Black => n.to_string(),
    }
}

/// 筋の表記
fn column_label(col: u8, color: Color) -> String {
    let n = match color {
        Color::Red => 9 - col,
        Color::Black => col + 1,
    };
    number_label(n, color)
}

impl Board {
    /// 指し手を中国式表記に変換する
    ///
    /// 駒は移動元を優先し、空なら移動先の駒を使う。どちらも空なら `"b2->e2"` 形式を返す。
    pub fn move_to_chinese(&self, mv: &Move) -> String {
        let Some(piece) = self.piece_at(mv.from).or_else(|| self.piece_at(mv.to)) else {
            return format!("{}->{}", mv.from, mv.to);
        };

        let color = piece.color();
        let prefix = self.tandem_prefix(mv.from, piece);
        let name = piece.chinese_name();
        let from_label = column_label(mv.from.col(), color);

        let diff = mv.to.row() as i8 - mv.from.row() as i8;
        let action = if diff * color.forward() > 0 { '进' } else { '退' };

        if !piece.piece_type().is_straight_mover() {
            let to_label = column_label(mv.to.col(), color);
            format!("{prefix}{name}{from_label}{action}{to_label}")
        } else if mv.from.col() == mv.to.col() {
            let step = number_label(diff.unsigned_abs(), color);
            format!("{prefix}{name}{from_label}{action}{step}")
        } else {
            let to_label = column_label(mv.to.col(), color);
            format!("{prefix}{name}{from_label}平{to_label}")
        }
    }

    /// 同じ筋に同種の駒が複数あるときの「前」「后」
    ///
    /// 最も敵陣側の駒が「前」、それ以外はすべて「后」。
    fn tandem_prefix(&self, from: Square, piece: Piece) -> &'static str {
        let mut rows: Vec<u8> = (0..Square::ROWS)
            .filter(|&row| {
                self.piece_at(Square::new(row, from.col()))
                    .is_some_and(|p| p.same_kind(piece))
            })
            .collect();
        if rows.len() < 2 {
            return "";
        }

        if piece.color() == Color::Black {
            rows.reverse();
        }
        if rows[0] == from.row() { "前" } else { "后" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceType;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn chinese(board: &Board, from: (u8, u8), to: (u8, u8)) -> String {
        board.move_to_chinese(&Move::new(sq(from.0, from.1), sq(to.0, to.1)))
    }

    #[test]
    fn test_opening_moves() {
        let board = Board::startpos();
        assert_eq!(chinese(&board, (7, 7), (7, 4)), "炮二平五");
        assert_eq!(chinese(&board, (7, 1), (7, 4)), "炮八平五");
        assert_eq!(chinese(&board, (9, 7), (7, 6)), "马二进三");
        assert_eq!(chinese(&board, (9, 8), (8, 8)), "车一进一");
        assert_eq!(chinese(&board, (6, 6), (5, 6)), "兵三进一");
        assert_eq!(chinese(&board, (9, 3), (8, 4)), "仕六进五");
        assert_eq!(chinese(&board, (9, 2), (7, 4)), "相七进五");
        assert_eq!(chinese(&board, (9, 4), (8, 4)), "帅五进一");
        assert_eq!(chinese(&board, (7, 1), (8, 1)), "炮八退一");
    }

    #[test]
    fn test_black_uses_arabic_digits() {
        let board = Board::startpos();
        assert_eq!(chinese(&board, (2, 7), (2, 4)), "炮8平5");
        assert_eq!(chinese(&board, (0, 7), (2, 6)), "馬8进7");
        assert_eq!(chinese(&board, (3, 2), (4, 2)), "卒3进1");
        assert_eq!(chinese(&board, (0, 0), (2, 0)), "車1进2");
        assert_eq!(chinese(&board, (2, 1), (1, 1)), "炮2退1");
        assert_eq!(chinese(&board, (0, 5), (1, 4)), "士6进5");
    }

    #[test]
    fn test_front_and_rear_on_same_column() {
        let mut board = Board::new();
        board.place(sq(9, 4), Color::Red, PieceType::King);
        board.place(sq(0, 3), Color::Black, PieceType::King);
        board.place(sq(9, 0), Color::Red, PieceType::Rook);
        board.place(sq(7, 0), Color::Red, PieceType::Rook);
        board.place(sq(0, 8), Color::Black, PieceType::Rook);
        board.place(sq(2, 8), Color::Black, PieceType::Rook);

        assert_eq!(chinese(&board, (7, 0), (7, 1)), "前车九平八");
        assert_eq!(chinese(&board, (9, 0), (8, 0)), "后车九进一");
        // 黑は段の大きい方が前
        assert_eq!(chinese(&board, (2, 8), (3, 8)), "前車9进1");
        assert_eq!(chinese(&board, (0, 8), (1, 8)), "后車9进1");
    }

    #[test]
    fn test_horse_retreat() {
        let mut board = Board::new();
        board.place(sq(9, 4), Color::Red, PieceType::King);
        board.place(sq(0, 3), Color::Black, PieceType::King);
        board.place(sq(5, 4), Color::Red, PieceType::Horse);
        board.place(sq(4, 4), Color::Black, PieceType::Horse);
        assert_eq!(chinese(&board, (5, 4), (7, 5)), "马五退四");
        assert_eq!(chinese(&board, (4, 4), (2, 3)), "馬5退4");
    }

    #[test]
    fn test_rendering_after_move_uses_destination() {
        let mut board = Board::startpos();
        let mv = Move::new(sq(7, 7), sq(7, 4));
        board.make_move(&mv).unwrap();
        assert_eq!(board.move_to_chinese(&mv), "炮二平五");
    }

    #[test]
    fn test_rendering_without_piece() {
        let board = Board::startpos();
        assert_eq!(chinese(&board, (5, 4), (4, 4)), "e4->e5");
    }
}
