//! FEN 形式の出力・解析
//!
//! 盤面部は 0 段目（黑方側）から 9 段目まで、各段を左から右へ並べる。
//! 連続する空きマスは数字で圧縮し、红方は大文字・黑方は小文字（R N B A K C P）。
//! 段は `/` で区切り、最後に空白と手番文字（`r` / `b`）を付ける。

use crate::error::FenError;
use crate::types::{Color, PieceType, Square};

use super::pos::Board;

/// 初期局面の FEN
pub const FEN_STARTPOS: &str =
    "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR r";

impl Board {
    /// 現局面の FEN 文字列を取得
    pub fn board_fen(&self) -> String {
        let mut rows = Vec::with_capacity(Square::ROWS as usize);

        for row in 0..Square::ROWS {
            let mut row_str = String::new();
            let mut empty_count = 0;

            for col in 0..Square::COLS {
                match self.piece_at(Square::new(row, col)) {
                    None => empty_count += 1,
                    Some(pc) => {
                        if empty_count > 0 {
                            row_str.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        row_str.push(pc.fen_char());
                    }
                }
            }

            if empty_count > 0 {
                row_str.push_str(&empty_count.to_string());
            }
            rows.push(row_str);
        }

        format!("{} {}", rows.join("/"), self.side_to_move.to_char())
    }

    /// FEN 文字列から盤面を生成
    ///
    /// 手番を省略した場合は红番。駒には新しい ID を払い出し、履歴は空になる。
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let mut board = Board::new();
        let mut parts = fen.split_whitespace();

        // 1. 盤面
        let board_str = parts.next().unwrap_or("");
        let rows: Vec<&str> = board_str.split('/').collect();
        if rows.len() != Square::ROWS as usize {
            return Err(FenError::RowCount(rows.len()));
        }

        for (row_idx, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    col += digit as usize;
                    continue;
                }
                let pt = PieceType::from_fen_char(c).ok_or(FenError::UnknownPiece(c))?;
                if col >= Square::COLS as usize {
                    return Err(FenError::RowWidth {
                        row: row_idx,
                        width: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::Red
                } else {
                    Color::Black
                };
                board.place(Square::new(row_idx as u8, col as u8), color, pt);
                col += 1;
            }
            if col != Square::COLS as usize {
                return Err(FenError::RowWidth {
                    row: row_idx,
                    width: col,
                });
            }
        }

        // 2. 手番（省略時は红）
        if let Some(side) = parts.next() {
            let mut chars = side.chars();
            board.side_to_move = match (chars.next().and_then(Color::from_char), chars.next()) {
                (Some(color), None) => color,
                _ => return Err(FenError::SideToMove(side.to_string())),
            };
        }

        Ok(board)
    }
}
