//! 指し手（Move）

use std::fmt;

use super::{PieceType, Square};

/// 指し手
///
/// ルール上意味を持つのは `from` と `to` のみ。
/// - `promotion`: 象棋に成りはないため常に `None`（外部フォーマットとの互換用）
/// - `comment`: 棋譜の注釈
/// - `is_variation`: 変化手順フラグ（棋譜管理側で使用）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
    pub comment: String,
    pub is_variation: bool,
}

impl Move {
    /// 移動元・移動先から生成
    #[inline]
    pub fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
            comment: String::new(),
            is_variation: false,
        }
    }

    /// 注釈を付ける
    pub fn with_comment(mut self, comment: impl Into<String>) -> Move {
        self.comment = comment.into();
        self
    }

    /// 変化手順として印を付ける
    pub fn as_variation(mut self) -> Move {
        self.is_variation = true;
        self
    }

    /// 移動元・移動先が同じか（注釈等は比較しない）
    #[inline]
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }

    /// ICCS 形式（例: "b2e2"）に変換
    pub fn to_iccs(&self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// ICCS 形式（"b2e2" / "b2-e2"）から生成
    pub fn from_iccs(s: &str) -> Option<Move> {
        let s = s.trim();
        let (from, to) = match s.len() {
            4 => (s.get(0..2)?, s.get(2..4)?),
            5 if s.as_bytes()[2] == b'-' => (s.get(0..2)?, s.get(3..5)?),
            _ => return None,
        };
        Some(Move::new(Square::from_iccs(from)?, Square::from_iccs(to)?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
