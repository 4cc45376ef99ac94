//! 駒種（PieceType）

use serde::{Deserialize, Serialize};

/// 駒種（先後の区別なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceType {
    /// 车
    Rook = 0,
    /// 马
    Horse = 1,
    /// 相・象
    Elephant = 2,
    /// 仕・士
    Advisor = 3,
    /// 帅・將
    King = 4,
    /// 炮
    Cannon = 5,
    /// 兵・卒
    Pawn = 6,
}

impl PieceType {
    /// 全駒種
    pub const ALL: [PieceType; 7] = [
        PieceType::Rook,
        PieceType::Horse,
        PieceType::Elephant,
        PieceType::Advisor,
        PieceType::King,
        PieceType::Cannon,
        PieceType::Pawn,
    ];

    /// 縦に直進する駒か（棋譜で進退に歩数を書く駒）
    #[inline]
    pub const fn is_straight_mover(self) -> bool {
        matches!(
            self,
            PieceType::Rook | PieceType::King | PieceType::Cannon | PieceType::Pawn
        )
    }

    /// FEN 文字（大文字）
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceType::Rook => 'R',
            PieceType::Horse => 'N',
            PieceType::Elephant => 'B',
            PieceType::Advisor => 'A',
            PieceType::King => 'K',
            PieceType::Cannon => 'C',
            PieceType::Pawn => 'P',
        }
    }

    /// FEN 文字から生成（大文字小文字を区別しない）
    pub fn from_fen_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'R' => Some(PieceType::Rook),
            'N' => Some(PieceType::Horse),
            'B' => Some(PieceType::Elephant),
            'A' => Some(PieceType::Advisor),
            'K' => Some(PieceType::King),
            'C' => Some(PieceType::Cannon),
            'P' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}
