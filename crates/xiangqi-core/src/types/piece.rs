//! 駒（Piece）
//!
//! 駒は手番・駒種に加えて、生成時に割り当てられる識別子（`PieceId`）を持つ。
//! 識別子は盤上の位置とは独立で、指し手によって駒が移動しても変わらない。
//! 長捉の判定は「どの駒がどの駒を追っているか」を識別子で追跡する。

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Color, PieceType};

/// 駒の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PieceId(u32);

impl PieceId {
    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 駒の識別子の払い出し器
///
/// 単調増加で払い出し、同じ払い出し器から同じ値が二度出ることはない。
/// 盤面（`Board`）が 1 つ所有し、盤面変換でも引き継がれる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceIdAllocator {
    next: u32,
}

impl PieceIdAllocator {
    /// 1 から払い出す払い出し器を生成
    pub const fn new() -> Self {
        PieceIdAllocator { next: 1 }
    }

    /// 次の識別子を払い出す
    #[inline]
    pub fn allocate(&mut self) -> PieceId {
        let id = PieceId(self.next);
        self.next += 1;
        id
    }

    /// 外部で払い出された識別子より後から払い出すようにする
    #[inline]
    pub fn reserve_past(&mut self, id: PieceId) {
        if id.0 >= self.next {
            self.next = id.0 + 1;
        }
    }

    /// 次に払い出される識別子（払い出しはしない）
    #[inline]
    pub const fn peek(&self) -> PieceId {
        PieceId(self.next)
    }
}

impl Default for PieceIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// 駒（手番・駒種・識別子）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    piece_type: PieceType,
    id: PieceId,
}

impl Piece {
    /// 新しい識別子を払い出して生成
    #[inline]
    pub fn new(color: Color, piece_type: PieceType, ids: &mut PieceIdAllocator) -> Piece {
        Piece {
            color,
            piece_type,
            id: ids.allocate(),
        }
    }

    /// 既存の識別子を引き継いで生成（盤面変換用）
    #[inline]
    pub const fn with_id(color: Color, piece_type: PieceType, id: PieceId) -> Piece {
        Piece {
            color,
            piece_type,
            id,
        }
    }

    /// 手番を取得
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// 駒種を取得
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        self.piece_type
    }

    /// 識別子を取得
    #[inline]
    pub const fn id(self) -> PieceId {
        self.id
    }

    /// FEN 文字（红方は大文字、黑方は小文字）
    #[inline]
    pub const fn fen_char(self) -> char {
        let c = self.piece_type.fen_char();
        match self.color {
            Color::Red => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// 中国語の駒名（红: 车马相仕帅炮兵、黑: 車馬象士將炮卒）
    pub const fn chinese_name(self) -> &'static str {
        match (self.color, self.piece_type) {
            (Color::Red, PieceType::Rook) => "车",
            (Color::Red, PieceType::Horse) => "马",
            (Color::Red, PieceType::Elephant) => "相",
            (Color::Red, PieceType::Advisor) => "仕",
            (Color::Red, PieceType::King) => "帅",
            (Color::Red, PieceType::Cannon) => "炮",
            (Color::Red, PieceType::Pawn) => "兵",
            (Color::Black, PieceType::Rook) => "車",
            (Color::Black, PieceType::Horse) => "馬",
            (Color::Black, PieceType::Elephant) => "象",
            (Color::Black, PieceType::Advisor) => "士",
            (Color::Black, PieceType::King) => "將",
            (Color::Black, PieceType::Cannon) => "炮",
            (Color::Black, PieceType::Pawn) => "卒",
        }
    }

    /// 駒種と手番が同じか（識別子は比較しない）
    #[inline]
    pub fn same_kind(self, other: Piece) -> bool {
        self.color == other.color && self.piece_type == other.piece_type
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.to_char(), self.piece_type.fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = PieceIdAllocator::new();
        let a = ids.allocate();
        let b = ids.allocate();
        assert!(a < b);
        assert_eq!(ids.peek().raw(), b.raw() + 1);
    }

    #[test]
    fn test_allocator_reserve_past() {
        let mut ids = PieceIdAllocator::new();
        let foreign = Piece::with_id(Color::Red, PieceType::Rook, PieceId(40));
        ids.reserve_past(foreign.id());
        assert_eq!(ids.allocate().raw(), 41);
        // 既に後ろにいるなら何もしない
        ids.reserve_past(PieceId(3));
        assert_eq!(ids.allocate().raw(), 42);
    }

    #[test]
    fn test_piece_new_assigns_distinct_ids() {
        let mut ids = PieceIdAllocator::new();
        let a = Piece::new(Color::Red, PieceType::Pawn, &mut ids);
        let b = Piece::new(Color::Red, PieceType::Pawn, &mut ids);
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
        assert!(a.same_kind(b));
    }

    #[test]
    fn test_piece_chars() {
        let mut ids = PieceIdAllocator::new();
        let red_rook = Piece::new(Color::Red, PieceType::Rook, &mut ids);
        let black_rook = Piece::new(Color::Black, PieceType::Rook, &mut ids);
        assert_eq!(red_rook.fen_char(), 'R');
        assert_eq!(black_rook.fen_char(), 'r');
        assert_eq!(red_rook.chinese_name(), "车");
        assert_eq!(black_rook.chinese_name(), "車");
        assert_eq!(red_rook.to_string(), "rR");
    }

    #[test]
    fn test_piece_cannon_name_is_shared() {
        let mut ids = PieceIdAllocator::new();
        let red = Piece::new(Color::Red, PieceType::Cannon, &mut ids);
        let black = Piece::new(Color::Black, PieceType::Cannon, &mut ids);
        assert_eq!(red.chinese_name(), black.chinese_name());
    }
}
