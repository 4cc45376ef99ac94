//! 盤面（Board）

use std::fmt;

use crate::config::RuleConfig;
use crate::error::BoardError;
use crate::types::{Color, Move, Piece, PieceIdAllocator, PieceType, Square};

use super::state::PlyRecord;

/// 初期配置の一段目（左から）
const BACK_RANK: [PieceType; 9] = [
    PieceType::Rook,
    PieceType::Horse,
    PieceType::Elephant,
    PieceType::Advisor,
    PieceType::King,
    PieceType::Advisor,
    PieceType::Elephant,
    PieceType::Horse,
    PieceType::Rook,
];

/// 象棋の盤面
#[derive(Debug, Clone)]
pub struct Board {
    // === 盤面 ===
    /// 各マスの駒 [Square]
    pub(super) grid: [Option<Piece>; Square::NUM],
    /// 手番
    pub(super) side_to_move: Color,

    // === 状態 ===
    /// 連続して駒を取っていない半手数
    pub(super) halfmove_clock: u32,
    /// 履歴（1 手 1 レコード）
    pub(super) history: Vec<PlyRecord>,
    /// 駒 ID の払い出し器
    pub(super) ids: PieceIdAllocator,
    /// ルール設定
    pub(super) rules: RuleConfig,
}

impl Board {
    // ========== 局面設定 ==========

    /// 空の盤面を生成（红番）
    pub fn new() -> Self {
        Board {
            grid: [None; Square::NUM],
            side_to_move: Color::Red,
            halfmove_clock: 0,
            history: Vec::new(),
            ids: PieceIdAllocator::new(),
            rules: RuleConfig::default(),
        }
    }

    /// 初期局面の盤面を生成
    pub fn startpos() -> Self {
        let mut board = Board::new();
        board.set_start_position();
        board
    }

    /// ルール設定を差し替える
    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }

    /// 初期局面を設定
    ///
    /// 駒はすべて新しい ID で作り直し、履歴と無吃子カウンタをクリアする。
    pub fn set_start_position(&mut self) {
        self.grid = [None; Square::NUM];
        for (col, &pt) in BACK_RANK.iter().enumerate() {
            self.place(Square::new(0, col as u8), Color::Black, pt);
        }
        self.place(Square::new(2, 1), Color::Black, PieceType::Cannon);
        self.place(Square::new(2, 7), Color::Black, PieceType::Cannon);
        for col in (0..9).step_by(2) {
            self.place(Square::new(3, col), Color::Black, PieceType::Pawn);
        }

        for (col, &pt) in BACK_RANK.iter().enumerate() {
            self.place(Square::new(9, col as u8), Color::Red, pt);
        }
        self.place(Square::new(7, 1), Color::Red, PieceType::Cannon);
        self.place(Square::new(7, 7), Color::Red, PieceType::Cannon);
        for col in (0..9).step_by(2) {
            self.place(Square::new(6, col), Color::Red, PieceType::Pawn);
        }

        self.side_to_move = Color::Red;
        self.history.clear();
        self.halfmove_clock = 0;
    }

    /// 新しい ID の駒を作って置く
    pub fn place(&mut self, sq: Square, color: Color, piece_type: PieceType) -> Piece {
        let piece = Piece::new(color, piece_type, &mut self.ids);
        self.grid[sq.index()] = Some(piece);
        piece
    }

    /// 升目を直接書き換える（局面編集用）
    ///
    /// 払い出し器より後ろの ID を持つ駒が置かれた場合、以後の払い出しはその ID より後から行う。
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(p) = piece {
            self.ids.reserve_past(p.id());
        }
        self.grid[sq.index()] = piece;
    }

    /// 手番を設定
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    // ========== 盤面アクセス ==========

    /// 指定マスの駒を取得
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()]
    }

    /// 指定マスが空か
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.index()].is_none()
    }

    /// 手番を取得
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 無吃子カウンタ（半手数）
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// 履歴
    #[inline]
    pub fn history(&self) -> &[PlyRecord] {
        &self.history
    }

    /// 直前の手の履歴
    #[inline]
    pub fn last_record(&self) -> Option<&PlyRecord> {
        self.history.last()
    }

    /// ルール設定
    #[inline]
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// 指定手番の駒を行優先で列挙
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.grid[sq.index()] {
            Some(p) if p.color() == color => Some((sq, p)),
            _ => None,
        })
    }

    /// 帅/將の位置（盤上にいなければ None）
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, p)| p.piece_type() == PieceType::King)
            .map(|(sq, _)| sq)
    }

    // ========== 指し手実行 ==========

    /// 指し手を実行し、取った駒を返す
    ///
    /// 移動元が空なら `BoardError::InvalidMove` を返し、盤面は変更しない。
    /// 合法性（王の安全・長将・長捉）は検査しない。
    pub fn make_move(&mut self, mv: &Move) -> Result<Option<Piece>, BoardError> {
        let piece = self.grid[mv.from.index()].ok_or(BoardError::InvalidMove { from: mv.from })?;

        // 1. 駒の移動
        let captured = self.grid[mv.to.index()];
        let side_before = self.side_to_move;
        self.grid[mv.to.index()] = Some(piece);
        self.grid[mv.from.index()] = None;

        // 2. 手番交代
        self.side_to_move = side_before.opponent();

        // 3. 王手と追いの記録
        let mover = piece.color();
        let gave_check = self.is_in_check(mover.opponent());
        let chase = if captured.is_none() {
            self.chase_pair_from(mv.to, piece)
        } else {
            None
        };

        // 4. 無吃子カウンタ
        let prev_halfmove = self.halfmove_clock;
        self.halfmove_clock = if captured.is_some() { 0 } else { prev_halfmove + 1 };

        self.history.push(PlyRecord {
            mv: mv.clone(),
            captured,
            side_before,
            mover,
            moved_id: piece.id(),
            gave_check,
            chase,
            prev_halfmove,
        });
        log::trace!(
            "make_move {} {mv} captured={:?} check={gave_check} chase={chase:?}",
            piece,
            captured.map(|p| p.to_string())
        );

        Ok(captured)
    }

    /// 直前の手を戻し、その履歴を返す
    ///
    /// 履歴が空なら `BoardError::EmptyHistory` を返し、盤面は変更しない。
    pub fn undo_move(&mut self) -> Result<PlyRecord, BoardError> {
        let record = self.history.pop().ok_or(BoardError::EmptyHistory)?;

        // 駒を元の位置に戻し、取った駒を復元
        let moved = self.grid[record.mv.to.index()];
        self.grid[record.mv.from.index()] = moved;
        self.grid[record.mv.to.index()] = record.captured;

        self.side_to_move = record.side_before;
        self.halfmove_clock = record.prev_halfmove;
        Ok(record)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// 盤面を中国語の駒名で表示する（空きマスは「・」）
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Square::ROWS {
            let cells: Vec<&str> = (0..Square::COLS)
                .map(|col| match self.piece_at(Square::new(row, col)) {
                    Some(p) => p.chinese_name(),
                    None => "・",
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        write!(f, "轮：{}", self.side_to_move.chinese_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn test_board_new() {
        let board = Board::new();
        assert_eq!(board.side_to_move(), Color::Red);
        assert_eq!(board.halfmove_clock(), 0);
        assert!(board.history().is_empty());
        assert!(Square::all().all(|s| board.is_empty(s)));
    }

    #[test]
    fn test_startpos_layout() {
        let board = Board::startpos();
        assert_eq!(board.pieces(Color::Red).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
        assert_eq!(board.find_king(Color::Red), Some(sq(9, 4)));
        assert_eq!(board.find_king(Color::Black), Some(sq(0, 4)));
        let cannon = board.piece_at(sq(7, 1)).unwrap();
        assert_eq!(cannon.piece_type(), PieceType::Cannon);
        assert_eq!(cannon.color(), Color::Red);
    }

    #[test]
    fn test_startpos_ids_are_unique() {
        let board = Board::startpos();
        let mut ids: Vec<_> = Color::ALL
            .iter()
            .flat_map(|&c| board.pieces(c).map(|(_, p)| p.id()))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }

    #[test]
    fn test_reset_never_reuses_ids() {
        let mut board = Board::startpos();
        let before: Vec<_> = board.pieces(Color::Red).map(|(_, p)| p.id()).collect();
        board.set_start_position();
        let after: Vec<_> = board.pieces(Color::Red).map(|(_, p)| p.id()).collect();
        assert!(after.iter().all(|id| !before.contains(id)));
    }

    #[test]
    fn test_make_move_empty_source() {
        let mut board = Board::startpos();
        let mv = Move::new(sq(5, 0), sq(4, 0));
        assert_eq!(board.make_move(&mv), Err(BoardError::InvalidMove { from: sq(5, 0) }));
        assert!(board.history().is_empty());
        assert_eq!(board.side_to_move(), Color::Red);
    }

    #[test]
    fn test_make_and_undo_quiet_move() {
        let mut board = Board::startpos();
        let cannon = board.piece_at(sq(7, 1)).unwrap();
        let mv = Move::new(sq(7, 1), sq(7, 4));

        assert_eq!(board.make_move(&mv), Ok(None));
        assert_eq!(board.piece_at(sq(7, 4)), Some(cannon));
        assert!(board.is_empty(sq(7, 1)));
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.halfmove_clock(), 1);
        assert_eq!(board.history().len(), 1);

        let record = board.undo_move().unwrap();
        assert_eq!(record.moved_id, cannon.id());
        assert_eq!(record.side_before, Color::Red);
        assert_eq!(board.piece_at(sq(7, 1)), Some(cannon));
        assert!(board.is_empty(sq(7, 4)));
        assert_eq!(board.side_to_move(), Color::Red);
        assert_eq!(board.halfmove_clock(), 0);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_make_and_undo_capture() {
        let mut board = Board::new();
        board.place(sq(9, 4), Color::Red, PieceType::King);
        board.place(sq(0, 3), Color::Black, PieceType::King);
        let rook = board.place(sq(5, 0), Color::Red, PieceType::Rook);
        let pawn = board.place(sq(3, 0), Color::Black, PieceType::Pawn);
        board.halfmove_clock = 7;

        let mv = Move::new(sq(5, 0), sq(3, 0));
        assert_eq!(board.make_move(&mv), Ok(Some(pawn)));
        assert_eq!(board.piece_at(sq(3, 0)), Some(rook));
        assert_eq!(board.halfmove_clock(), 0);
        let last = board.last_record().unwrap();
        assert!(last.is_capture());
        assert_eq!(last.chase, None);

        board.undo_move().unwrap();
        assert_eq!(board.piece_at(sq(3, 0)), Some(pawn));
        assert_eq!(board.piece_at(sq(5, 0)), Some(rook));
        assert_eq!(board.halfmove_clock(), 7);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut board = Board::startpos();
        let before = board.board_fen();
        assert_eq!(board.undo_move(), Err(BoardError::EmptyHistory));
        assert_eq!(board.board_fen(), before);
    }

    #[test]
    fn test_set_piece_reserves_foreign_id() {
        let mut board = Board::new();
        let mut foreign = PieceIdAllocator::new();
        for _ in 0..50 {
            foreign.allocate();
        }
        let p = Piece::new(Color::Black, PieceType::Horse, &mut foreign);
        board.set_piece(sq(0, 1), Some(p));
        let q = board.place(sq(0, 2), Color::Black, PieceType::Horse);
        assert!(q.id() > p.id());
    }

    #[test]
    fn test_display() {
        let board = Board::startpos();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "車 馬 象 士 將 士 象 馬 車");
        assert_eq!(lines[4], "・ ・ ・ ・ ・ ・ ・ ・ ・");
        assert_eq!(lines[9], "车 马 相 仕 帅 仕 相 马 车");
        assert_eq!(lines[10], "轮：红");
    }
}
