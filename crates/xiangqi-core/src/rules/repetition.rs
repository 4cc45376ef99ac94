//! 長将・長捉（反復禁止規則）
//!
//! どちらも「直前の手を指した側が、自分の手番ごとに同じことを続けているか」を履歴から数える。
//! 相手の手は数えずに読み飛ばし、自分の手で条件を満たさないものが出たところで打ち切る。

use crate::board::{Board, ChasePair, PlyRecord};
use crate::error::BoardError;
use crate::movegen::attacked_pieces;
use crate::types::{Color, Move, Piece, Square};

impl Board {
    /// `sq` に移動した `piece` が直接取れる相手の駒との組（生成順で最初の駒）
    pub(crate) fn chase_pair_from(&self, sq: Square, piece: Piece) -> Option<ChasePair> {
        attacked_pieces(self, sq, piece)
            .first()
            .map(|target| ChasePair {
                attacker: piece.id(),
                target: target.id(),
            })
    }

    /// 直前の手から遡って、`color` の手で `pred` を満たし続けている回数
    fn own_streak(&self, color: Color, pred: impl Fn(&PlyRecord) -> bool) -> usize {
        self.history()
            .iter()
            .rev()
            .filter(|rec| rec.mover == color)
            .take_while(|rec| pred(*rec))
            .count()
    }

    /// 直前の手で `color` が連続王手の回数 `threshold` に達したか
    pub fn is_long_check_after_last_move(&self, color: Color, threshold: u32) -> bool {
        match self.last_record() {
            Some(last) if last.gave_check && last.mover == color => {}
            _ => return false,
        }
        self.own_streak(color, |rec| rec.gave_check) >= threshold as usize
    }

    /// 直前の手で `color` が同じ駒で同じ駒を追い続けた回数 `threshold` に達したか
    pub fn is_long_chase_after_last_move(&self, color: Color, threshold: u32) -> bool {
        let pair = match self.last_record() {
            Some(last) if last.mover == color => match last.chase {
                Some(pair) => pair,
                None => return false,
            },
            _ => return false,
        };
        self.own_streak(color, |rec| rec.chase == Some(pair)) >= threshold as usize
    }

    /// `mv` を指すと長将になるか（盤面は変更しない）
    pub fn is_long_check_if(&mut self, mv: &Move, threshold: u32) -> Result<bool, BoardError> {
        let trial = self.trial(mv)?;
        let mover = trial.record().mover;
        Ok(trial.is_long_check_after_last_move(mover, threshold))
    }

    /// `mv` を指すと長捉になるか（盤面は変更しない）
    pub fn is_long_chase_if(&mut self, mv: &Move, threshold: u32) -> Result<bool, BoardError> {
        let trial = self.trial(mv)?;
        let mover = trial.record().mover;
        Ok(trial.is_long_chase_after_last_move(mover, threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceType;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(sq(from.0, from.1), sq(to.0, to.1))
    }

    /// 红车が黑卒を縦に追い続ける局面
    fn chase_board() -> (Board, Piece, Piece) {
        let mut board = Board::new();
        board.place(sq(9, 3), Color::Red, PieceType::King);
        board.place(sq(0, 4), Color::Black, PieceType::King);
        let rook = board.place(sq(8, 1), Color::Red, PieceType::Rook);
        let pawn = board.place(sq(5, 0), Color::Black, PieceType::Pawn);
        (board, rook, pawn)
    }

    #[test]
    fn test_chase_pair_recorded_on_quiet_move() {
        let (mut board, rook, pawn) = chase_board();
        board.make_move(&mv((8, 1), (8, 0))).unwrap();
        let last = board.last_record().unwrap();
        assert_eq!(
            last.chase,
            Some(ChasePair {
                attacker: rook.id(),
                target: pawn.id()
            })
        );
        assert!(!last.gave_check);
    }

    #[test]
    fn test_chase_pair_uses_first_target() {
        let mut board = Board::new();
        board.place(sq(9, 3), Color::Red, PieceType::King);
        board.place(sq(0, 5), Color::Black, PieceType::King);
        let rook = board.place(sq(5, 1), Color::Red, PieceType::Rook);
        let below = board.place(sq(7, 4), Color::Black, PieceType::Horse);
        board.place(sq(5, 7), Color::Black, PieceType::Cannon);

        board.make_move(&mv((5, 1), (5, 4))).unwrap();
        let chase = board.last_record().unwrap().chase.unwrap();
        assert_eq!(chase.attacker, rook.id());
        assert_eq!(chase.target, below.id());
    }

    #[test]
    fn test_long_chase_after_three_chasing_moves() {
        let (mut board, _, _) = chase_board();
        board.make_move(&mv((8, 1), (8, 0))).unwrap();
        assert!(!board.is_long_chase_after_last_move(Color::Red, 3));
        board.make_move(&mv((5, 0), (5, 1))).unwrap();
        board.make_move(&mv((8, 0), (8, 1))).unwrap();
        assert!(!board.is_long_chase_after_last_move(Color::Red, 3));
        assert!(board.is_long_chase_after_last_move(Color::Red, 2));
        board.make_move(&mv((5, 1), (5, 0))).unwrap();

        let before = board.board_fen();
        assert_eq!(board.is_long_chase_if(&mv((8, 1), (8, 0)), 3), Ok(true));
        assert_eq!(board.is_long_chase_if(&mv((8, 1), (7, 1)), 3), Ok(false));
        assert_eq!(board.board_fen(), before);
        assert_eq!(board.history().len(), 4);
    }

    #[test]
    fn test_long_chase_broken_by_other_move() {
        let (mut board, _, _) = chase_board();
        board.make_move(&mv((8, 1), (8, 0))).unwrap();
        board.make_move(&mv((5, 0), (5, 1))).unwrap();
        // 追わない手を挟む
        board.make_move(&mv((9, 3), (8, 3))).unwrap();
        board.make_move(&mv((0, 4), (1, 4))).unwrap();
        board.make_move(&mv((8, 0), (8, 1))).unwrap();
        assert!(!board.is_long_chase_after_last_move(Color::Red, 2));
    }

    #[test]
    fn test_long_check_if_counts_streak() {
        let mut board = Board::new();
        board.place(sq(9, 3), Color::Red, PieceType::King);
        board.place(sq(0, 4), Color::Black, PieceType::King);
        board.place(sq(5, 0), Color::Red, PieceType::Rook);

        board.make_move(&mv((5, 0), (0, 0))).unwrap();
        assert!(board.last_record().unwrap().gave_check);
        board.make_move(&mv((0, 4), (1, 4))).unwrap();
        board.make_move(&mv((0, 0), (1, 0))).unwrap();
        assert!(board.is_long_check_after_last_move(Color::Red, 2));
        assert!(!board.is_long_check_after_last_move(Color::Black, 2));
        board.make_move(&mv((1, 4), (0, 4))).unwrap();

        assert_eq!(board.is_long_check_if(&mv((1, 0), (0, 0)), 3), Ok(true));
        assert_eq!(board.is_long_check_if(&mv((1, 0), (2, 0)), 3), Ok(false));
        assert_eq!(board.is_long_check_if(&mv((1, 0), (0, 0)), 4), Ok(false));
        assert_eq!(board.history().len(), 4);
    }

    #[test]
    fn test_long_check_broken_by_quiet_move() {
        let mut board = Board::new();
        board.place(sq(9, 3), Color::Red, PieceType::King);
        board.place(sq(0, 4), Color::Black, PieceType::King);
        board.place(sq(5, 0), Color::Red, PieceType::Rook);

        board.make_move(&mv((5, 0), (0, 0))).unwrap();
        board.make_move(&mv((0, 4), (1, 4))).unwrap();
        // 王手でない手を挟む
        board.make_move(&mv((0, 0), (2, 0))).unwrap();
        assert!(!board.last_record().unwrap().gave_check);
        board.make_move(&mv((1, 4), (0, 4))).unwrap();
        board.make_move(&mv((2, 0), (0, 0))).unwrap();
        assert!(board.last_record().unwrap().gave_check);
        board.make_move(&mv((0, 4), (1, 4))).unwrap();

        let third_check = mv((0, 0), (1, 0));
        assert_eq!(board.is_long_check_if(&third_check, 3), Ok(false));
        assert_eq!(board.is_long_check_if(&third_check, 2), Ok(true));
        assert!(board.generate_legal_moves(Color::Red).contains(&third_check));
        assert_eq!(board.history().len(), 6);
    }

    #[test]
    fn test_long_rule_query_on_empty_square_is_error() {
        let mut board = Board::startpos();
        assert_eq!(
            board.is_long_check_if(&mv((5, 5), (4, 5)), 3),
            Err(BoardError::InvalidMove { from: sq(5, 5) })
        );
        assert_eq!(
            board.is_long_chase_if(&mv((5, 5), (4, 5)), 3),
            Err(BoardError::InvalidMove { from: sq(5, 5) })
        );
    }
}
