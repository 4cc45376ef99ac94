//! 擬似合法手生成器
//!
//! 駒種ごとの移動規則だけで行き先を求める。王の安全・長将・長捉は考慮しない。
//! 自駒のあるマスへは移動しない。

use smallvec::SmallVec;

use crate::board::Board;
use crate::types::{Color, Move, Piece, PieceType, Square};

use super::tables::{ADVISOR_STEPS, ELEPHANT_STEPS, HORSE_STEPS, ORTHOGONAL, in_palace, on_own_side};

/// 1 駒の行き先（车・炮の最大 17 マスまでヒープ確保なし）
pub type Destinations = SmallVec<[Square; 17]>;

/// 空きマスか相手の駒がいるマスか
#[inline]
fn can_land(board: &Board, sq: Square, us: Color) -> bool {
    board.piece_at(sq).is_none_or(|p| p.color() != us)
}

// ============================================================================
// 駒種別の行き先
// ============================================================================

/// 车: 縦横に滑り、最初に当たった駒が相手なら取れる
fn rook_destinations(board: &Board, from: Square, us: Color, out: &mut Destinations) {
    for (dr, dc) in ORTHOGONAL {
        let mut cur = from.offset(dr, dc);
        while let Some(sq) = cur {
            match board.piece_at(sq) {
                None => out.push(sq),
                Some(p) => {
                    if p.color() != us {
                        out.push(sq);
                    }
                    break;
                }
            }
            cur = sq.offset(dr, dc);
        }
    }
}

/// 炮: 駒を取らない移動は车と同じ。取るときはちょうど 1 枚の「炮架」を越えた先の最初の駒
fn cannon_destinations(board: &Board, from: Square, us: Color, out: &mut Destinations) {
    for (dr, dc) in ORTHOGONAL {
        let mut cur = from.offset(dr, dc);
        while let Some(sq) = cur {
            if board.piece_at(sq).is_none() {
                out.push(sq);
                cur = sq.offset(dr, dc);
                continue;
            }

            // sq が炮架。色は問わない
            let mut beyond = sq.offset(dr, dc);
            while let Some(target) = beyond {
                if let Some(p) = board.piece_at(target) {
                    if p.color() != us {
                        out.push(target);
                    }
                    break;
                }
                beyond = target.offset(dr, dc);
            }
            break;
        }
    }
}

/// 马: 日の字に跳ぶ。马脚が塞がっていれば跳べない
fn horse_destinations(board: &Board, from: Square, us: Color, out: &mut Destinations) {
    for ((dr, dc), (leg_dr, leg_dc)) in HORSE_STEPS {
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        if from.offset(leg_dr, leg_dc).is_some_and(|leg| !board.is_empty(leg)) {
            continue;
        }
        if can_land(board, to, us) {
            out.push(to);
        }
    }
}

/// 相/象: 田の字に跳ぶ。象眼が塞がっていれば跳べず、河は越えられない
fn elephant_destinations(board: &Board, from: Square, us: Color, out: &mut Destinations) {
    for (dr, dc) in ELEPHANT_STEPS {
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        if !on_own_side(us, to) {
            continue;
        }
        if from.offset(dr / 2, dc / 2).is_some_and(|eye| !board.is_empty(eye)) {
            continue;
        }
        if can_land(board, to, us) {
            out.push(to);
        }
    }
}

/// 仕/士: 九宫の中を斜めに 1 マス
fn advisor_destinations(board: &Board, from: Square, us: Color, out: &mut Destinations) {
    for (dr, dc) in ADVISOR_STEPS {
        if let Some(to) = from.offset(dr, dc) {
            if in_palace(us, to) && can_land(board, to, us) {
                out.push(to);
            }
        }
    }
}

/// 帅/將: 九宫の中を縦横に 1 マス
fn king_destinations(board: &Board, from: Square, us: Color, out: &mut Destinations) {
    for (dr, dc) in ORTHOGONAL {
        if let Some(to) = from.offset(dr, dc) {
            if in_palace(us, to) && can_land(board, to, us) {
                out.push(to);
            }
        }
    }
}

/// 兵/卒: 前に 1 マス。河を越えた後は左右にも 1 マス
fn pawn_destinations(board: &Board, from: Square, us: Color, out: &mut Destinations) {
    if let Some(to) = from.offset(us.forward(), 0) {
        if can_land(board, to, us) {
            out.push(to);
        }
    }
    if !on_own_side(us, from) {
        for dc in [-1, 1] {
            if let Some(to) = from.offset(0, dc) {
                if can_land(board, to, us) {
                    out.push(to);
                }
            }
        }
    }
}

// ============================================================================
// 公開 API
// ============================================================================

/// `from` にいる駒 `piece` の擬似合法な行き先を生成順に返す
///
/// `piece` は盤上の駒である必要はない（盤面は利きの遮りにだけ使う）。
pub fn piece_destinations(board: &Board, from: Square, piece: Piece) -> Destinations {
    let mut out = Destinations::new();
    let us = piece.color();
    match piece.piece_type() {
        PieceType::Rook => rook_destinations(board, from, us, &mut out),
        PieceType::Horse => horse_destinations(board, from, us, &mut out),
        PieceType::Elephant => elephant_destinations(board, from, us, &mut out),
        PieceType::Advisor => advisor_destinations(board, from, us, &mut out),
        PieceType::King => king_destinations(board, from, us, &mut out),
        PieceType::Cannon => cannon_destinations(board, from, us, &mut out),
        PieceType::Pawn => pawn_destinations(board, from, us, &mut out),
    }
    out
}

/// `from` にいる駒 `piece` が直接取れる相手の駒を生成順に返す
pub fn attacked_pieces(board: &Board, from: Square, piece: Piece) -> SmallVec<[Piece; 8]> {
    piece_destinations(board, from, piece)
        .into_iter()
        .filter_map(|sq| board.piece_at(sq))
        .collect()
}

/// 指定手番の擬似合法手をすべて生成する（盤面を行優先で走査）
pub fn generate_pseudo_legal(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (from, piece) in board.pieces(color) {
        moves.extend(
            piece_destinations(board, from, piece)
                .into_iter()
                .map(|to| Move::new(from, to)),
        );
    }
    moves
}

impl Board {
    /// 指定手番の擬似合法手（王の安全・長将・長捉は考慮しない）
    pub fn generate_pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        generate_pseudo_legal(self, color)
    }
}
