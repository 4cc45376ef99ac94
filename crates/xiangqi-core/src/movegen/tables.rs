//! 駒の利きの方向表と盤上の区域
//!
//! 方向表の順序は生成順そのもので、長捉の「最初に見つかった相手の駒」を決める。

use crate::types::{Color, Square};

/// 縦横 4 方向（下・上・右・左）
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// 马の跳び先と「马脚」（長い辺の方向に隣接するマス）
pub(crate) const HORSE_STEPS: [((i8, i8), (i8, i8)); 8] = [
    ((-2, -1), (-1, 0)),
    ((-2, 1), (-1, 0)),
    ((2, -1), (1, 0)),
    ((2, 1), (1, 0)),
    ((-1, -2), (0, -1)),
    ((1, -2), (0, -1)),
    ((-1, 2), (0, 1)),
    ((1, 2), (0, 1)),
];

/// 相/象の跳び先（「象眼」は中点）
pub(crate) const ELEPHANT_STEPS: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

/// 仕/士の斜め 1 マス
pub(crate) const ADVISOR_STEPS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// 九宫（3 筋〜5 筋、红は 7〜9 段、黑は 0〜2 段）の中か
#[inline]
pub(crate) const fn in_palace(color: Color, sq: Square) -> bool {
    let row = sq.row();
    let col = sq.col();
    let row_ok = match color {
        Color::Red => row >= 7,
        Color::Black => row <= 2,
    };
    row_ok && col >= 3 && col <= 5
}

/// 自陣（河を越えていない側: 红は 5〜9 段、黑は 0〜4 段）か
#[inline]
pub(crate) const fn on_own_side(color: Color, sq: Square) -> bool {
    match color {
        Color::Red => sq.row() >= 5,
        Color::Black => sq.row() <= 4,
    }
}
