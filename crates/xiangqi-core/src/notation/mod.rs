//! 中国式棋譜表記
//!
//! 「炮二平五」「馬8进7」のような表記を扱う。
//!
//! - `render`: 指し手 → 表記（`Board::move_to_chinese`）
//! - `normalize`: 表記ゆれの正規化（異体字・全角数字・漢数字）
//! - `resolve`: 表記 → 現局面の合法手
//!
//! 表記は指す前の盤面から生成すること。指した後は移動先の駒で代用するため、前/后の判別がずれることがある。

mod normalize;
mod render;
mod resolve;

pub use normalize::normalize_notation;
pub use resolve::find_move_by_notation;
