//! 擬似合法手生成モジュール
//!
//! 駒種ごとの移動規則に従って行き先を生成する。
//! 王の安全と長将/長捉は `rules` モジュールで後からふるい落とす。
//!
//! 行き先の生成順は固定で、長捉の対象（最初に見つかった相手の駒）もこの順で決まる。

mod generator;
mod tables;

pub use generator::{Destinations, attacked_pieces, generate_pseudo_legal, piece_destinations};
