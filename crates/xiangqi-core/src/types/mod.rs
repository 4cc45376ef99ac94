//! 基本型モジュール
//!
//! 象棋エンジンで使用する基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Color
//!   ↓
//! Square
//!   ↓
//! PieceType
//!   ↓
//! Piece (PieceId, PieceIdAllocator) ← Move
//!
//! GameResult は独立
//! ```

mod color;
mod game_result;
mod moves;
mod piece;
mod piece_type;
mod square;

pub use color::Color;
pub use game_result::GameResult;
pub use moves::Move;
pub use piece::{Piece, PieceId, PieceIdAllocator};
pub use piece_type::PieceType;
pub use square::Square;
