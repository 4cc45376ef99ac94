//! # xiangqi-core
//!
//! 中国象棋（Xiangqi）のルールエンジン。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, Piece, Move, GameResult など）
//! - `board`: 盤面表現と make_move/undo_move、FEN、盤面変換
//! - `movegen`: 駒種別の擬似合法手生成
//! - `rules`: 王手判定・合法手フィルタ・長将/長捉・終局判定
//! - `notation`: 中国式棋譜表記（例: "炮二平五"）の生成と照合
//! - `config`: ルール設定（閾値・ステイルメイトの扱い）
//!
//! ```
//! use xiangqi_core::{Board, Color, Move, Square};
//!
//! let mut board = Board::startpos();
//! let mv = Move::new(Square::new(7, 7), Square::new(7, 4));
//! assert!(board.generate_legal_moves(Color::Red).contains(&mv));
//! assert_eq!(board.move_to_chinese(&mv), "炮二平五");
//! board.make_move(&mv).unwrap();
//! assert_eq!(board.side_to_move(), Color::Black);
//! ```

// 基本型
pub mod types;

// 盤面表現
pub mod board;

// 擬似合法手生成
pub mod movegen;

// ルール判定
pub mod rules;

// 棋譜表記
pub mod notation;

// ルール設定
pub mod config;

mod error;

pub use board::{Board, ChasePair, PlyRecord, TrialMove};
pub use config::{RuleConfig, StalematePolicy};
pub use error::{BoardError, FenError, NotationError};
pub use types::{Color, GameResult, Move, Piece, PieceId, PieceIdAllocator, PieceType, Square};
