//! ルール判定モジュール
//!
//! - `check`: 王手判定（直接の利きと「对面将」）
//! - `repetition`: 追いの記録と長将/長捉判定
//! - `legality`: 擬似合法手から合法手への絞り込み
//! - `result`: 詰み・合法手なし・無吃子引き分けの終局判定
//!
//! どの判定も盤面を試し指し（`TrialMove`）で一時的に進め、必ず元に戻す。

mod check;
mod legality;
mod repetition;
mod result;

pub use legality::IllegalReason;
