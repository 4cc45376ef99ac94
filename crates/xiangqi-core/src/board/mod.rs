//! 盤面表現モジュール
//!
//! 象棋の盤面を表現し、手の実行・巻き戻しを行う。
//!
//! - `Board`: 盤面本体（10×9 の升目配列・手番・無吃子カウンタ・履歴・駒 ID 払い出し器・ルール設定）
//! - `PlyRecord`: 1 手分の履歴（指し手・取った駒・王手/追いの記録・直前の無吃子カウンタ）
//! - `TrialMove`: 試し指しのスコープ。破棄時に必ず 1 手戻す
//! - FEN 形式の出力・解析
//! - 盤面変換（左右反転・先後入れ替え）
//!
//! 升目配列と履歴は `make_move` / `undo_move` / `set_piece` を通じてのみ更新され、
//! 常に互いに整合しているように保つ。

mod fen;
mod pos;
mod state;
mod transform;
mod trial;

pub use fen::FEN_STARTPOS;
pub use pos::Board;
pub use state::{ChasePair, PlyRecord};
pub use trial::TrialMove;
