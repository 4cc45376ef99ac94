//! ルール設定
//!
//! 長将・長捉の閾値、無吃子判和の手数、合法手なし（困毙）の扱いを保持する。
//! `serde` で TOML/JSON から読み込める。省略したキーは既定値になる。
//!
//! ```toml
//! long_check_limit = 3
//! long_chase_limit = 3
//! no_capture_draw_plies = 120
//! stalemate = "loss"
//! ```

use serde::{Deserialize, Serialize};

/// 王手されずに合法手がなくなった場合の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StalematePolicy {
    /// 合法手のない側の負け（象棋の通常ルール）
    #[default]
    Loss,
    /// 引き分け
    Draw,
}

/// ルール設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// 同じ側の連続王手がこの回数に達する手は禁手
    pub long_check_limit: u32,
    /// 同じ駒で同じ駒を追う手がこの回数に達する手は禁手
    pub long_chase_limit: u32,
    /// 無吃子の半手数がこの値以上で引き分け（120 半手 = 60 回合）
    pub no_capture_draw_plies: u32,
    /// 困毙の扱い
    pub stalemate: StalematePolicy,
}

impl RuleConfig {
    /// 長将の既定閾値
    pub const DEFAULT_LONG_CHECK_LIMIT: u32 = 3;
    /// 長捉の既定閾値
    pub const DEFAULT_LONG_CHASE_LIMIT: u32 = 3;
    /// 無吃子判和の既定半手数
    pub const DEFAULT_NO_CAPTURE_DRAW_PLIES: u32 = 120;
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            long_check_limit: Self::DEFAULT_LONG_CHECK_LIMIT,
            long_chase_limit: Self::DEFAULT_LONG_CHASE_LIMIT,
            no_capture_draw_plies: Self::DEFAULT_NO_CAPTURE_DRAW_PLIES,
            stalemate: StalematePolicy::Loss,
        }
    }
}
