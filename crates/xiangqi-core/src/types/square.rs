//! 升目（Square）

use std::fmt;

/// 升目（0-89）
///
/// 配置: 行優先。`index = row * 9 + col`。
/// - row 0 = 黑方の一段目（盤の上端）、row 9 = 红方の一段目（盤の下端）
/// - col 0 = 盤の左端（红方から見て「九」路、黑方から見て「1」路）
///
/// 表示は ICCS 形式（`a0`〜`i9`）。筋文字は col、段数字は `9 - row`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 段数
    pub const ROWS: u8 = 10;
    /// 筋数
    pub const COLS: u8 = 9;
    /// 升目の数
    pub const NUM: usize = 90;

    /// 段と筋から生成
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < Self::ROWS && col < Self::COLS);
        Square(row * Self::COLS + col)
    }

    /// 符号付き座標から生成（盤外なら None）
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Square> {
        if row >= 0 && row < Self::ROWS as i8 && col >= 0 && col < Self::COLS as i8 {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// 段（0-9）
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::COLS
    }

    /// 筋（0-8）
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::COLS
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 相対位置の升目（盤外なら None）
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::from_coords(self.row() as i8 + dr, self.col() as i8 + dc)
    }

    /// 左右反転（4 筋軸）
    #[inline]
    pub const fn mirror(self) -> Square {
        Square::new(self.row(), Self::COLS - 1 - self.col())
    }

    /// 180 度回転
    #[inline]
    pub const fn rotate(self) -> Square {
        Square(Self::NUM as u8 - 1 - self.0)
    }

    /// ICCS 形式の文字列から生成（例: "h2"）
    pub fn from_iccs(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?.to_digit(10)?;
        if chars.next().is_some() || !('a'..='i').contains(&file) {
            return None;
        }
        let col = file as u8 - b'a';
        Some(Square::new(9 - rank as u8, col))
    }

    /// 全ての升を行優先で返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let rank = 9 - self.row();
        write!(f, "{file}{rank}")
    }
}
