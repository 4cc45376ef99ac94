//! 表記ゆれの正規化
//!
//! 照合の前に両辺へかける。漢数字と全角数字は算用数字にそろえ、駒名の異体字は红方の字形に寄せる。

/// 棋譜表記を正規化する
///
/// - 前後の空白を除き、途中の半角スペースも取り除く
/// - 全角数字 `０`〜`９` → `0`〜`9`
/// - 漢数字 `零〇一二三四五六七八九` → `0`〜`9`、`十` → `10`
/// - 異体字 `車→车` `馬→马` `傌→马` `砲→炮` `將→将` `帥→帅` `士→仕`
pub fn normalize_notation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        match c {
            ' ' => {}
            '０'..='９' => {
                let digit = c as u32 - '０' as u32;
                out.push(char::from(b'0' + digit as u8));
            }
            '零' | '〇' => out.push('0'),
            '一' => out.push('1'),
            '二' => out.push('2'),
            '三' => out.push('3'),
            '四' => out.push('4'),
            '五' => out.push('5'),
            '六' => out.push('6'),
            '七' => out.push('7'),
            '八' => out.push('8'),
            '九' => out.push('9'),
            '十' => out.push_str("10"),
            '車' => out.push('车'),
            '馬' | '傌' => out.push('马'),
            '砲' => out.push('炮'),
            '將' => out.push('将'),
            '帥' => out.push('帅'),
            '士' => out.push('仕'),
            _ => out.push(c),
        }
    }
    out
}
