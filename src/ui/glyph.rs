/*
按鈕文字用的 5x7 點陣字型
========================
每個字元 7 行，每行一個位元組，低 5 位元有效，bit 4 為最左邊的像素
*/

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
/// 字元間距（未縮放）
pub const GLYPH_SPACING: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    pub const fn from_rows(rows: [u8; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    /// 取得特定位置的像素
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        if x >= GLYPH_WIDTH || y >= GLYPH_HEIGHT {
            return false;
        }
        (self.rows[y] >> (GLYPH_WIDTH - 1 - x)) & 1 != 0
    }
}

const SPACE: Glyph = Glyph::from_rows([0; GLYPH_HEIGHT]);

// 未定義字元以方框顯示
const UNKNOWN: Glyph = Glyph::from_rows([
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
]);

pub fn glyph(c: char) -> Glyph {
    match c {
        ' ' => SPACE,
        'R' => Glyph::from_rows([
            0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001,
        ]),
        'a' => Glyph::from_rows([
            0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111,
        ]),
        'd' => Glyph::from_rows([
            0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10011, 0b01101,
        ]),
        'e' => Glyph::from_rows([
            0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110,
        ]),
        'r' => Glyph::from_rows([
            0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000,
        ]),
        'w' => Glyph::from_rows([
            0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010,
        ]),
        _ => UNKNOWN,
    }
}

/// 文字寬度（像素），最後一個字元後不加間距
pub fn text_width(text: &str, scale: u32) -> i32 {
    let count = text.chars().count();
    if count == 0 {
        return 0;
    }
    let advance = (GLYPH_WIDTH + GLYPH_SPACING) * count - GLYPH_SPACING;
    (advance as u32 * scale.max(1)) as i32
}

pub fn text_height(scale: u32) -> i32 {
    (GLYPH_HEIGHT as u32 * scale.max(1)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_bits() {
        let r = glyph('R');
        assert!(r.is_set(0, 0));
        assert!(!r.is_set(4, 0));
        assert!(r.is_set(4, 1));
        assert!(!r.is_set(5, 0));
        assert!(!glyph(' ').is_set(0, 0));
    }

    #[test]
    fn test_unknown_falls_back_to_box() {
        assert_eq!(glyph('#'), UNKNOWN);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("R", 1), 5);
        assert_eq!(text_width("Redraw", 2), (6 * 6 - 1) * 2);
        assert_eq!(text_height(2), 14);
    }
}
