// 顏色工具
// 所有像素以 minifb 使用的 0RGB (u32) 格式存放

/// RGB 顏色，每個通道 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 轉換為 0x00RRGGBB
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// 從 0x00RRGGBB 解碼（忽略最高位元組）
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    pub fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }

    pub fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        color.to_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_and_unpack() {
        let color = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(color.to_u32(), 0x0012_3456);
        assert_eq!(Rgb::from_u32(0xFF12_3456), color);
    }

    #[test]
    fn test_darken_saturates() {
        assert_eq!(Rgb::new(10, 200, 0).darken(20), Rgb::new(0, 180, 0));
        assert_eq!(Rgb::new(250, 0, 1).lighten(10), Rgb::new(255, 10, 11));
    }
}
