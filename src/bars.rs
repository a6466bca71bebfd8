/*
隨機長條資料產生器
==================
每次重繪產生一組新的 10 根長條：
- 高度：1..=10 格（均勻分佈）
- 顏色：R、G、B 各自獨立均勻分佈於 0..=255

長條一旦建立便不可變，整組 BarSet 只會被整體替換。
*/

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::color::Rgb;

/// 邏輯格線的大小（10x10）
pub const GRID_SIZE: usize = 10;

/// 單根長條
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    column: u8,
    height: u8,
    color: Rgb,
}

impl Bar {
    /// 建立長條；欄位或高度超出範圍時回傳 None
    pub fn new(column: usize, height: u8, color: Rgb) -> Option<Self> {
        if column >= GRID_SIZE || height == 0 || height as usize > GRID_SIZE {
            return None;
        }
        Some(Self {
            column: column as u8,
            height,
            color,
        })
    }

    pub fn column(&self) -> usize {
        self.column as usize
    }

    /// 高度（格數，1..=10）
    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}

/// 一整組長條，第 i 根位於第 i 欄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSet {
    bars: [Bar; GRID_SIZE],
}

impl BarSet {
    /// 由每欄的高度與顏色建立；任何高度不在 1..=10 時回傳 None
    pub fn from_columns(heights: [u8; GRID_SIZE], colors: [Rgb; GRID_SIZE]) -> Option<Self> {
        let mut bars = Vec::with_capacity(GRID_SIZE);
        for (column, (&height, &color)) in heights.iter().zip(colors.iter()).enumerate() {
            bars.push(Bar::new(column, height, color)?);
        }
        let bars: [Bar; GRID_SIZE] = bars.try_into().ok()?;
        Some(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn get(&self, column: usize) -> Option<&Bar> {
        self.bars.get(column)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bar> {
        self.bars.iter()
    }

    pub fn heights(&self) -> [u8; GRID_SIZE] {
        self.bars.map(|bar| bar.height)
    }
}

impl<'a> IntoIterator for &'a BarSet {
    type Item = &'a Bar;
    type IntoIter = std::slice::Iter<'a, Bar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 長條資料產生器，可注入任何亂數來源
pub struct BarGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl BarGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for BarGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BarGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// 產生一組新的長條；每欄依序取高度，再取 R、G、B
    pub fn generate(&mut self) -> BarSet {
        let rng = &mut self.rng;
        let bars = std::array::from_fn(|column| {
            let height = rng.gen_range(1..=GRID_SIZE as u8);
            let color = Rgb::new(rng.gen(), rng.gen(), rng.gen());
            Bar {
                column: column as u8,
                height,
                color,
            }
        });
        BarSet { bars }
    }
}
