/*
格線版面
========
將 10x10 邏輯格線對應到視窗中最大的置中正方形
*/

use crate::bars::GRID_SIZE;

/// 目前繪圖區域的像素尺寸，每次繪製時重新讀取
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// 四捨五入到整數像素；格線與長條共用，確保對齊
pub fn to_pixel(value: f64) -> i32 {
    value.round() as i32
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub left: i32,
    pub top: i32,
    pub size: i32,
    pub cell: f64,
}

impl GridLayout {
    /// 計算版面；size <= 0（視窗太小）時回傳 None
    pub fn compute(viewport: Viewport, margin: i32) -> Option<Self> {
        let width = viewport.width.min(i32::MAX as u32) as i32;
        let height = viewport.height.min(i32::MAX as u32) as i32;

        let size = width.min(height).saturating_sub(margin.saturating_mul(2));
        if size <= 0 {
            return None;
        }

        Some(Self {
            left: (width - size) / 2,
            top: (height - size) / 2,
            size,
            cell: size as f64 / GRID_SIZE as f64,
        })
    }

    pub fn right(&self) -> i32 {
        self.left + self.size
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.size
    }

    /// 第 index 條垂直格線的 x（0..=10）
    pub fn column_x(&self, index: usize) -> i32 {
        to_pixel(self.left as f64 + index as f64 * self.cell)
    }

    /// 第 index 條水平格線的 y（0 為最上方，10 為底線）
    pub fn row_y(&self, index: usize) -> i32 {
        to_pixel(self.top as f64 + index as f64 * self.cell)
    }

    /// 第 column 欄的中心 x
    pub fn column_center_x(&self, column: usize) -> i32 {
        to_pixel(self.left as f64 + (column as f64 + 0.5) * self.cell)
    }

    /// 高度為 height 格的長條頂端 y，等同第 (10 - height) 條水平格線
    pub fn bar_top_y(&self, height: u8) -> i32 {
        let height = (height as usize).min(GRID_SIZE);
        self.row_y(GRID_SIZE - height)
    }
}
