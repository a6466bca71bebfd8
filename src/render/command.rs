// 繪圖指令
// 版面計算只產生指令，實際像素寫入交給 display::Framebuffer

use crate::color::Rgb;

/// 像素座標
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 像素矩形，範圍為 [x, x + width) x [y, y + height)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// 向內縮 amount 像素
    pub fn inset(&self, amount: i32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2 * amount).max(0),
            (self.height - 2 * amount).max(0),
        )
    }
}

/// 線段端點樣式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    /// 平頭：剛好結束於端點
    Butt,
    /// 方頭：兩端各延伸半個線寬
    Square,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Rgb,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        thickness: u32,
        cap: LineCap,
    },
    FillRect {
        rect: Rect,
        color: Rgb,
    },
    Text {
        origin: Point,
        text: String,
        color: Rgb,
        scale: u32,
    },
}
