use crate::color::Rgb;
use crate::render::{DrawCommand, LineCap, Point, Rect};
use crate::ui::glyph::{self, GLYPH_HEIGHT, GLYPH_SPACING, GLYPH_WIDTH};

/// 螢幕緩衝區（0RGB，每像素一個 u32）
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    buffer: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// 視窗尺寸改變時重新配置；內容清為黑色
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.buffer = vec![0; width * height];
    }

    pub fn get_buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(Rgb::from_u32(self.buffer[y * self.width + x]))
        } else {
            None
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.buffer.fill(color.to_u32());
    }

    /// 設置幀緩衝區中的像素，超出範圍時忽略
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x] = color.to_u32();
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let x0 = rect.x.max(0) as usize;
        let y0 = rect.y.max(0) as usize;
        let x1 = rect.right().clamp(0, self.width as i32) as usize;
        let y1 = rect.bottom().clamp(0, self.height as i32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let value = color.to_u32();
        for y in y0..y1 {
            let row = y * self.width;
            self.buffer[row + x0..row + x1].fill(value);
        }
    }

    /// 畫線；端點包含在內。水平／垂直線以矩形填滿，其餘以 Bresenham 逐點蓋印
    pub fn draw_line(&mut self, from: Point, to: Point, color: Rgb, thickness: u32, cap: LineCap) {
        let t = thickness.max(1) as i32;
        let half = t / 2;
        let extend = match cap {
            LineCap::Butt => 0,
            LineCap::Square => half,
        };

        if from.x == to.x {
            let (y0, y1) = (from.y.min(to.y) - extend, from.y.max(to.y) + extend);
            self.fill_rect(Rect::new(from.x - half, y0, t, y1 - y0 + 1), color);
        } else if from.y == to.y {
            let (x0, x1) = (from.x.min(to.x) - extend, from.x.max(to.x) + extend);
            self.fill_rect(Rect::new(x0, from.y - half, x1 - x0 + 1, t), color);
        } else {
            let dx = (to.x - from.x).abs();
            let dy = -(to.y - from.y).abs();
            let sx = if from.x < to.x { 1 } else { -1 };
            let sy = if from.y < to.y { 1 } else { -1 };
            let (mut x, mut y) = (from.x, from.y);
            let mut err = dx + dy;

            loop {
                self.fill_rect(Rect::new(x - half, y - half, t, t), color);
                if x == to.x && y == to.y {
                    break;
                }
                let e2 = 2 * err;
                if e2 >= dy {
                    err += dy;
                    x += sx;
                }
                if e2 <= dx {
                    err += dx;
                    y += sy;
                }
            }
        }
    }

    pub fn draw_text(&mut self, origin: Point, text: &str, color: Rgb, scale: u32) {
        let scale = scale.max(1) as i32;
        let advance = (GLYPH_WIDTH + GLYPH_SPACING) as i32 * scale;

        for (i, c) in text.chars().enumerate() {
            let glyph = glyph::glyph(c);
            let gx = origin.x + i as i32 * advance;
            for y in 0..GLYPH_HEIGHT {
                for x in 0..GLYPH_WIDTH {
                    if glyph.is_set(x, y) {
                        let px = gx + x as i32 * scale;
                        let py = origin.y + y as i32 * scale;
                        self.fill_rect(Rect::new(px, py, scale, scale), color);
                    }
                }
            }
        }
    }

    /// 依序執行繪圖指令
    pub fn execute(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            match command {
                DrawCommand::Clear { color } => self.clear(*color),
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    thickness,
                    cap,
                } => self.draw_line(*from, *to, *color, *thickness, *cap),
                DrawCommand::FillRect { rect, color } => self.fill_rect(*rect, *color),
                DrawCommand::Text {
                    origin,
                    text,
                    color,
                    scale,
                } => self.draw_text(*origin, text, *color, *scale),
            }
        }
    }
}
