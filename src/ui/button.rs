/*
================================================================================
重繪按鈕
================================================================================
置中於視窗底部按鈕列的單一按鈕

點擊判定：
- 在按鈕內按下滑鼠左鍵 → 進入待觸發
- 放開時游標仍在按鈕內 → 觸發一次
- 按下時在按鈕外，或放開時已移出 → 不觸發
================================================================================
*/

use crate::color::Rgb;
use crate::render::{DrawCommand, Point, Rect};
use crate::ui::glyph::{text_height, text_width};

const LABEL_SCALE: u32 = 2;
const PADDING_X: i32 = 14;
const PADDING_Y: i32 = 6;
const BORDER: i32 = 1;

const FACE_COLOR: Rgb = Rgb::new(0xF4, 0xF4, 0xF4);
const BORDER_COLOR: Rgb = Rgb::new(0x7A, 0x8A, 0x99);
const LABEL_COLOR: Rgb = Rgb::new(0x20, 0x20, 0x20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Hovered,
    Pressed,
}

#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    rect: Rect,
    panel: Rect,
    panel_color: Rgb,
    state: ButtonState,
    // 按下時是否在按鈕內
    armed: bool,
    was_down: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, panel_color: Rgb) -> Self {
        Self {
            label: label.into(),
            rect: Rect::default(),
            panel: Rect::default(),
            panel_color,
            state: ButtonState::Normal,
            armed: false,
            was_down: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn panel(&self) -> Rect {
        self.panel
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// 按鈕列位於視窗最下方，按鈕水平、垂直皆置中
    pub fn layout(&mut self, window_width: u32, window_height: u32, panel_height: u32) {
        let width = window_width.min(i32::MAX as u32) as i32;
        let height = window_height.min(i32::MAX as u32) as i32;
        let panel_height = (panel_height.min(i32::MAX as u32) as i32).min(height);

        self.panel = Rect::new(0, height - panel_height, width, panel_height);

        let button_width = text_width(&self.label, LABEL_SCALE) + 2 * PADDING_X;
        let button_height = text_height(LABEL_SCALE) + 2 * PADDING_Y;
        self.rect = Rect::new(
            (width - button_width) / 2,
            self.panel.y + (panel_height - button_height) / 2,
            button_width,
            button_height,
        );
    }

    /// 更新滑鼠狀態；完成一次點擊時回傳 true
    pub fn update(&mut self, mouse: Option<(f32, f32)>, down: bool) -> bool {
        let inside = mouse
            .map(|(x, y)| self.rect.contains(Point::new(x.floor() as i32, y.floor() as i32)))
            .unwrap_or(false);

        let mut clicked = false;
        if down && !self.was_down {
            self.armed = inside;
        } else if !down && self.was_down {
            clicked = self.armed && inside;
            self.armed = false;
        }
        self.was_down = down;

        self.state = if self.armed && inside {
            ButtonState::Pressed
        } else if inside && !down {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        };

        clicked
    }

    pub fn render(&self) -> Vec<DrawCommand> {
        let face = match self.state {
            ButtonState::Normal => FACE_COLOR,
            ButtonState::Hovered => FACE_COLOR.lighten(0x0B),
            ButtonState::Pressed => FACE_COLOR.darken(0x30),
        };

        let label_w = text_width(&self.label, LABEL_SCALE);
        let label_h = text_height(LABEL_SCALE);
        // 按下時文字下移一個像素
        let offset = if self.state == ButtonState::Pressed { 1 } else { 0 };
        let origin = Point::new(
            self.rect.x + (self.rect.width - label_w) / 2 + offset,
            self.rect.y + (self.rect.height - label_h) / 2 + offset,
        );

        vec![
            DrawCommand::FillRect {
                rect: self.panel,
                color: self.panel_color,
            },
            DrawCommand::FillRect {
                rect: self.rect,
                color: BORDER_COLOR,
            },
            DrawCommand::FillRect {
                rect: self.rect.inset(BORDER),
                color: face,
            },
            DrawCommand::Text {
                origin,
                text: self.label.clone(),
                color: LABEL_COLOR,
                scale: LABEL_SCALE,
            },
        ]
    }
}
