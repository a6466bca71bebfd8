use std::time::Duration;

use crate::color::Rgb;

/// 視窗與底部按鈕區配置
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    /// 底部按鈕列高度，繪圖區為視窗高度扣除此值
    pub panel_height: u32,
    pub panel_color: Rgb,
    pub target_fps: usize,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Random Bar Chart".to_string(),
            width: 520,
            height: 560,
            panel_height: 40,
            panel_color: Rgb::new(238, 238, 238),
            target_fps: 60,
            resizable: true,
        }
    }
}

impl WindowConfig {
    /// 每幀最短間隔；target_fps 為 0 時不限速
    pub fn frame_interval(&self) -> Option<Duration> {
        if self.target_fps == 0 {
            return None;
        }
        Some(Duration::from_micros(1_000_000 / self.target_fps as u64))
    }
}
