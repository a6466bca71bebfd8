use crate::color::Rgb;

/// 格線與長條的繪製配置
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// 正方形格線區域四周的留白（像素）
    pub margin: i32,
    pub bar_thickness: u32,
    pub grid_thickness: u32,
    pub background: Rgb,
    pub grid_color: Rgb,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            margin: 30,
            bar_thickness: 10,
            grid_thickness: 1,
            background: Rgb::new(200, 200, 200), // 灰色背景
            grid_color: Rgb::new(80, 80, 80),
        }
    }
}
