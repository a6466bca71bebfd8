/*
格線渲染器
==========
輸入：目前的 Viewport 與 BarSet
輸出：繪圖指令（11 條垂直線、11 條水平線、10 根長條）

純函數：相同輸入永遠產生相同輸出，不使用亂數。
視窗太小（size <= 0）時不產生任何指令。
*/

pub mod command;
pub mod layout;

pub use command::{DrawCommand, LineCap, Point, Rect};
pub use layout::{to_pixel, GridLayout, Viewport};

use crate::bars::{BarSet, GRID_SIZE};
use crate::color::Rgb;
use crate::config::ChartConfig;

#[derive(Debug, Clone)]
pub struct GridRenderer {
    margin: i32,
    grid_color: Rgb,
    grid_thickness: u32,
    bar_thickness: u32,
}

impl GridRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            margin: config.margin,
            grid_color: config.grid_color,
            grid_thickness: config.grid_thickness,
            bar_thickness: config.bar_thickness,
        }
    }

    pub fn layout(&self, viewport: Viewport) -> Option<GridLayout> {
        GridLayout::compute(viewport, self.margin)
    }

    pub fn render(&self, viewport: Viewport, bars: &BarSet) -> Vec<DrawCommand> {
        let Some(layout) = self.layout(viewport) else {
            return Vec::new();
        };

        let mut commands = Vec::with_capacity(2 * (GRID_SIZE + 1) + bars.len());

        // 格線 (10x10)
        for i in 0..=GRID_SIZE {
            let x = layout.column_x(i);
            let y = layout.row_y(i);

            // 垂直線
            commands.push(self.grid_line(Point::new(x, layout.top), Point::new(x, layout.bottom())));
            // 水平線
            commands.push(self.grid_line(Point::new(layout.left, y), Point::new(layout.right(), y)));
        }

        // 長條：從底線往上 height 格
        let bottom = layout.row_y(GRID_SIZE);
        for bar in bars {
            let x = layout.column_center_x(bar.column());
            commands.push(DrawCommand::Line {
                from: Point::new(x, bottom),
                to: Point::new(x, layout.bar_top_y(bar.height())),
                color: bar.color(),
                thickness: self.bar_thickness,
                cap: LineCap::Butt,
            });
        }

        commands
    }

    fn grid_line(&self, from: Point, to: Point) -> DrawCommand {
        DrawCommand::Line {
            from,
            to,
            color: self.grid_color,
            thickness: self.grid_thickness,
            cap: LineCap::Butt,
        }
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new(&ChartConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bars() -> BarSet {
        let colors = std::array::from_fn(|i| Rgb::new(i as u8 * 20, 0, 255));
        BarSet::from_columns([10, 1, 5, 3, 7, 2, 9, 4, 6, 8], colors).unwrap()
    }

    fn bar_lines(commands: &[DrawCommand]) -> Vec<(Point, Point, Rgb, u32)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    thickness,
                    ..
                } if *thickness == 10 => Some((*from, *to, *color, *thickness)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_command_counts() {
        let renderer = GridRenderer::default();
        let commands = renderer.render(Viewport::new(520, 560), &sample_bars());

        assert_eq!(commands.len(), 22 + 10);
        assert_eq!(bar_lines(&commands).len(), 10);
    }

    #[test]
    fn test_bar_geometry() {
        let renderer = GridRenderer::default();
        let commands = renderer.render(Viewport::new(520, 560), &sample_bars());
        let bars = bar_lines(&commands);

        // 第 0 欄高度 10：從底線 (510) 到頂線 (50)
        let (from, to, color, _) = bars[0];
        assert_eq!(from, Point::new(30 + 23, 510));
        assert_eq!(to, Point::new(30 + 23, 50));
        assert_eq!(color, Rgb::new(0, 0, 255));

        // 第 1 欄高度 1：剛好一格
        let (from, to, _, _) = bars[1];
        assert_eq!(from.x, 30 + 46 + 23);
        assert_eq!(from.y - to.y, 46);
    }

    #[test]
    fn test_bars_stay_inside_grid() {
        let renderer = GridRenderer::default();
        for (w, h) in [(520, 560), (333, 401), (91, 1200), (1000, 77)] {
            let viewport = Viewport::new(w, h);
            let layout = renderer.layout(viewport).unwrap();
            for (from, to, _, _) in bar_lines(&renderer.render(viewport, &sample_bars())) {
                assert_eq!(from.y, layout.bottom());
                assert!(to.y >= layout.top && to.y < layout.bottom());
                assert!(from.x > layout.left && from.x < layout.right());
            }
        }
    }

    #[test]
    fn test_grid_lines_span_square() {
        let renderer = GridRenderer::default();
        let commands = renderer.render(Viewport::new(520, 560), &sample_bars());

        match &commands[0] {
            DrawCommand::Line { from, to, color, thickness, .. } => {
                assert_eq!(*from, Point::new(30, 50));
                assert_eq!(*to, Point::new(30, 510));
                assert_eq!(*color, Rgb::new(80, 80, 80));
                assert_eq!(*thickness, 1);
            }
            other => panic!("預期格線，得到 {:?}", other),
        }
        match &commands[21] {
            DrawCommand::Line { from, to, .. } => {
                assert_eq!(*from, Point::new(30, 510));
                assert_eq!(*to, Point::new(490, 510));
            }
            other => panic!("預期格線，得到 {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_viewport_draws_nothing() {
        let renderer = GridRenderer::default();
        assert!(renderer.render(Viewport::new(40, 40), &sample_bars()).is_empty());
        assert!(renderer.render(Viewport::new(0, 560), &sample_bars()).is_empty());
    }
}
