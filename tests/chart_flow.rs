// 端對端：事件 → 繪圖指令 → 幀緩衝區

use rand::rngs::StdRng;
use rand::SeedableRng;

use random_bar_chart::render::{LineCap, Point};
use random_bar_chart::{
    App, AppEvent, BarGenerator, BarSet, Config, DrawCommand, Framebuffer, GridRenderer, Rgb,
    Viewport, GRID_SIZE,
};

fn seeded_app(seed: u64) -> App<StdRng> {
    App::with_generator(
        Config::new(),
        BarGenerator::with_rng(StdRng::seed_from_u64(seed)),
    )
}

#[test]
fn test_reference_viewport_geometry() {
    let colors = [Rgb::new(10, 20, 30); GRID_SIZE];
    let bars = BarSet::from_columns([10, 1, 1, 1, 1, 1, 1, 1, 1, 1], colors).unwrap();
    let renderer = GridRenderer::default();

    let viewport = Viewport::new(520, 560);
    let layout = renderer.layout(viewport).unwrap();
    assert_eq!((layout.size, layout.left, layout.top), (460, 30, 50));

    let commands = renderer.render(viewport, &bars);
    let bar_lines: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line {
                from,
                to,
                color,
                cap,
                ..
            } if *color == Rgb::new(10, 20, 30) => Some((*from, *to, *cap)),
            _ => None,
        })
        .collect();

    assert_eq!(bar_lines.len(), 10);
    assert_eq!(
        bar_lines[0],
        (Point::new(53, 510), Point::new(53, 50), LineCap::Butt)
    );
    assert_eq!(bar_lines[1].1.y, 510 - 46);
}

#[test]
fn test_rasterized_bar_touches_top_grid_line() {
    let colors = [Rgb::new(0, 128, 255); GRID_SIZE];
    let bars = BarSet::from_columns([10; GRID_SIZE], colors).unwrap();
    let renderer = GridRenderer::default();

    let mut fb = Framebuffer::new(520, 560);
    fb.execute(&renderer.render(Viewport::new(520, 560), &bars));

    let bar = Some(Rgb::new(0, 128, 255));
    assert_eq!(fb.pixel(53, 50), bar);
    assert_eq!(fb.pixel(53, 510), bar);
    assert_ne!(fb.pixel(53, 49), bar);
    assert_ne!(fb.pixel(53, 511), bar);
    // 線寬 10：x 48..58
    assert_eq!(fb.pixel(48, 300), bar);
    assert_eq!(fb.pixel(57, 300), bar);
    assert_ne!(fb.pixel(47, 300), bar);
    assert_ne!(fb.pixel(58, 300), bar);
}

#[test]
fn test_resize_then_redraw_cycle() {
    let mut app = seeded_app(99);
    let first = app.bars().clone();

    for (w, h) in [(640, 480), (300, 900), (520, 560)] {
        app.handle(AppEvent::ViewportChanged {
            width: w,
            height: h,
        });
        let mut fb = Framebuffer::new(w as usize, h as usize);
        fb.execute(&app.frame());
        assert_eq!(app.bars(), &first);
    }

    app.handle(AppEvent::RedrawRequested);
    let second = app.bars().clone();
    assert_ne!(second, first);
    assert!(second.iter().all(|bar| (1..=10).contains(&bar.height())));
}

#[test]
fn test_degenerate_window_renders_background_only() {
    let mut app = seeded_app(5);
    app.handle(AppEvent::ViewportChanged {
        width: 40,
        height: 80,
    });
    // 扣掉按鈕列後繪圖區為 40x40
    assert_eq!(app.chart_viewport(), Viewport::new(40, 40));

    let commands = app.frame();
    let lines = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    assert_eq!(lines, 0);

    let mut fb = Framebuffer::new(40, 80);
    fb.execute(&commands);
    assert_eq!(fb.pixel(20, 0), Some(Rgb::new(200, 200, 200)));
}
