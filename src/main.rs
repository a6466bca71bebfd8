// 隨機長條圖 - 主程式
// 10x10 格線，點擊 Redraw 產生 10 根隨機高度、隨機顏色的長條

use log::{error, info};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use random_bar_chart::utils::logger;
use random_bar_chart::{App, AppEvent, Config, Framebuffer, Result};

fn main() {
    if let Err(e) = run() {
        error!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logger::init()?;
    info!("📊 隨機長條圖啟動中...");

    let config = Config::new();

    // 創建窗口
    let mut window = Window::new(
        &config.window.title,
        config.window.width,
        config.window.height,
        WindowOptions {
            resize: config.window.resizable,
            ..WindowOptions::default()
        },
    )?;
    window.limit_update_rate(config.window.frame_interval());
    info!("✅ 窗口創建成功");

    let mut framebuffer = Framebuffer::new(config.window.width, config.window.height);
    let mut app = App::new(config);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let (width, height) = window.get_size();
        if width == 0 || height == 0 {
            // 視窗最小化
            window.update();
            continue;
        }
        app.handle(AppEvent::ViewportChanged {
            width: width as u32,
            height: height as u32,
        });

        // 空白鍵 / Enter 等同按下按鈕
        if window.is_key_pressed(Key::Space, KeyRepeat::No)
            || window.is_key_pressed(Key::Enter, KeyRepeat::No)
        {
            app.handle(AppEvent::RedrawRequested);
        }
        app.pointer(
            window.get_mouse_pos(MouseMode::Discard),
            window.get_mouse_down(MouseButton::Left),
        );

        if app.needs_repaint() {
            framebuffer.resize(width, height);
            framebuffer.execute(&app.frame());
            window.update_with_buffer(framebuffer.get_buffer(), width, height)?;
        } else {
            window.update();
        }
    }

    info!("🎉 隨機長條圖結束，共重繪 {} 次", app.generation());
    Ok(())
}
