use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::bars::{BarGenerator, BarSet};
use crate::config::Config;
use crate::render::{DrawCommand, GridRenderer, Viewport};
use crate::ui::{Button, ButtonState};

/// 應用程式事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// 使用者要求重繪：產生新的長條
    RedrawRequested,
    /// 視窗尺寸改變或需要重畫：沿用目前的長條
    ViewportChanged { width: u32, height: u32 },
}

/// 長條圖應用程式核心
///
/// 持有唯一一組存活中的 BarSet；只有 RedrawRequested 會替換它
pub struct App<R: Rng = ThreadRng> {
    config: Config,
    generator: BarGenerator<R>,
    bars: BarSet,
    renderer: GridRenderer,
    button: Button,
    window_size: (u32, u32),
    generation: u64,
    dirty: bool,
}

impl App<ThreadRng> {
    pub fn new(config: Config) -> Self {
        Self::with_generator(config, BarGenerator::new())
    }
}

impl<R: Rng> App<R> {
    /// 創建應用程式；第一幀就有長條
    pub fn with_generator(config: Config, mut generator: BarGenerator<R>) -> Self {
        let bars = generator.generate();
        let renderer = GridRenderer::new(&config.chart);
        let window_size = (config.window.width as u32, config.window.height as u32);

        let mut button = Button::new("Redraw", config.window.panel_color);
        button.layout(window_size.0, window_size.1, config.window.panel_height);

        Self {
            config,
            generator,
            bars,
            renderer,
            button,
            window_size,
            generation: 0,
            dirty: true,
        }
    }

    pub fn bars(&self) -> &BarSet {
        &self.bars
    }

    /// 使用者觸發重繪的次數
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn needs_repaint(&self) -> bool {
        self.dirty
    }

    /// 繪圖區：視窗扣除底部按鈕列
    pub fn chart_viewport(&self) -> Viewport {
        let (width, height) = self.window_size;
        Viewport::new(width, height.saturating_sub(self.config.window.panel_height))
    }

    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::RedrawRequested => {
                self.bars = self.generator.generate();
                self.generation += 1;
                self.dirty = true;
                debug!("重新產生長條 #{}: {:?}", self.generation, self.bars.heights());
            }
            AppEvent::ViewportChanged { width, height } => {
                if (width, height) == self.window_size {
                    return;
                }
                self.window_size = (width, height);
                self.button
                    .layout(width, height, self.config.window.panel_height);
                self.dirty = true;
                debug!("視窗尺寸變更: {}x{}", width, height);
            }
        }
    }

    /// 處理滑鼠輸入；按鈕完成點擊時觸發重繪
    pub fn pointer(&mut self, mouse: Option<(f32, f32)>, down: bool) {
        let before: ButtonState = self.button.state();
        if self.button.update(mouse, down) {
            self.handle(AppEvent::RedrawRequested);
        }
        if self.button.state() != before {
            self.dirty = true;
        }
    }

    /// 產生整個畫面的繪圖指令：背景、格線與長條、按鈕列
    pub fn frame(&mut self) -> Vec<DrawCommand> {
        self.dirty = false;

        let mut commands = vec![DrawCommand::Clear {
            color: self.config.chart.background,
        }];
        commands.extend(self.renderer.render(self.chart_viewport(), &self.bars));
        commands.extend(self.button.render());
        commands
    }
}
