// 隨機長條圖庫
pub mod app;
pub mod bars;
pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod render;
pub mod ui;
pub mod utils;

pub use crate::app::{App, AppEvent};
pub use crate::bars::{Bar, BarGenerator, BarSet, GRID_SIZE};
pub use crate::color::Rgb;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::display::Framebuffer;
pub use crate::error::{Error, Result};
pub use crate::render::{DrawCommand, GridLayout, GridRenderer, Viewport};
