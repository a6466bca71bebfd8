// 使用者介面元件：底部按鈕列與點陣字型

pub mod button;
pub mod glyph;

pub use button::{Button, ButtonState};
