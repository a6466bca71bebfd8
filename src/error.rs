use thiserror::Error;

/// 長條圖程式的錯誤類型
///
/// 核心邏輯（亂數產生與座標轉換）不會失敗，錯誤只來自視窗環境與日誌初始化
#[derive(Error, Debug)]
pub enum Error {
    /// 視窗建立或更新失敗
    #[error("視窗錯誤: {0}")]
    Window(#[from] minifb::Error),
    /// 日誌已初始化過
    #[error("日誌初始化失敗: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
