use chrono::Local;
use lazy_static::lazy_static;
use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;

use crate::error::Result;

/// 日誌等級環境變數，例如 BARCHART_LOG=debug
pub const LOG_ENV_VAR: &str = "BARCHART_LOG";

lazy_static! {
    static ref LOGGER: ChartLogger = ChartLogger::from_env();
}

/// 帶時間戳的 stderr 日誌，作為 log crate 的後端
#[derive(Debug)]
pub struct ChartLogger {
    level: LevelFilter,
}

impl ChartLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn from_env() -> Self {
        let level = std::env::var(LOG_ENV_VAR)
            .ok()
            .and_then(|value| parse_level(&value))
            .unwrap_or(LevelFilter::Info);
        Self::new(level)
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn format_record(&self, record: &Record) -> String {
        format!(
            "[{}] [{}] [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for ChartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_record(record);
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// 解析日誌等級（不分大小寫）
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// 安裝全局日誌；重複呼叫會回傳錯誤
pub fn init() -> Result<()> {
    log::set_logger(&*LOGGER)?;
    log::set_max_level(LOGGER.level());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ChartLogger::new(LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_format_record() {
        let logger = ChartLogger::new(LevelFilter::Trace);
        let line = logger.format_record(
            &Record::builder()
                .args(format_args!("重繪 {}", 3))
                .level(Level::Info)
                .target("app")
                .build(),
        );
        assert!(line.ends_with("[INFO] [app] 重繪 3"), "{}", line);
        assert!(line.starts_with('['));
    }
}
