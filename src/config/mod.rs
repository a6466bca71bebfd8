pub mod chart;
pub mod window;

pub use chart::ChartConfig;
pub use window::WindowConfig;

/// 全局配置結構
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub chart: ChartConfig,
    pub window: WindowConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            chart: ChartConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

/// 配置構建器
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::new(),
        }
    }

    pub fn chart_config(mut self, config: ChartConfig) -> Self {
        self.config.chart = config;
        self
    }

    pub fn window_config(mut self, config: WindowConfig) -> Self {
        self.config.window = config;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_sections() {
        let chart = ChartConfig {
            margin: 10,
            ..ChartConfig::default()
        };
        let config = ConfigBuilder::new().chart_config(chart).build();

        assert_eq!(config.chart.margin, 10);
        assert_eq!(config.window.width, 520);
    }
}
