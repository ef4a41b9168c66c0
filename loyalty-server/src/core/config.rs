use std::time::Duration;

/// 模拟延迟倍率上限
pub const MAX_LATENCY_SCALE: f64 = 100.0;

/// 服务器配置 - 忠诚度演示服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (未设置) | 滚动日志目录 |
/// | SIMULATED_LATENCY_SCALE | 1.0 | 模拟延迟倍率 (0 表示关闭，上限 100) |
/// | SESSION_IDLE_TIMEOUT_SECS | 3600 | 会话空闲回收时间(秒) |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 SIMULATED_LATENCY_SCALE=0 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别 (tracing EnvFilter 语法)
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 滚动日志目录
    pub log_dir: Option<String>,
    /// 模拟延迟倍率
    pub simulated_latency_scale: f64,
    /// 会话空闲超时 (秒)
    pub session_idle_timeout_secs: u64,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            simulated_latency_scale: std::env::var("SIMULATED_LATENCY_SCALE")
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v.min(MAX_LATENCY_SCALE))
                .unwrap_or(1.0),
            session_idle_timeout_secs: std::env::var("SESSION_IDLE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景 (端口 + 延迟倍率)
    pub fn with_overrides(http_port: u16, simulated_latency_scale: f64) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.simulated_latency_scale = simulated_latency_scale;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }

    /// 按倍率缩放一个模拟延迟 (倍率上限 [`MAX_LATENCY_SCALE`])
    pub fn scaled_delay(&self, base_ms: u64) -> Duration {
        let scale = self.simulated_latency_scale.clamp(0.0, MAX_LATENCY_SCALE);
        Duration::try_from_secs_f64(base_ms as f64 * scale / 1000.0).unwrap_or(Duration::ZERO)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_delay() {
        let mut config = Config::with_overrides(0, 0.5);
        assert_eq!(config.scaled_delay(1500), Duration::from_millis(750));

        config.simulated_latency_scale = 0.0;
        assert_eq!(config.scaled_delay(2500), Duration::ZERO);
    }

    #[test]
    fn test_scaled_delay_clamps_scale() {
        let mut config = Config::with_overrides(0, 1e300);
        assert_eq!(config.scaled_delay(1000), Duration::from_secs(100));

        config.simulated_latency_scale = f64::NAN;
        assert_eq!(config.scaled_delay(1000), Duration::ZERO);
    }

    #[test]
    fn test_environment_flags() {
        let mut config = Config::with_overrides(0, 1.0);
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
