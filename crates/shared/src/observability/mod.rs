//! 统一可观测性模块
//!
//! 提供日志的统一初始化。所有使用方通过单一入口配置 tracing，
//! 确保一致的日志格式和过滤规则。

pub mod tracing;

use ::tracing::info;
use anyhow::Result;
use serde::Deserialize;

use crate::config::AppConfig;

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// 服务名称，用于标识日志来源
    pub service_name: String,

    /// 日志级别（如 "info", "debug"）
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 是否启用 JSON 格式日志
    #[serde(default)]
    pub json_logs: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown-service".to_string(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl ObservabilityConfig {
    /// 从环境变量加载配置
    pub fn from_env(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| default_log_level()),
            json_logs: std::env::var("JSON_LOGS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// 从应用配置派生
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            service_name: config.service_name.clone(),
            log_level: config.log.log_level.clone(),
            json_logs: config.log.is_json(),
        }
    }
}

/// 可观测性资源守卫
///
/// 持有日志相关资源的生命周期，drop 时输出关闭日志。
pub struct ObservabilityGuard {
    service_name: String,
}

impl ObservabilityGuard {
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl Drop for ObservabilityGuard {
    fn drop(&mut self) {
        info!(service = %self.service_name, "Shutting down observability...");
    }
}

/// 统一初始化可观测性
///
/// 全局 subscriber 只能设置一次，重复调用返回错误。
///
/// # Example
///
/// ```ignore
/// use campaign_shared::config::AppConfig;
/// use campaign_shared::observability::{init, ObservabilityConfig};
///
/// let app_config = AppConfig::load("campaign-coupon")?;
/// let _guard = init(&ObservabilityConfig::from_app_config(&app_config))?;
/// ```
pub fn init(config: &ObservabilityConfig) -> Result<ObservabilityGuard> {
    tracing::init(config)?;

    info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Observability initialized"
    );

    Ok(ObservabilityGuard {
        service_name: config.service_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogConfig;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_from_app_config() {
        let app_config = AppConfig {
            service_name: "coupon-worker".to_string(),
            log: LogConfig {
                log_level: "debug".to_string(),
                log_format: "JSON".to_string(),
            },
            ..Default::default()
        };

        let config = ObservabilityConfig::from_app_config(&app_config);
        assert_eq!(config.service_name, "coupon-worker");
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);
    }
}
