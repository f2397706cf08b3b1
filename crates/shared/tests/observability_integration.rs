//! 可观测性模块集成测试
//!
//! 全局订阅器每个进程只能初始化一次，因此放在独立的测试二进制中。

use campaign_shared::config::AppConfig;
use campaign_shared::observability::{self, ObservabilityConfig};

#[test]
fn test_init_once_then_rejects_second_init() {
    let app_config = AppConfig::default();
    let config = ObservabilityConfig::from_app_config(&app_config);

    let guard = observability::init(&config).expect("首次初始化应成功");
    assert_eq!(guard.service_name(), "campaign-coupon");

    tracing::info!(target: "campaign_coupon", "订阅器已就绪");

    let second = observability::init(&ObservabilityConfig::from_env("other-service"));
    assert!(second.is_err(), "重复初始化应返回错误");
}

#[test]
fn test_env_filter_falls_back_on_invalid_level() {
    let config = ObservabilityConfig {
        log_level: "not a [valid filter".to_string(),
        ..Default::default()
    };

    // 非法级别时回退到 info，不应 panic
    let _filter = observability::tracing::env_filter(&config);
}
