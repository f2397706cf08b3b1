//! 测试工具模块
//!
//! 提供测试所需的唯一标识生成等辅助函数，保证并行测试之间的数据互不干扰。

use std::sync::atomic::{AtomicI64, Ordering};

use uuid::Uuid;

/// 获奖记录占位流水号前缀
pub const PLACEHOLDER_SN_PREFIX: &str = "TEMP_";

/// 生成进程内唯一的测试 ID
pub fn test_id() -> i64 {
    static COUNTER: AtomicI64 = AtomicI64::new(1);
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// 生成获奖记录的占位流水号（处理器成功后会被覆盖）
pub fn placeholder_sn() -> String {
    format!("{}{}", PLACEHOLDER_SN_PREFIX, Uuid::new_v4().simple())
}

/// 判断流水号是否仍为占位值
pub fn is_placeholder_sn(sn: &str) -> bool {
    sn.starts_with(PLACEHOLDER_SN_PREFIX)
}

/// 生成唯一的测试优惠券编号
pub fn test_coupon_sn() -> String {
    format!("TEST_COUPON_{}", Uuid::new_v4().simple())
}

/// 生成唯一的测试活动编码
pub fn test_campaign_code() -> String {
    format!("TEST_{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_sn() {
        let sn = placeholder_sn();
        assert!(is_placeholder_sn(&sn));
        assert!(!is_placeholder_sn("CPN0001"));
        assert_ne!(placeholder_sn(), sn);
    }

    #[test]
    fn test_test_id_is_increasing() {
        let first = test_id();
        let second = test_id();
        assert!(second > first);
    }
}
