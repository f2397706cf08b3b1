//! test_utils 模块的集成测试

use campaign_shared::test_utils::*;

#[test]
fn test_generated_identifiers_are_unique() {
    assert_ne!(test_coupon_sn(), test_coupon_sn());
    assert_ne!(test_campaign_code(), test_campaign_code());
}

#[test]
fn test_coupon_sn_format() {
    let sn = test_coupon_sn();
    assert!(sn.starts_with("TEST_COUPON_"));
    assert!(!is_placeholder_sn(&sn));
}
