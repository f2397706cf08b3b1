//! 活动奖励枚举类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

/// 奖品类型
///
/// 活动框架中可发放的奖品种类，每种类型由对应的奖励处理器负责发放
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AwardType {
    /// 积分
    Credit,
    /// 优惠券 - 由外部优惠券服务发码
    Coupon,
    /// 本地优惠券 - 名称相近但由其他处理器负责
    CouponLocal,
    /// SPU 购买资格
    SpuQualification,
    /// SKU 购买资格
    SkuQualification,
}

impl AwardType {
    /// 所有奖品类型
    pub const ALL: [AwardType; 5] = [
        Self::Credit,
        Self::Coupon,
        Self::CouponLocal,
        Self::SpuQualification,
        Self::SkuQualification,
    ];

    /// 返回奖品类型的标签
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Coupon => "coupon",
            Self::CouponLocal => "coupon_local",
            Self::SpuQualification => "spu_qualification",
            Self::SkuQualification => "sku_qualification",
        }
    }
}

impl fmt::Display for AwardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_type_labels() {
        assert_eq!(AwardType::Coupon.as_str(), "coupon");
        assert_eq!(AwardType::CouponLocal.to_string(), "coupon_local");
    }

    #[test]
    fn test_award_type_serialization() {
        let json = serde_json::to_string(&AwardType::SpuQualification).unwrap();
        assert_eq!(json, "\"SPU_QUALIFICATION\"");

        let parsed: AwardType = serde_json::from_str("\"COUPON_LOCAL\"").unwrap();
        assert_eq!(parsed, AwardType::CouponLocal);
    }
}
