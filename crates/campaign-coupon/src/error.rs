//! 活动奖励错误类型
//!
//! 定义优惠券奖励处理过程中的业务错误和协作方错误

use thiserror::Error;

use crate::models::AwardType;

/// 库存不足时使用的固定错误信息
pub const INSUFFICIENT_STOCK_MESSAGE: &str = "coupon stock insufficient";

/// 活动奖励错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CampaignError {
    // === 优惠券相关错误 ===
    #[error("优惠券不存在: {identifier}")]
    CouponNotFound { identifier: String },

    /// 库存不足，展示内容即为携带的信息本身
    #[error("{0}")]
    InsufficientStock(String),

    #[error("优惠券码已发完: coupon_id={coupon_id}")]
    CouponCodeExhausted { coupon_id: i64 },

    #[error("优惠券服务错误: {message}")]
    CouponService { message: String },

    // === 分发相关错误 ===
    #[error("没有可处理该奖励类型的处理器: {0}")]
    UnsupportedAwardType(AwardType),

    // === 通用错误 ===
    #[error("参数校验失败: {0}")]
    Validation(String),
}

/// 活动奖励 Result 类型别名
pub type Result<T> = std::result::Result<T, CampaignError>;

impl CampaignError {
    /// 构造使用固定信息的库存不足错误
    pub fn insufficient_stock() -> Self {
        Self::InsufficientStock(INSUFFICIENT_STOCK_MESSAGE.to_string())
    }

    /// 检查是否为业务错误（非系统错误）
    pub fn is_business_error(&self) -> bool {
        !matches!(self, Self::CouponService { .. })
    }

    /// 获取错误码（用于日志和上层响应）
    pub fn code(&self) -> &'static str {
        match self {
            Self::CouponNotFound { .. } => "COUPON_NOT_FOUND",
            Self::InsufficientStock(_) => "INSUFFICIENT_STOCK",
            Self::CouponCodeExhausted { .. } => "COUPON_CODE_EXHAUSTED",
            Self::CouponService { .. } => "COUPON_SERVICE_ERROR",
            Self::UnsupportedAwardType(_) => "UNSUPPORTED_AWARD_TYPE",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_message() {
        let err = CampaignError::insufficient_stock();
        assert_eq!(err.to_string(), "coupon stock insufficient");
        assert_eq!(err.code(), "INSUFFICIENT_STOCK");
    }

    #[test]
    fn test_error_is_business_error() {
        assert!(
            CampaignError::CouponNotFound {
                identifier: "x".to_string()
            }
            .is_business_error()
        );
        assert!(CampaignError::insufficient_stock().is_business_error());
        assert!(
            !CampaignError::CouponService {
                message: "timeout".to_string()
            }
            .is_business_error()
        );
        assert!(CampaignError::Validation("expire_day".to_string()).is_business_error());
    }

    #[test]
    fn test_error_display() {
        let err = CampaignError::CouponNotFound {
            identifier: "INVALID_COUPON_ID".to_string(),
        };
        assert!(err.to_string().contains("INVALID_COUPON_ID"));

        let err = CampaignError::UnsupportedAwardType(AwardType::Credit);
        assert!(err.to_string().contains("credit"));
    }

    #[test]
    fn test_error_code() {
        assert_eq!(
            CampaignError::CouponCodeExhausted { coupon_id: 1 }.code(),
            "COUPON_CODE_EXHAUSTED"
        );
        assert_eq!(
            CampaignError::UnsupportedAwardType(AwardType::CouponLocal).code(),
            "UNSUPPORTED_AWARD_TYPE"
        );
    }
}
