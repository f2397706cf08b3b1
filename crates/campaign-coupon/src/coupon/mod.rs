//! 优惠券服务端口
//!
//! 奖励处理器依赖的外部优惠券服务契约。优惠券查找、库存统计、
//! 发码以及并发下的库存一致性都由服务方负责。
//!
//! - `CouponService`: 服务契约
//! - `InMemoryCouponService`: 基于内存的参考实现，用于测试和本地嵌入

mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Coupon, IssuedCode};

pub use memory::InMemoryCouponService;

/// 优惠券服务接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CouponService: Send + Sync {
    /// 按数字 ID 或优惠券编号查找优惠券
    ///
    /// 找不到时返回 `CampaignError::CouponNotFound`
    async fn detect_coupon(&self, identifier: &str) -> Result<Coupon>;

    /// 查询优惠券当前可发放的库存数量
    async fn get_coupon_valid_stock(&self, coupon: &Coupon) -> Result<i64>;

    /// 为用户发放一张该优惠券的券码
    ///
    /// 服务方负责扣减库存；同一用户重复调用会得到不同的券码。
    async fn send_code(&self, user_identifier: &str, coupon: &Coupon) -> Result<IssuedCode>;
}
