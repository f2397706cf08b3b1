//! 奖励处理模块
//!
//! 活动框架发放奖励时，按奖品类型找到支持它的处理器并调用 `process`。
//!
//! ## 模块结构
//!
//! - `RewardProcessor`: 处理器能力契约
//! - `coupon`: 优惠券类型的处理器实现
//! - `registry`: 处理器注册表，按优先级排序并分发
//!
//! ## 使用示例
//!
//! ```ignore
//! use campaign_coupon::processor::{CouponRewardProcessor, ProcessorRegistry};
//! use std::sync::Arc;
//!
//! let mut registry = ProcessorRegistry::new();
//! registry.register(Arc::new(CouponRewardProcessor::with_tracing(coupon_service)));
//!
//! registry.dispatch(&user, &award, &mut reward).await?;
//! ```

mod coupon;
mod registry;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Award, AwardType, Reward};
use crate::user::CampaignUser;

pub use coupon::CouponRewardProcessor;
pub use registry::ProcessorRegistry;

/// 奖励处理器 Trait
///
/// 每种奖品类型由一个处理器负责。注册表根据 `supports` 选出处理器，
/// 多个处理器同时支持同一类型时按 `priority` 从高到低取第一个。
#[async_trait]
pub trait RewardProcessor: Send + Sync {
    /// 是否处理该奖品类型，必须是无副作用的纯判断
    fn supports(&self, award_type: AwardType) -> bool;

    /// 发放奖励
    ///
    /// 成功时可以回写 `reward` 上的字段；失败时不得修改 `reward`，
    /// 错误原样返回给调用方，由上层决定重试或提示。
    async fn process(
        &self,
        user: &dyn CampaignUser,
        award: &Award,
        reward: &mut Reward,
    ) -> Result<()>;

    /// 处理器优先级
    fn priority(&self) -> i32 {
        0
    }

    /// 处理器描述（用于日志）
    fn description(&self) -> &'static str {
        "Generic Reward Processor"
    }
}
