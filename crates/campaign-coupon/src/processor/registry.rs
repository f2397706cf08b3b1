//! 处理器注册表
//!
//! 管理所有 RewardProcessor 实例，按优先级从高到低排列，
//! 同优先级保持注册顺序。分发时取第一个 `supports` 为真的处理器。

use std::sync::Arc;

use tracing::{debug, info};

use super::{CouponRewardProcessor, RewardProcessor};
use crate::coupon::CouponService;
use crate::error::{CampaignError, Result};
use crate::logging::RewardLogger;
use crate::models::{Award, AwardType, Reward};
use crate::user::CampaignUser;

/// 奖励处理器注册表
#[derive(Default)]
pub struct ProcessorRegistry {
    processors: Vec<Arc<dyn RewardProcessor>>,
}

impl ProcessorRegistry {
    /// 创建空的注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个处理器
    ///
    /// 插入到第一个优先级更低的处理器之前，同优先级排在已注册者之后。
    pub fn register(&mut self, processor: Arc<dyn RewardProcessor>) -> &mut Self {
        let priority = processor.priority();
        debug!(
            priority,
            description = processor.description(),
            "注册奖励处理器"
        );

        let position = self
            .processors
            .iter()
            .position(|existing| existing.priority() < priority)
            .unwrap_or(self.processors.len());
        self.processors.insert(position, processor);
        self
    }

    /// 查找支持该奖品类型的处理器
    pub fn find(&self, award_type: AwardType) -> Option<Arc<dyn RewardProcessor>> {
        self.processors
            .iter()
            .find(|processor| processor.supports(award_type))
            .cloned()
    }

    /// 按奖品类型分发给对应处理器
    pub async fn dispatch(
        &self,
        user: &dyn CampaignUser,
        award: &Award,
        reward: &mut Reward,
    ) -> Result<()> {
        let processor = self
            .find(award.award_type)
            .ok_or(CampaignError::UnsupportedAwardType(award.award_type))?;

        debug!(
            award_id = award.id,
            award_type = %award.award_type,
            processor = processor.description(),
            "分发奖励"
        );

        processor.process(user, award, reward).await
    }

    /// 是否有处理器支持该奖品类型
    pub fn contains(&self, award_type: AwardType) -> bool {
        self.find(award_type).is_some()
    }

    /// 已有处理器支持的奖品类型
    pub fn supported_types(&self) -> Vec<AwardType> {
        AwardType::ALL
            .into_iter()
            .filter(|award_type| self.contains(*award_type))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// 创建包含优惠券处理器的注册表
    pub fn with_coupon(
        coupon_service: Arc<dyn CouponService>,
        logger: Arc<dyn RewardLogger>,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CouponRewardProcessor::new(coupon_service, logger)));

        info!(
            processor_count = registry.len(),
            types = ?registry.supported_types(),
            "奖励处理器初始化完成"
        );

        registry
    }
}
