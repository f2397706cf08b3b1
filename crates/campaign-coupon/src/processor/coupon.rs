//! 优惠券奖励处理器
//!
//! 处理流程：
//! 1. 用奖品的 `value`（优惠券 ID 或编号）查找优惠券
//! 2. 检查优惠券库存，库存不足时不发码
//! 3. 调用优惠券服务给用户发码
//! 4. 券码带流水号时写回 `Reward.sn`

use std::sync::Arc;

use async_trait::async_trait;
use campaign_shared::config::RewardConfig;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use super::RewardProcessor;
use crate::coupon::CouponService;
use crate::error::{CampaignError, Result};
use crate::logging::{RewardLogger, TracingLogger, context_from};
use crate::models::{Award, AwardType, IssuedCode, Reward};
use crate::user::{CampaignUser, user_id_or_unknown};

const SUCCESS_MESSAGE: &str = "Coupon reward sent successfully";
const FAILURE_MESSAGE: &str = "Failed to send coupon reward";

/// 优惠券奖励处理器
///
/// 只处理 `AwardType::Coupon`，不处理名称相近的 `CouponLocal`。
/// 不做重试和幂等控制，同一奖励处理两次会发出两张券码。
pub struct CouponRewardProcessor {
    coupon_service: Arc<dyn CouponService>,
    logger: Arc<dyn RewardLogger>,
    /// 失败日志中是否附带错误的调试信息
    include_trace: bool,
}

impl CouponRewardProcessor {
    pub fn new(coupon_service: Arc<dyn CouponService>, logger: Arc<dyn RewardLogger>) -> Self {
        Self {
            coupon_service,
            logger,
            include_trace: true,
        }
    }

    /// 使用默认通道的 tracing 日志
    pub fn with_tracing(coupon_service: Arc<dyn CouponService>) -> Self {
        Self::new(coupon_service, Arc::new(TracingLogger::default()))
    }

    /// 按配置创建，日志通道和调试信息开关取自配置
    pub fn from_config(coupon_service: Arc<dyn CouponService>, config: &RewardConfig) -> Self {
        Self::new(
            coupon_service,
            Arc::new(TracingLogger::new(&config.log_channel)),
        )
        .with_include_trace(config.include_trace)
    }

    pub fn with_include_trace(mut self, include_trace: bool) -> Self {
        self.include_trace = include_trace;
        self
    }

    /// 查找、校验库存并发码
    async fn issue(&self, user: &dyn CampaignUser, identifier: &str) -> Result<IssuedCode> {
        let coupon = self.coupon_service.detect_coupon(identifier).await?;

        let stock = self.coupon_service.get_coupon_valid_stock(&coupon).await?;
        debug!(coupon_id = coupon.id, stock, "优惠券库存");
        if stock <= 0 {
            return Err(CampaignError::insufficient_stock());
        }

        self.coupon_service
            .send_code(user.user_identifier(), &coupon)
            .await
    }

    fn log_success(&self, user_id: &Value, award: &Award, code_sn: Option<&str>) {
        let context = context_from(json!({
            "coupon_identifier": award.value,
            "user_id": user_id,
            "code_sn": code_sn,
            "campaign_id": award.campaign_id(),
            "award_id": award.id,
        }));
        self.logger.info(SUCCESS_MESSAGE, &context);
    }

    fn log_failure(&self, user_id: &Value, award: &Award, error: &CampaignError) {
        let mut context = context_from(json!({
            "coupon_identifier": award.value,
            "user_id": user_id,
            "campaign_id": award.campaign_id(),
            "award_id": award.id,
            "exception": error.to_string(),
            "error_code": error.code(),
        }));
        if self.include_trace {
            context.insert("trace".to_string(), json!(format!("{error:?}")));
        }
        self.logger.error(FAILURE_MESSAGE, &context);
    }
}

#[async_trait]
impl RewardProcessor for CouponRewardProcessor {
    fn supports(&self, award_type: AwardType) -> bool {
        award_type == AwardType::Coupon
    }

    #[instrument(
        skip(self, user, award, reward),
        fields(
            award_id = award.id,
            campaign_id = award.campaign_id(),
            award_type = "coupon"
        )
    )]
    async fn process(
        &self,
        user: &dyn CampaignUser,
        award: &Award,
        reward: &mut Reward,
    ) -> Result<()> {
        let user_id = user_id_or_unknown(user);

        match self.issue(user, &award.value).await {
            Ok(code) => {
                let code_sn = code.serial();
                // 没有流水号时保留调用方的占位值
                if let Some(sn) = code_sn {
                    reward.sn = sn.to_string();
                }
                self.log_success(&user_id, award, code_sn);
                Ok(())
            }
            Err(e) => {
                self.log_failure(&user_id, award, &e);
                Err(e)
            }
        }
    }

    fn priority(&self) -> i32 {
        0
    }

    fn description(&self) -> &'static str {
        "Coupon Reward Processor - 优惠券奖励发放"
    }
}
