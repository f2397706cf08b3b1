//! 活动、奖品与奖励记录

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::AwardType;

/// 活动
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub valid: bool,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Campaign {
    /// 创建一个从当前时间开始、持续 `days` 天的有效活动
    pub fn new(id: i64, code: impl Into<String>, name: impl Into<String>, days: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            code: code.into(),
            name: name.into(),
            valid: true,
            start_time: now,
            end_time: now + Duration::days(days),
        }
    }

    /// 生成奖品上使用的活动引用
    pub fn to_ref(&self) -> CampaignRef {
        CampaignRef {
            id: self.id,
            code: self.code.clone(),
        }
    }
}

/// 奖品对所属活动的反向引用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRef {
    pub id: i64,
    pub code: String,
}

/// 奖品定义
///
/// `value` 为自由文本：优惠券类型下是优惠券的数字 ID 或优惠券编号。
/// 对处理器而言只读。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub id: i64,
    pub campaign: CampaignRef,
    pub award_type: AwardType,
    pub value: String,
}

impl Award {
    pub fn new(
        id: i64,
        campaign: &Campaign,
        award_type: AwardType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id,
            campaign: campaign.to_ref(),
            award_type,
            value: value.into(),
        }
    }

    /// 所属活动 ID
    pub fn campaign_id(&self) -> i64 {
        self.campaign.id
    }
}

/// 用户获奖记录
///
/// `sn` 由调用方预先填入占位值，处理成功后被替换为真实发放的流水号。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub campaign_id: i64,
    pub award_id: i64,
    pub award_type: AwardType,
    pub value: String,
    pub sn: String,
}

impl Reward {
    /// 为奖品创建获奖记录，`placeholder_sn` 为调用方提供的临时流水号
    pub fn for_award(award: &Award, placeholder_sn: impl Into<String>) -> Self {
        Self {
            id: None,
            campaign_id: award.campaign_id(),
            award_id: award.id,
            award_type: award.award_type,
            value: award.value.clone(),
            sn: placeholder_sn.into(),
        }
    }
}
