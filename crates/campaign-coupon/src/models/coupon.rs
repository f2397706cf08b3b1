//! 优惠券与已发放券码
//!
//! 由外部优惠券服务定义和持有，处理器只读取其中的字段。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 优惠券
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: i64,
    /// 优惠券编号，可替代数字 ID 用于查找
    pub sn: String,
    pub name: String,
    pub valid: bool,
    /// 领取后的有效天数，不填表示不过期
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_day: Option<u32>,
}

/// 发放给用户的券码
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedCode {
    pub id: i64,
    pub coupon_id: i64,
    /// 券码流水号，外部服务可能不返回
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sn: Option<String>,
    /// 持有人标识，未领取时为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gathered_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl IssuedCode {
    /// 非空的流水号
    pub fn serial(&self) -> Option<&str> {
        self.sn.as_deref().filter(|sn| !sn.is_empty())
    }

    /// 是否尚未被领取
    pub fn is_unassigned(&self) -> bool {
        self.owner.is_none()
    }
}
