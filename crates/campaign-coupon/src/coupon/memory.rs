//! 内存优惠券服务
//!
//! 使用 DashMap 保存优惠券和券码，适用于测试和开发环境。
//! 库存即优惠券下尚未被领取的券码数量，需先通过 `create_one_code` 预生成。

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;

use super::CouponService;
use crate::error::{CampaignError, Result};
use crate::models::{Coupon, IssuedCode};

/// 内存优惠券服务
///
/// 克隆出的实例共享同一份数据。
#[derive(Debug, Clone, Default)]
pub struct InMemoryCouponService {
    coupons: Arc<DashMap<i64, Coupon>>,
    /// coupon_id -> 该优惠券下的券码（按生成顺序）
    codes: Arc<DashMap<i64, Vec<IssuedCode>>>,
    coupon_seq: Arc<AtomicI64>,
    code_seq: Arc<AtomicI64>,
}

impl InMemoryCouponService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建优惠券
    pub fn create_coupon(
        &self,
        name: impl Into<String>,
        sn: impl Into<String>,
        valid: bool,
        expire_day: Option<u32>,
    ) -> Coupon {
        let coupon = Coupon {
            id: self.coupon_seq.fetch_add(1, Ordering::SeqCst) + 1,
            sn: sn.into(),
            name: name.into(),
            valid,
            expire_day,
        };
        self.coupons.insert(coupon.id, coupon.clone());
        self.codes.entry(coupon.id).or_default();

        debug!(coupon_id = coupon.id, coupon_sn = %coupon.sn, "创建优惠券");
        coupon
    }

    /// 为优惠券预生成一张未领取的券码（库存 +1）
    pub fn create_one_code(&self, coupon: &Coupon) -> Result<IssuedCode> {
        if !self.coupons.contains_key(&coupon.id) {
            return Err(CampaignError::CouponNotFound {
                identifier: coupon.id.to_string(),
            });
        }

        let code = IssuedCode {
            id: self.code_seq.fetch_add(1, Ordering::SeqCst) + 1,
            coupon_id: coupon.id,
            sn: Some(generate_code_sn()),
            owner: None,
            gathered_at: None,
            expires_at: None,
        };
        self.codes.entry(coupon.id).or_default().push(code.clone());

        Ok(code)
    }

    /// 停用优惠券，停用后查找不到
    pub fn disable_coupon(&self, coupon_id: i64) {
        if let Some(mut coupon) = self.coupons.get_mut(&coupon_id) {
            coupon.valid = false;
        }
    }

    /// 列出用户已领取的券码
    pub fn codes_of(&self, user_identifier: &str) -> Vec<IssuedCode> {
        let mut owned: Vec<IssuedCode> = self
            .codes
            .iter()
            .flat_map(|entry| {
                entry
                    .value()
                    .iter()
                    .filter(|code| code.owner.as_deref() == Some(user_identifier))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect();
        owned.sort_by_key(|code| code.id);
        owned
    }

    fn find_valid(&self, identifier: &str) -> Option<Coupon> {
        if let Ok(id) = identifier.parse::<i64>()
            && let Some(coupon) = self.coupons.get(&id)
            && coupon.valid
        {
            return Some(coupon.clone());
        }

        self.coupons
            .iter()
            .find(|entry| entry.valid && entry.sn == identifier)
            .map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl CouponService for InMemoryCouponService {
    async fn detect_coupon(&self, identifier: &str) -> Result<Coupon> {
        self.find_valid(identifier)
            .ok_or_else(|| CampaignError::CouponNotFound {
                identifier: identifier.to_string(),
            })
    }

    async fn get_coupon_valid_stock(&self, coupon: &Coupon) -> Result<i64> {
        let codes = self
            .codes
            .get(&coupon.id)
            .ok_or_else(|| CampaignError::CouponNotFound {
                identifier: coupon.id.to_string(),
            })?;

        Ok(codes.iter().filter(|code| code.is_unassigned()).count() as i64)
    }

    async fn send_code(&self, user_identifier: &str, coupon: &Coupon) -> Result<IssuedCode> {
        let mut codes = self
            .codes
            .get_mut(&coupon.id)
            .ok_or_else(|| CampaignError::CouponNotFound {
                identifier: coupon.id.to_string(),
            })?;

        let code = codes
            .iter_mut()
            .find(|code| code.is_unassigned())
            .ok_or(CampaignError::CouponCodeExhausted {
                coupon_id: coupon.id,
            })?;

        let now = Utc::now();
        let expires_at = match coupon.expire_day {
            Some(days) => Some(expiry_after(now, days)?),
            None => None,
        };

        code.owner = Some(user_identifier.to_string());
        code.gathered_at = Some(now);
        code.expires_at = expires_at;

        info!(
            coupon_id = coupon.id,
            code_id = code.id,
            user = %user_identifier,
            "券码已发放"
        );

        Ok(code.clone())
    }
}

/// 领取时间加上有效天数，超出可表示范围时返回校验错误
fn expiry_after(gathered_at: DateTime<Utc>, days: u32) -> Result<DateTime<Utc>> {
    Duration::try_days(i64::from(days))
        .and_then(|delta| gathered_at.checked_add_signed(delta))
        .ok_or_else(|| CampaignError::Validation(format!("优惠券有效天数超出范围: {days}")))
}

fn generate_code_sn() -> String {
    let raw = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("CPN{}", &raw[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_coupon(stock: usize) -> (InMemoryCouponService, Coupon) {
        let service = InMemoryCouponService::new();
        let coupon = service.create_coupon("满100减10", "TEST_COUPON_001", true, Some(30));
        for _ in 0..stock {
            service.create_one_code(&coupon).unwrap();
        }
        (service, coupon)
    }

    #[tokio::test]
    async fn test_detect_by_id_and_sn() {
        let (service, coupon) = service_with_coupon(0);

        let by_id = service.detect_coupon(&coupon.id.to_string()).await.unwrap();
        let by_sn = service.detect_coupon("TEST_COUPON_001").await.unwrap();

        assert_eq!(by_id, coupon);
        assert_eq!(by_sn, coupon);
    }

    #[tokio::test]
    async fn test_detect_numeric_sn_falls_back_to_sn() {
        let service = InMemoryCouponService::new();
        let coupon = service.create_coupon("数字编号券", "20240001", true, None);

        let found = service.detect_coupon("20240001").await.unwrap();
        assert_eq!(found.id, coupon.id);
    }

    #[tokio::test]
    async fn test_detect_not_found() {
        let (service, _) = service_with_coupon(0);

        let err = service.detect_coupon("INVALID_COUPON_ID").await.unwrap_err();
        assert_eq!(
            err,
            CampaignError::CouponNotFound {
                identifier: "INVALID_COUPON_ID".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_detect_disabled_coupon_is_not_found() {
        let (service, coupon) = service_with_coupon(1);
        service.disable_coupon(coupon.id);

        let result = service.detect_coupon(&coupon.id.to_string()).await;
        assert!(matches!(result, Err(CampaignError::CouponNotFound { .. })));
    }

    #[tokio::test]
    async fn test_stock_counts_unassigned_codes() {
        let (service, coupon) = service_with_coupon(2);
        assert_eq!(service.get_coupon_valid_stock(&coupon).await.unwrap(), 2);

        service.send_code("alice", &coupon).await.unwrap();
        assert_eq!(service.get_coupon_valid_stock(&coupon).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_send_code_assigns_owner_and_expiry() {
        let (service, coupon) = service_with_coupon(1);

        let code = service.send_code("alice", &coupon).await.unwrap();

        assert_eq!(code.owner.as_deref(), Some("alice"));
        assert!(code.serial().unwrap().starts_with("CPN"));
        let gathered = code.gathered_at.unwrap();
        assert_eq!(code.expires_at.unwrap() - gathered, Duration::days(30));
        assert_eq!(service.codes_of("alice"), vec![code]);
    }

    #[tokio::test]
    async fn test_send_code_exhausted() {
        let (service, coupon) = service_with_coupon(1);
        service.send_code("alice", &coupon).await.unwrap();

        let err = service.send_code("bob", &coupon).await.unwrap_err();
        assert_eq!(
            err,
            CampaignError::CouponCodeExhausted {
                coupon_id: coupon.id
            }
        );
    }

    #[tokio::test]
    async fn test_send_code_expiry_overflow_leaves_code_unassigned() {
        let service = InMemoryCouponService::new();
        let coupon = service.create_coupon("长期券", "LONG", true, Some(u32::MAX));
        service.create_one_code(&coupon).unwrap();

        let err = service.send_code("alice", &coupon).await.unwrap_err();

        assert!(matches!(err, CampaignError::Validation(_)));
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(service.codes_of("alice").is_empty());
        assert_eq!(service.get_coupon_valid_stock(&coupon).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_send_code_without_expire_day() {
        let service = InMemoryCouponService::new();
        let coupon = service.create_coupon("不过期券", "FOREVER", true, None);
        service.create_one_code(&coupon).unwrap();

        let code = service.send_code("alice", &coupon).await.unwrap();

        assert!(code.gathered_at.is_some());
        assert!(code.expires_at.is_none());
    }

    #[test]
    fn test_create_one_code_unknown_coupon() {
        let service = InMemoryCouponService::new();
        let foreign = Coupon {
            id: 99,
            sn: "FOREIGN".to_string(),
            name: "外部券".to_string(),
            valid: true,
            expire_day: None,
        };

        assert!(service.create_one_code(&foreign).is_err());
    }
}
