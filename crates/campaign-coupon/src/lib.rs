//! 活动优惠券奖励处理
//!
//! 为活动框架提供优惠券类型（`AwardType::Coupon`）的奖励处理能力：
//! 查找优惠券、检查库存、给用户发码，并把券码流水号记录到获奖记录上。
//!
//! ## 模块结构
//!
//! - `models`: 活动、奖品、获奖记录、优惠券等领域模型
//! - `error`: 错误类型定义
//! - `user`: 用户身份访问
//! - `coupon`: 优惠券服务端口与内存实现
//! - `logging`: 结构化日志端口
//! - `processor`: 奖励处理器契约、优惠券处理器与注册表

pub mod coupon;
pub mod error;
pub mod logging;
pub mod models;
pub mod processor;
pub mod user;

pub use coupon::{CouponService, InMemoryCouponService};
pub use error::{CampaignError, INSUFFICIENT_STOCK_MESSAGE, Result};
pub use logging::{LogContext, LogRecord, RecordingLogger, RewardLogger, TracingLogger};
pub use models::*;
pub use processor::{CouponRewardProcessor, ProcessorRegistry, RewardProcessor};
pub use user::{AnonymousUser, CampaignUser, HasIdentifier, MemberUser, UNKNOWN_USER};
