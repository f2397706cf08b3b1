//! 领域模型定义
//!
//! 这些实体归属于活动框架与优惠券服务，此处仅定义处理器消费或修改到的字段。

mod campaign;
mod coupon;
mod enums;

pub use campaign::{Award, Campaign, CampaignRef, Reward};
pub use coupon::{Coupon, IssuedCode};
pub use enums::AwardType;
