//! 用户身份访问
//!
//! 活动框架中的用户只保证提供登录标识；数字 ID 是可选能力，
//! 通过 [`HasIdentifier`] 暴露，缺失时日志中记为 `"unknown"`。

use serde_json::Value;

/// 用户 ID 缺失时的占位值
pub const UNKNOWN_USER: &str = "unknown";

/// 可提供用户 ID 的能力
///
/// ID 以 JSON 值返回，数字 ID 在日志上下文中保持数字类型。
pub trait HasIdentifier {
    fn id(&self) -> Value;
}

/// 活动框架中的用户
pub trait CampaignUser: Send + Sync {
    /// 登录标识（用户名、邮箱等），总是存在
    fn user_identifier(&self) -> &str;

    /// 若该用户能提供 ID，返回对应能力
    fn as_identified(&self) -> Option<&dyn HasIdentifier> {
        None
    }
}

/// 尽力获取用户 ID，缺失时返回 `"unknown"`
pub fn user_id_or_unknown(user: &dyn CampaignUser) -> Value {
    user.as_identified()
        .map(|identified| identified.id())
        .unwrap_or_else(|| Value::from(UNKNOWN_USER))
}

/// 带数字 ID 的普通用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberUser {
    pub id: i64,
    pub username: String,
}

impl MemberUser {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

impl HasIdentifier for MemberUser {
    fn id(&self) -> Value {
        Value::from(self.id)
    }
}

impl CampaignUser for MemberUser {
    fn user_identifier(&self) -> &str {
        &self.username
    }

    fn as_identified(&self) -> Option<&dyn HasIdentifier> {
        Some(self)
    }
}

/// 只有登录标识、没有 ID 的用户（如第三方登录的临时身份）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymousUser {
    pub identifier: String,
}

impl AnonymousUser {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl CampaignUser for AnonymousUser {
    fn user_identifier(&self) -> &str {
        &self.identifier
    }
}
