//! 结构化日志端口
//!
//! 处理器不直接绑定日志后端，而是通过 [`RewardLogger`] 输出
//! "级别 + 消息 + 键值上下文" 形式的事件。
//!
//! - `TracingLogger`: 默认实现，转发为 `tracing` 事件
//! - `RecordingLogger`: 内存记录实现，便于宿主和测试断言日志内容

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::Level;

/// 日志上下文（键值对）
pub type LogContext = Map<String, Value>;

/// 默认日志通道名
pub const DEFAULT_LOG_CHANNEL: &str = "campaign_coupon";

/// 将 `json!({...})` 对象转换为日志上下文，非对象值返回空上下文
pub fn context_from(value: Value) -> LogContext {
    match value {
        Value::Object(map) => map,
        _ => LogContext::new(),
    }
}

/// 日志端口
///
/// 调用方不关心返回值，实现不应 panic。
pub trait RewardLogger: Send + Sync {
    fn log(&self, level: Level, message: &str, context: &LogContext);

    fn info(&self, message: &str, context: &LogContext) {
        self.log(Level::INFO, message, context);
    }

    fn error(&self, message: &str, context: &LogContext) {
        self.log(Level::ERROR, message, context);
    }
}

/// 基于 `tracing` 的日志实现
///
/// 事件 target 固定为 `campaign_coupon`，通道名作为 `channel` 字段输出，
/// 上下文序列化为 JSON 放在 `context` 字段中。
#[derive(Debug, Clone)]
pub struct TracingLogger {
    channel: String,
}

impl TracingLogger {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CHANNEL)
    }
}

impl RewardLogger for TracingLogger {
    fn log(&self, level: Level, message: &str, context: &LogContext) {
        let context = Value::Object(context.clone());
        let channel = self.channel.as_str();

        match level {
            Level::ERROR => {
                tracing::error!(target: "campaign_coupon", channel, %context, "{}", message)
            }
            Level::WARN => {
                tracing::warn!(target: "campaign_coupon", channel, %context, "{}", message)
            }
            Level::INFO => {
                tracing::info!(target: "campaign_coupon", channel, %context, "{}", message)
            }
            Level::DEBUG => {
                tracing::debug!(target: "campaign_coupon", channel, %context, "{}", message)
            }
            _ => tracing::trace!(target: "campaign_coupon", channel, %context, "{}", message),
        }
    }
}

/// 一条记录下来的日志
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub context: LogContext,
}

impl LogRecord {
    /// 读取上下文中的字段
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }
}

/// 内存记录日志实现
///
/// 克隆出的实例共享同一份记录。
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回所有记录的快照
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// 返回指定级别的记录
    pub fn records_at(&self, level: Level) -> Vec<LogRecord> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.level == level)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl RewardLogger for RecordingLogger {
    fn log(&self, level: Level, message: &str, context: &LogContext) {
        self.records.lock().push(LogRecord {
            level,
            message: message.to_string(),
            context: context.clone(),
        });
    }
}
