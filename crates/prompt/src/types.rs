//! 提示词类型定义
//!
//! 本模块定义提示词相关的数据类型，包括：
//! - 提示词定义和参数声明
//! - 渲染产物（消息和结果）
//! - 错误类型

use serde::{Deserialize, Serialize};

// ============================================================================
// 提示词定义
// ============================================================================

/// 提示词定义
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptDefinition {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<PromptArgumentSpec>,
}

/// 提示词参数声明
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptArgumentSpec {
    pub name: String,
    pub description: Option<String>,
    pub required: bool,
}

// ============================================================================
// 渲染产物
// ============================================================================

/// 消息角色（封闭枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    User,
    Assistant,
}

/// 消息内容类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PromptContent {
    #[serde(rename = "text")]
    Text { text: String },
}

/// 提示词消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: PromptContent,
}

impl PromptMessage {
    /// 创建 user 角色的文本消息
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: PromptRole::User,
            content: PromptContent::Text { text: text.into() },
        }
    }

    /// 消息的文本内容
    pub fn text(&self) -> &str {
        match &self.content {
            PromptContent::Text { text } => text,
        }
    }
}

/// 提示词渲染结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedPrompt {
    pub description: Option<String>,
    pub messages: Vec<PromptMessage>,
}

// ============================================================================
// 错误类型
// ============================================================================

/// 提示词错误类型
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("提示词不存在: {0}")]
    UnknownPrompt(String),
}
