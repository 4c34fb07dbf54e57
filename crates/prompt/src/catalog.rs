//! 提示词目录
//!
//! 启动时固定注册的提示词列表。当前只有一个 `simple` 提示词，
//! 接受两个可选参数 `context` 和 `topic`。

use crate::types::{PromptArgumentSpec, PromptDefinition};

/// 唯一注册的提示词名称
pub const SIMPLE_PROMPT_NAME: &str = "simple";

/// 列出全部提示词定义
pub fn list_prompts() -> Vec<PromptDefinition> {
    vec![PromptDefinition {
        name: SIMPLE_PROMPT_NAME.to_string(),
        description: Some(
            "A simple prompt that can take optional context and topic arguments".to_string(),
        ),
        arguments: vec![
            PromptArgumentSpec {
                name: "context".to_string(),
                description: Some("Additional context to consider".to_string()),
                required: false,
            },
            PromptArgumentSpec {
                name: "topic".to_string(),
                description: Some("Specific topic to focus on".to_string()),
                required: false,
            },
        ],
    }]
}
