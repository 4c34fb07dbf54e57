//! 提示词渲染器
//!
//! 将参数值代入提示词模板，产出有序的角色消息序列。
//! 渲染是纯函数：相同输入必然产出相同的消息序列。

use std::collections::HashMap;

use crate::catalog::SIMPLE_PROMPT_NAME;
use crate::types::{PromptError, PromptMessage, RenderedPrompt};

/// 渲染结果携带的描述文本
const RESULT_DESCRIPTION: &str = "A simple prompt with optional context and topic arguments";

/// 渲染指定提示词
///
/// 未注册的名称返回 [`PromptError::UnknownPrompt`]；参数缺失不是错误，
/// 用默认文案替代。空字符串参数值按缺失处理。
pub fn render(
    name: &str,
    arguments: &HashMap<String, String>,
) -> Result<RenderedPrompt, PromptError> {
    if name != SIMPLE_PROMPT_NAME {
        return Err(PromptError::UnknownPrompt(name.to_string()));
    }

    Ok(RenderedPrompt {
        description: Some(RESULT_DESCRIPTION.to_string()),
        messages: build_messages(non_empty(arguments, "context"), non_empty(arguments, "topic")),
    })
}

/// 取参数值，空字符串视为缺失；未声明的键自然被忽略
fn non_empty<'a>(arguments: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    arguments
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// 组装消息序列，context 消息（若有）固定在前
fn build_messages(context: Option<&str>, topic: Option<&str>) -> Vec<PromptMessage> {
    let mut messages = Vec::with_capacity(2);

    if let Some(context) = context {
        messages.push(PromptMessage::user_text(format!(
            "Here is some relevant context: {context}"
        )));
    }

    let prompt = match topic {
        Some(topic) => format!("Please help me with the following topic: {topic}"),
        None => "Please help me with whatever questions I may have.".to_string(),
    };
    messages.push(PromptMessage::user_text(prompt));

    messages
}
