//! MCP 服务器处理器
//!
//! 实现 rmcp 的 ServerHandler trait，处理 prompts/list 和 prompts/get 请求。
//! 核心逻辑委托给 promptcast-prompt crate，本模块只负责协议类型转换。

use std::collections::HashMap;

use promptcast_prompt::{catalog, renderer, PromptDefinition, PromptRole};
use rmcp::{
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, JsonObject, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
        ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler,
};
use tracing::debug;

// ============================================================================
// 处理器
// ============================================================================

/// Simple Prompt 服务器处理器
///
/// 无内部状态，每个请求独立处理，可在连接间任意克隆。
#[derive(Debug, Clone, Default)]
pub struct SimplePromptServer;

impl SimplePromptServer {
    pub fn new() -> Self {
        Self
    }
}

impl ServerHandler for SimplePromptServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_prompts().build(),
            server_info: Implementation {
                name: "promptcast".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: Some("Promptcast MCP Server".to_string()),
                website_url: Some("https://github.com/aiclientproxy/promptcast".to_string()),
            },
            instructions: Some(
                "提供 simple 提示词，接受可选的 context 和 topic 参数".to_string(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        let prompts = catalog::list_prompts()
            .into_iter()
            .map(PromptConverter::to_prompt)
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!(name = %request.name, "渲染提示词");

        let arguments = string_arguments(request.arguments);
        let rendered = renderer::render(&request.name, &arguments)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        Ok(GetPromptResult {
            description: rendered.description,
            messages: rendered
                .messages
                .into_iter()
                .map(PromptConverter::to_message)
                .collect(),
        })
    }
}

/// 提取字符串参数，非字符串的 JSON 值忽略（参数 schema 均声明为字符串）
fn string_arguments(arguments: Option<JsonObject>) -> HashMap<String, String> {
    arguments
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(s) => Some((key, s)),
            _ => None,
        })
        .collect()
}

// ============================================================================
// 协议类型转换
// ============================================================================

/// 核心类型到 rmcp 协议类型的转换器
pub struct PromptConverter;

impl PromptConverter {
    /// 转换提示词定义
    pub fn to_prompt(definition: PromptDefinition) -> Prompt {
        let arguments = definition
            .arguments
            .into_iter()
            .map(|arg| PromptArgument {
                name: arg.name,
                title: None,
                description: arg.description,
                required: Some(arg.required),
            })
            .collect();

        Prompt::new(definition.name, definition.description, Some(arguments))
    }

    /// 转换提示词消息
    pub fn to_message(message: promptcast_prompt::PromptMessage) -> PromptMessage {
        let role = Self::to_role(message.role);
        PromptMessage::new_text(role, message.text().to_string())
    }

    /// 转换消息角色
    pub fn to_role(role: PromptRole) -> PromptMessageRole {
        match role {
            PromptRole::User => PromptMessageRole::User,
            PromptRole::Assistant => PromptMessageRole::Assistant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_prompt_keeps_optional_flags() {
        let definition = catalog::list_prompts().remove(0);
        let prompt = PromptConverter::to_prompt(definition);

        assert_eq!(prompt.name, "simple");
        let arguments = prompt.arguments.unwrap();
        assert_eq!(arguments.len(), 2);
        assert!(arguments.iter().all(|a| a.required == Some(false)));
    }

    #[test]
    fn test_to_role_mapping() {
        assert_eq!(
            PromptConverter::to_role(PromptRole::User),
            PromptMessageRole::User
        );
        assert_eq!(
            PromptConverter::to_role(PromptRole::Assistant),
            PromptMessageRole::Assistant
        );
    }

    #[test]
    fn test_string_arguments_filters_non_strings() {
        let mut object = JsonObject::new();
        object.insert("topic".to_string(), serde_json::json!("rust"));
        object.insert("count".to_string(), serde_json::json!(3));

        let arguments = string_arguments(Some(object));
        assert_eq!(arguments.len(), 1);
        assert_eq!(arguments.get("topic").map(String::as_str), Some("rust"));
    }

    #[test]
    fn test_string_arguments_none_is_empty() {
        assert!(string_arguments(None).is_empty());
    }
}
