//! Promptcast Prompt Crate
//!
//! 提示词核心模块，提供提示词目录与渲染逻辑。
//! 不依赖任何传输层，渲染是纯函数，可独立进行单元测试。

pub mod catalog;
pub mod renderer;
pub mod types;

pub use catalog::{list_prompts, SIMPLE_PROMPT_NAME};
pub use renderer::render;
pub use types::{
    PromptArgumentSpec, PromptContent, PromptDefinition, PromptError, PromptMessage, PromptRole,
    RenderedPrompt,
};
