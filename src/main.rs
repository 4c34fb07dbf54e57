//! Promptcast 入口
//!
//! MCP Simple Prompt 服务器，通过命令行在 stdio 与 SSE 两种传输方式间选择。
//! 传输层的连接管理和协议编解码完全由 rmcp 负责。

mod server;

use std::net::SocketAddr;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rmcp::{
    transport::{sse_server::SseServer, stdio},
    ServiceExt,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::server::SimplePromptServer;

/// 传输方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Transport {
    /// 标准输入输出（行流）
    Stdio,
    /// HTTP Server-Sent Events
    Sse,
}

#[derive(Debug, Parser)]
#[command(name = "promptcast", version, about = "MCP Simple Prompt Server")]
struct Cli {
    /// 传输方式
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,

    /// SSE 监听端口
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdio 传输占用标准输出，日志必须写到 stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.transport {
        Transport::Stdio => run_stdio().await,
        Transport::Sse => run_sse(cli.port).await,
    }
}

/// 以 stdio 传输运行，直到对端关闭流
async fn run_stdio() -> Result<()> {
    info!("以 stdio 传输启动 MCP 服务器");

    let service = SimplePromptServer::new().serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}

/// 以 SSE 传输运行，每个连接一个独立的处理器实例，Ctrl-C 退出
async fn run_sse(port: u16) -> Result<()> {
    let bind: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!(%bind, "以 SSE 传输启动 MCP 服务器");

    let ct = SseServer::serve(bind)
        .await?
        .with_service(SimplePromptServer::new);

    tokio::signal::ctrl_c().await?;
    info!("收到退出信号，关闭 SSE 服务器");
    ct.cancel();

    Ok(())
}
