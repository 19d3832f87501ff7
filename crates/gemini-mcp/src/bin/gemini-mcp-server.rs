//! MCP server exposing Gemini chat and code analysis tools over stdio.
//!
//! Usage: `GEMINI_API_KEY=... gemini-mcp-server`

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gemini_mcp::server::run_main(gemini_mcp::chat_server()).await
}
