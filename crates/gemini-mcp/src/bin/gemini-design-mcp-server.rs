//! MCP server exposing Gemini-backed UI/UX design tools over stdio.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gemini_mcp::server::run_main(gemini_mcp::design_server()).await
}
