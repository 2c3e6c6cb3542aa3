//! Hydration Goal Manager (hydrate)
//!
//! An MCP server for daily water intake goals.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use hydrate::build_info;
use hydrate::mcp::HydrateService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays a clean MCP channel
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hydrate=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    tracing::info!("Starting MCP server on stdio");

    let service = HydrateService::new();
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    tracing::info!("MCP server stopped");
    Ok(())
}
