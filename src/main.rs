use std::sync::Arc;

use novaxis_contact::config::ContactConfig;
use novaxis_contact::contact::pipeline::ContactPipeline;
use novaxis_contact::delivery::{DeliveryClient, ResendClient};
use novaxis_contact::routes::contact_routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match ContactConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("  export RESEND_API_KEY=re_...");
            std::process::exit(1);
        }
    };

    let ContactConfig {
        resend_api_key,
        recipient,
        from_address,
        bind_port,
        resend_base_url,
    } = config;

    eprintln!("📨 Novaxis contact backend v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Endpoint: http://0.0.0.0:{bind_port}/api/contact");
    eprintln!("   Notifications to: {recipient}");
    eprintln!("   Sending as: {from_address}\n");

    let delivery: Arc<dyn DeliveryClient> =
        Arc::new(ResendClient::new(resend_api_key, resend_base_url));
    let pipeline = Arc::new(ContactPipeline::new(delivery, recipient, from_address));

    let app = contact_routes(pipeline);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{bind_port}")).await?;
    tracing::info!(port = bind_port, "Contact API server started");
    axum::serve(listener, app).await?;

    Ok(())
}
