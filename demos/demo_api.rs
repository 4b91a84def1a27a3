//! Demo HTTP server exposing one REST route per SDK method.
//!
//! ```sh
//! HYPERSWITCH_SECRET_KEY=sk_... HYPERSWITCH_PUBLISHABLE_KEY=pk_... \
//!     cargo run --example demo_api
//! ```

use std::env;
use std::sync::Arc;

use hyperswitch::HyperswitchClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let secret_key = env::var("HYPERSWITCH_SECRET_KEY")?;
    let publishable_key = env::var("HYPERSWITCH_PUBLISHABLE_KEY")?;

    let mut builder = HyperswitchClient::builder(secret_key, publishable_key);
    if let Ok(profile_id) = env::var("HYPERSWITCH_PROFILE_ID") {
        builder = builder.with_default_profile_id(profile_id);
    }
    if let Ok(base_url) = env::var("HYPERSWITCH_BASE_URL") {
        builder = builder.with_base_url(base_url);
    }
    let client = Arc::new(builder.build()?);

    let app = hyperswitch::demo::router(client);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    println!("demo API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
