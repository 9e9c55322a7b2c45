use allzone_backend::app::app::App;
use allzone_backend::util::logger::Logger;
use dotenv::dotenv;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    // Console + rolling-file logging; guards must outlive the server
    let _logger = Logger::new().expect("Failed to initialize logging");

    info!("🚀 Starting All Zone Backend Application");

    // Load environment variables from .env file
    match dotenv() {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    // Create and start the App
    let app = App::new();
    app.start().await;
}
