#[tokio::main]
async fn main() {
    if let Err(e) = tour_reviews::start_server().await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
