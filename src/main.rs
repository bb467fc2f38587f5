mod analytics;
mod handlers;
mod models;
mod routes;
mod utils;
use axum::serve;
use routes::make_app;
use tokio::net::TcpListener;
use tracing::{error, info};
use utils::config::Config;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let config = Config::init();
    let bind_addr = config.bind_addr.clone();

    let app = match make_app(config).await {
        Ok(app) => app,
        Err(err) => {
            error!("Failed to initialize application: {}", err);
            std::process::exit(1);
        }
    };

    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {}: {}", bind_addr, err);
            std::process::exit(1);
        }
    };
    info!("Listening on http://{}", bind_addr);

    if let Err(err) = serve(listener, app).await {
        error!("Server error: {}", err);
    }
}
