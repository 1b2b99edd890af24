use std::sync::Arc;

use property_assistant::assistant::AssistantClient;
use property_assistant::config::AppConfig;
use property_assistant::handlers::AppState;
use property_assistant::logging::init_tracing;
use property_assistant::lookup::LookupClient;
use property_assistant::routes::configure_routes;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing();

    if !config.is_workspace_configured() {
        warn!("WORKSPACE_ID is not set; every message will get the setup instructions");
    }

    let assistant = match AssistantClient::new(&config.assistant) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create assistant client");
            std::process::exit(1);
        }
    };
    let lookup = match LookupClient::new(&config.lookup) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create lookup client");
            std::process::exit(1);
        }
    };

    let addr = config.socket_addr();
    let state = AppState::new(config, Arc::new(assistant), Arc::new(lookup));
    let routes = configure_routes(state);

    info!("Starting server on http://{}", addr);
    warp::serve(routes).run(addr).await;
}
