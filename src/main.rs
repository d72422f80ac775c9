//! Main entry point for the backend server.
//!
//! Initializes the actor system, configures application state, and launches the HTTP server
//! with the WebSocket endpoint every player connection goes through.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;

use tictac_relay::config::server::ServerConfig;
use tictac_relay::server;
use tictac_relay::server::relay::RelayServer;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    let server_config = ServerConfig::from_env();

    // Start the RelayServer actor (pairing, event relay, teardown).
    let relay_addr = RelayServer::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(relay_addr));

    info!(
        "Listening on {}:{} (static serving: {})",
        server_config.bind_addr, server_config.port, server_config.serve_static
    );

    // Start the HTTP server with the WebSocket endpoint, plus the client
    // build with its SPA fallback in production mode.
    let serve_static = server_config.serve_static;
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*")),
            )
            .app_data(state.clone())
            .configure(|cfg| {
                server::router::config(cfg);
                if serve_static {
                    server::router::static_config(cfg);
                }
            })
    })
    .bind((server_config.bind_addr.as_str(), server_config.port))?
    .run()
    .await
}
