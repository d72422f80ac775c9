//! HTTP and WebSocket routing configuration.
//!
//! Defines the WebSocket endpoint every player connects through, and the
//! production-mode static file service with its SPA fallback.

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::web;
use std::path::Path;

use crate::config::server::STATIC_DIR;
use crate::server::session::ws_connect;

/// Configure the application's WebSocket route.
///
/// The route is handled by a per-connection actor, which manages the
/// connection lifecycle and forwards protocol messages to the relay server.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ws").to(ws_connect));
}

/// Configure static asset serving for production mode.
///
/// Serves the client build directory and answers any unmatched path with
/// `index.html`, so invite links like `/join/:<id>` load the client, which
/// then reads the target identifier from the path.
pub fn static_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        Files::new("/", STATIC_DIR)
            .index_file("index.html")
            .default_handler(fn_service(|req: ServiceRequest| async {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(Path::new(STATIC_DIR).join("index.html")).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            })),
    );
}
