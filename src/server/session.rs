/// WebSocket session handler for one player connection.
///
/// This actor owns a single client's socket. It registers itself with the
/// relay server when the link comes up, forwards parsed client messages in
/// arrival order, serializes server messages back out, and reports the
/// disconnect that tears the session down.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::debug;
use uuid::Uuid;

use super::messages::{ClientWsMessage, RelayEvent, ServerWsMessage};
use super::registry::ConnectionId;
use super::relay::{Connect, Disconnect, Forward, Ready, RelayServer};
use super::ws_error::ws_error_message;

pub struct ClientSession {
    pub id: ConnectionId,
    pub relay_addr: Addr<RelayServer>,
}

impl Actor for ClientSession {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the session starts. Registers the connection with the
    /// relay server, which answers with `Welcome`.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.relay_addr.do_send(Connect {
            id: self.id,
            addr: ctx.address(),
        });
    }

    /// Called when the session stops. The relay notifies the peer (if any)
    /// before dropping this connection's registration.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.relay_addr.do_send(Disconnect { id: self.id });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ClientSession {
    /// Handles incoming WebSocket frames from the client.
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                match serde_json::from_str::<ClientWsMessage>(&text) {
                    Ok(ClientWsMessage::Ready(target)) => match Uuid::parse_str(&target) {
                        Ok(target) => {
                            self.relay_addr.do_send(Ready {
                                id: self.id,
                                target,
                            });
                        }
                        Err(_) => {
                            // Same fate as a target that never connected.
                            debug!("[Session] {} sent unparsable target {:?}", self.id, target);
                        }
                    },
                    Ok(ClientWsMessage::Play(cell)) => {
                        self.relay_addr.do_send(Forward {
                            id: self.id,
                            event: RelayEvent::Play(cell),
                        });
                    }
                    Ok(ClientWsMessage::NewGame) => {
                        self.relay_addr.do_send(Forward {
                            id: self.id,
                            event: RelayEvent::NewGame,
                        });
                    }
                    Ok(ClientWsMessage::Ping) => {
                        // Liveness no-op.
                    }
                    Err(_e) => {
                        // Invalid client message format.
                        ctx.text(ws_error_message(
                            "INVALID_MESSAGE",
                            "Invalid client message",
                            Some(&self.id.to_string()),
                        ));
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(_)) => ctx.stop(),
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for ClientSession {
    type Result = ();

    /// Handles messages sent from the relay server to this session.
    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                // Serialization error: notify client and close connection.
                log::error!("Failed to serialize ServerWsMessage: {}", e);
                if let Ok(text) =
                    serde_json::to_string(&ServerWsMessage::error("Internal server error"))
                {
                    ctx.text(text);
                }
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

/// WebSocket endpoint for player connections.
///
/// The server assigns the connection identifier here; the client learns it
/// from the `Welcome` message and uses it to build invite links.
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let id = Uuid::new_v4();
    ws::start(
        ClientSession {
            id,
            relay_addr: data.relay_addr.clone(),
        },
        &req,
        stream,
    )
}
