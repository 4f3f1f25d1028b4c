use actix_web::{web, HttpRequest, HttpResponse};
use actix_ws::Message;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;

/// All currently-live viewer connections.
///
/// Connections are registered on upgrade, removed on disconnect, and
/// iterated only at broadcast time. The registry holds no durable
/// subscription state: a viewer that reconnects after a gap recovers
/// by re-fetching the snapshot, never by replaying missed events.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    inner: Arc<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    next_id: AtomicU64,
    senders: RwLock<HashMap<u64, mpsc::UnboundedSender<String>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, tx: mpsc::UnboundedSender<String>) -> u64 {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut senders) = self.inner.senders.write() {
            senders.insert(id, tx);
        }
        id
    }

    pub fn unregister(&self, id: u64) {
        if let Ok(mut senders) = self.inner.senders.write() {
            senders.remove(&id);
        }
    }

    pub fn connection_count(&self) -> usize {
        self.inner.senders.read().map(|s| s.len()).unwrap_or(0)
    }

    /// Fan one attendance change out to every live connection, the
    /// originator of the toggle included. Fire-and-forget: a send to
    /// a connection that is already gone is dropped without retry.
    pub fn broadcast_update(&self, participant_id: i64, date_index: i64, status: u8) {
        let msg = serde_json::json!({
            "type": "UPDATE_ATTENDANCE",
            "payload": {
                "participantId": participant_id.to_string(),
                "dateIndex": date_index,
                "status": status,
            },
        })
        .to_string();
        let senders = match self.inner.senders.read() {
            Ok(s) => s,
            Err(_) => return,
        };
        for sender in senders.values() {
            let _ = sender.send(msg.clone());
        }
    }
}

/// WebSocket upgrade handler for the push channel.
pub async fn ws_connect(
    req: HttpRequest,
    body: web::Payload,
    registry: web::Data<ConnectionRegistry>,
) -> Result<HttpResponse, actix_web::Error> {
    let (response, mut ws_session, mut msg_stream) = actix_ws::handle(&req, body)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let conn_id = registry.register(tx);
    log::debug!("Viewer connected (conn_id={conn_id})");

    let registry = registry.into_inner();
    actix_web::rt::spawn(async move {
        loop {
            tokio::select! {
                Some(msg) = rx.recv() => {
                    if ws_session.text(msg).await.is_err() {
                        break;
                    }
                }
                Some(Ok(msg)) = msg_stream.recv() => {
                    match msg {
                        Message::Ping(bytes) => {
                            if ws_session.pong(&bytes).await.is_err() {
                                break;
                            }
                        }
                        Message::Close(_) => break,
                        Message::Text(_) => {
                            // Toggles arrive over HTTP POST, not the socket
                        }
                        _ => {}
                    }
                }
                else => break,
            }
        }

        registry.unregister(conn_id);
        log::debug!("Viewer disconnected (conn_id={conn_id})");
    });

    Ok(response)
}
