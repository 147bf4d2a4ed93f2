//! WebSocket transport for the chat/roster signaling channel.

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use gloo_net::websocket::{futures::WebSocket, Message};
use shared::SignalMessage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

type WsSink = SplitSink<WebSocket, Message>;

/// Write half of the signaling socket, shared so callbacks can send
/// without holding the read half.
pub type SignalSender = Rc<RefCell<Option<WsSink>>>;

/// Events surfaced from the transport task
pub enum SignalEvent {
    Open(WsSink),
    Incoming(SignalMessage),
    Closed(String),
}

/// Open the signaling channel and pump incoming frames to `on_event`.
/// Returns immediately; the read loop runs on a spawned task.
pub fn connect_signaling(url: &str, on_event: Callback<SignalEvent>) {
    let url = url.to_string();
    spawn_local(async move {
        match WebSocket::open(&url) {
            Ok(ws) => {
                let (sender, mut receiver) = ws.split();
                on_event.emit(SignalEvent::Open(sender));

                while let Some(frame) = receiver.next().await {
                    match frame {
                        Ok(Message::Text(text)) => {
                            match serde_json::from_str::<SignalMessage>(&text) {
                                Ok(msg) => on_event.emit(SignalEvent::Incoming(msg)),
                                Err(e) => log::warn!("Skipping unparseable signal frame: {}", e),
                            }
                        }
                        Err(e) => {
                            log::error!("Signaling socket error: {:?}", e);
                            on_event.emit(SignalEvent::Closed(format!("{:?}", e)));
                            break;
                        }
                        _ => {}
                    }
                }
            }
            Err(e) => {
                log::error!("Failed to open signaling socket: {:?}", e);
                on_event.emit(SignalEvent::Closed(format!("{:?}", e)));
            }
        }
    });
}

/// Serialize and send one envelope over the shared write half.
pub fn send_signal(sender: &SignalSender, msg: SignalMessage) {
    let sender_rc = sender.clone();
    spawn_local(async move {
        if let Ok(json) = serde_json::to_string(&msg) {
            let taken = sender_rc.borrow_mut().take();
            if let Some(mut sink) = taken {
                let _ = sink.send(Message::Text(json)).await;
                *sender_rc.borrow_mut() = Some(sink);
            }
        }
    });
}
