//! Live order feed: a thin wrapper around the browser `EventSource` on
//! `/api/orders/stream`.
//!
//! One listener is registered per event name; each message is decoded and
//! handed to the store synchronously, so events reconcile strictly in
//! arrival order. Dropping the wrapper closes the connection and releases
//! the listeners. Reconnection after a dropped connection is whatever the
//! browser's EventSource does natively.

use contracts::domain::orders::{events, OrderStreamEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

use super::store::OrdersStore;

const STREAM_URL: &str = "/api/orders/stream";

pub struct OrderEventStream {
    source: EventSource,
    // Kept alive for the lifetime of the subscription; dropping a Closure
    // invalidates the registered JS callback.
    listeners: Vec<Closure<dyn FnMut(MessageEvent)>>,
}

impl OrderEventStream {
    /// Open the push channel and route its events into `store`.
    pub fn connect(store: OrdersStore) -> Result<Self, String> {
        let source = EventSource::new(STREAM_URL)
            .map_err(|e| format!("Failed to open order stream: {:?}", e))?;

        let mut stream = Self {
            source,
            listeners: Vec::new(),
        };
        for name in [events::NEW_ORDER, events::UPDATE_ORDER, events::DELETE_ORDER] {
            stream.listen(name, store)?;
        }
        log::info!("Order stream connected");
        Ok(stream)
    }

    fn listen(&mut self, event_name: &'static str, store: OrdersStore) -> Result<(), String> {
        let handler = Closure::wrap(Box::new(move |event: MessageEvent| {
            let Some(payload) = event.data().as_string() else {
                return;
            };
            match OrderStreamEvent::parse(event_name, &payload) {
                Some(Ok(parsed)) => store.apply(parsed),
                Some(Err(e)) => {
                    log::error!("Malformed {} payload: {}", event_name, e);
                }
                None => {}
            }
        }) as Box<dyn FnMut(_)>);

        self.source
            .add_event_listener_with_callback(event_name, handler.as_ref().unchecked_ref())
            .map_err(|e| format!("Failed to listen for {}: {:?}", event_name, e))?;
        self.listeners.push(handler);
        Ok(())
    }
}

impl Drop for OrderEventStream {
    fn drop(&mut self) {
        self.source.close();
        log::info!("Order stream closed");
    }
}
