use std::{collections::HashMap, sync::mpsc};

use log::debug;

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum EventType {
    /// `HostEvent` payloads: resize notifications and teardown.
    Host,
    /// `ClampReport` payloads, one per settled pass.
    ClampSettled,
}

pub enum EventBusMessage {
    Publish {
        event_type: EventType,
        data: Vec<u8>,
    },
    Subscribe {
        event_type: EventType,
        response_tx: mpsc::Sender<mpsc::Receiver<Vec<u8>>>,
    },
}

#[derive(Clone, Debug)]
pub struct EventBusHandle {
    tx: mpsc::Sender<EventBusMessage>,
}

impl EventBusHandle {
    pub fn publish(&self, event_type: EventType, data: Vec<u8>) {
        let msg = EventBusMessage::Publish { event_type, data };
        let _ = self.tx.send(msg);
    }

    /// Dropping the returned receiver unsubscribes.
    pub fn subscribe(&self, event_type: EventType) -> Option<mpsc::Receiver<Vec<u8>>> {
        let (response_tx, response_rx) = mpsc::channel();
        let msg = EventBusMessage::Subscribe {
            event_type,
            response_tx,
        };

        if self.tx.send(msg).is_ok() {
            response_rx.recv().ok()
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct EventBus {
    rx: mpsc::Receiver<EventBusMessage>,
    senders: HashMap<EventType, Vec<mpsc::Sender<Vec<u8>>>>,
}

impl EventBus {
    pub fn new() -> (Self, EventBusHandle) {
        let (tx, rx) = mpsc::channel();

        let bus = Self {
            rx,
            senders: HashMap::new(),
        };

        let handle = EventBusHandle { tx };
        (bus, handle)
    }

    fn publish(&mut self, event_type: EventType, data: Vec<u8>) {
        if let Some(senders) = self.senders.get_mut(&event_type) {
            let before = senders.len();
            senders.retain(|sender| sender.send(data.clone()).is_ok());
            if senders.len() < before {
                debug!(
                    "dropped {} closed subscriber(s) of {event_type:?}",
                    before - senders.len()
                );
            }
        }
    }

    /// Serves messages until every handle is dropped.
    pub fn run(mut self) {
        while let Ok(msg) = self.rx.recv() {
            match msg {
                EventBusMessage::Publish { event_type, data } => self.publish(event_type, data),
                EventBusMessage::Subscribe {
                    event_type,
                    response_tx,
                } => {
                    let (tx, rx) = mpsc::channel();
                    self.senders.entry(event_type).or_default().push(tx);
                    let _ = response_tx.send(rx);
                }
            }
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self, event_type: &EventType) -> usize {
        self.senders.get(event_type).map_or(0, Vec::len)
    }
}
