use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

use bincode::config;
use log::{debug, error, info, warn};

use crate::{
    event_bus::{EventBusHandle, EventType},
    models::viewport::{HostEvent, Viewport},
};

use super::runnable::Runnable;

/// Current terminal size, if stdout is a terminal.
pub fn current_viewport() -> Option<Viewport> {
    crossterm::terminal::size()
        .ok()
        .map(|(columns, rows)| Viewport::new(columns, rows))
}

/// Publishes a `HostEvent::Resized` whenever the terminal size changes, and
/// a `HostEvent::Teardown` once the terminal is gone.
pub struct ResizeMonitor {
    event_bus: EventBusHandle,
    poll_interval: Duration,
}

impl ResizeMonitor {
    pub fn new(event_bus: EventBusHandle, poll_interval: Duration) -> Self {
        Self {
            event_bus,
            poll_interval,
        }
    }

    fn publish(&self, event: HostEvent) {
        match bincode::encode_to_vec(event.clone(), config::standard()) {
            Ok(encoded) => self.event_bus.publish(EventType::Host, encoded),
            Err(err) => error!("failed to encode {event:?}: {err}"),
        }
    }

    fn begin_monitoring(&self) {
        let mut last = current_viewport();

        loop {
            thread::sleep(self.poll_interval);

            match crossterm::terminal::size() {
                Ok((columns, rows)) => {
                    let viewport = Viewport::new(columns, rows);
                    if last != Some(viewport) {
                        debug!("terminal resized to {columns}x{rows}");
                        last = Some(viewport);
                        self.publish(HostEvent::Resized(viewport));
                    }
                }
                Err(err) => {
                    warn!("failed to read terminal size, stopping: {err}");
                    self.publish(HostEvent::Teardown);
                    return;
                }
            }
        }
    }
}

impl Runnable for ResizeMonitor {
    fn run(self: Arc<Self>) -> JoinHandle<()> {
        thread::spawn(move || {
            info!("starting ResizeMonitor thread");
            self.begin_monitoring();
            info!("ResizeMonitor thread is stopping");
        })
    }
}
