use std::{
    sync::{mpsc::Receiver, Arc, Mutex},
    thread::{self, JoinHandle},
    time::Duration,
};

use bincode::config;
use log::{debug, error, info, warn};

use crate::{
    engine::line_clamp::LineClamp,
    event_bus::{EventBusHandle, EventType},
    layout::cell_surface::CellSurface,
    models::{
        clamp_config::ClampConfig,
        clamp_report::ClampReport,
        viewport::{HostEvent, Viewport},
    },
};

use super::{clamp_binding::ClampBinding, runnable::Runnable};

/// Owns the clamped element and drives its binding from host events.
///
/// All passes run on this service's thread, one after the other.
pub struct ClampService {
    event_bus: EventBusHandle,
    host_events: Mutex<Option<Receiver<Vec<u8>>>>,
    config: ClampConfig,
    engine: LineClamp,
    viewport: Viewport,
    settle_delay: Duration,
    resize_debounce: Duration,
}

impl ClampService {
    /// Subscribes right away so resizes during the settling delay are kept.
    pub fn new(
        event_bus: EventBusHandle,
        config: ClampConfig,
        engine: LineClamp,
        viewport: Viewport,
    ) -> Self {
        let host_events = event_bus.subscribe(EventType::Host);
        if host_events.is_none() {
            error!("failed to subscribe to host events, resizes will be ignored");
        }

        Self {
            event_bus,
            host_events: Mutex::new(host_events),
            config,
            engine,
            viewport,
            settle_delay: Duration::from_millis(100),
            resize_debounce: Duration::ZERO,
        }
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn with_resize_debounce(mut self, resize_debounce: Duration) -> Self {
        self.resize_debounce = resize_debounce;
        self
    }

    fn publish_report(&self, binding: &ClampBinding<CellSurface>) {
        let Some(outcome) = binding.last_outcome() else {
            return;
        };

        let report = ClampReport::new(
            binding.element().columns(),
            outcome,
            binding.element().rendered_lines(),
        );
        match bincode::encode_to_vec(report, config::standard()) {
            Ok(encoded) => self.event_bus.publish(EventType::ClampSettled, encoded),
            Err(err) => error!("failed to encode clamp report: {err}"),
        }
    }

    /// Folds a burst of resizes into the last one. Returns the viewport to
    /// use and whether a teardown arrived during the burst.
    fn coalesce_resizes(&self, rx: &Receiver<Vec<u8>>, mut viewport: Viewport) -> (Viewport, bool) {
        if self.resize_debounce.is_zero() {
            return (viewport, false);
        }

        while let Ok(encoded) = rx.recv_timeout(self.resize_debounce) {
            match decode_event(&encoded) {
                Some(HostEvent::Resized(next)) => viewport = next,
                Some(HostEvent::Teardown) => return (viewport, true),
                None => continue,
            }
        }
        (viewport, false)
    }

    fn serve(&self) {
        let rx = self.host_events.lock().ok().and_then(|mut lock| lock.take());

        debug!("waiting {:?} for the host layout to settle", self.settle_delay);
        thread::sleep(self.settle_delay);

        let surface = CellSurface::new(self.viewport.columns);
        let mut binding = ClampBinding::new(surface, self.config.clone(), self.engine);
        if let Err(err) = binding.mount() {
            error!("first clamp pass failed: {err}");
        }
        self.publish_report(&binding);

        let Some(rx) = rx else {
            return;
        };

        while let Ok(encoded) = rx.recv() {
            let viewport = match decode_event(&encoded) {
                Some(HostEvent::Resized(viewport)) => viewport,
                Some(HostEvent::Teardown) => break,
                None => continue,
            };

            let (viewport, teardown) = self.coalesce_resizes(&rx, viewport);
            if viewport.columns != binding.element().columns() {
                binding.element_mut().resize(viewport.columns);
                match binding.on_resize() {
                    Ok(_) => self.publish_report(&binding),
                    Err(err) => error!("clamp pass after resize failed: {err}"),
                }
            }

            if teardown {
                break;
            }
        }

        binding.teardown();
        drop(rx);
        info!("clamp service stopped");
    }
}

fn decode_event(encoded: &[u8]) -> Option<HostEvent> {
    match bincode::decode_from_slice(encoded, config::standard()) {
        Ok((event, _)) => Some(event),
        Err(err) => {
            warn!("failed to decode host event: {err}");
            None
        }
    }
}

impl Runnable for ClampService {
    fn run(self: Arc<Self>) -> JoinHandle<()> {
        thread::spawn(move || {
            info!("starting ClampService thread");
            self.serve();
        })
    }
}
