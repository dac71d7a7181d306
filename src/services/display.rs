use std::{
    io::{self, Write},
    sync::{mpsc::Receiver, Arc, Mutex},
    thread::{self, JoinHandle},
};

use bincode::config;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use log::{error, info};

use crate::{
    event_bus::{EventBusHandle, EventType},
    models::clamp_report::ClampReport,
};

use super::runnable::Runnable;

/// Writes the block of clamped lines followed by a rule as wide as the
/// container.
pub fn write_report<W: Write>(out: &mut W, report: &ClampReport) -> io::Result<()> {
    for line in &report.lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", "─".repeat(report.columns as usize))
}

/// Redraws the terminal each time a clamp pass settles.
pub struct Display {
    reports: Mutex<Option<Receiver<Vec<u8>>>>,
}

impl Display {
    pub fn new(event_bus: EventBusHandle) -> Self {
        let reports = event_bus.subscribe(EventType::ClampSettled);
        if reports.is_none() {
            error!("failed to subscribe to ClampSettled");
        }

        Self {
            reports: Mutex::new(reports),
        }
    }

    fn redraw(report: &ClampReport) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        write_report(&mut stdout, report)?;
        stdout.flush()
    }

    fn display(&self) {
        let Some(rx) = self.reports.lock().ok().and_then(|mut lock| lock.take()) else {
            return;
        };

        while let Ok(encoded) = rx.recv() {
            let report: ClampReport =
                match bincode::decode_from_slice(&encoded[..], config::standard()) {
                    Ok((report, _)) => report,
                    Err(err) => {
                        error!("failed to decode clamp report: {err}");
                        continue;
                    }
                };

            if let Err(err) = Display::redraw(&report) {
                error!("failed to draw clamp report: {err}");
            }
        }
    }
}

impl Runnable for Display {
    fn run(self: Arc<Self>) -> JoinHandle<()> {
        thread::spawn(move || {
            info!("starting Display thread");
            self.display();
        })
    }
}
