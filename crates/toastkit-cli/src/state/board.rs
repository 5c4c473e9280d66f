//! Event-driven toast board
//!
//! Mirrors the provider's change feed into rendered frames and keeps a tally
//! of how toasts came and went.

use crate::render::render_board;
use crate::theme::Theme;
use std::io::Write;
use tokio::sync::broadcast::{self, error::RecvError};
use toastkit_core::{DismissReason, ToastEvent, Toaster};
use tracing::{debug, warn};

/// Counts of lifecycle events seen by the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardStats {
    pub shown: usize,
    pub timed_out: usize,
    pub dismissed: usize,
    pub evicted: usize,
    pub actioned: usize,
    pub removed: usize,
    pub paused: usize,
}

impl BoardStats {
    pub fn record(&mut self, event: &ToastEvent) {
        match event {
            ToastEvent::Shown { .. } => self.shown += 1,
            ToastEvent::Paused { .. } => self.paused += 1,
            ToastEvent::Resumed { .. } => {}
            ToastEvent::Exiting { reason, .. } => match reason {
                DismissReason::Timeout => self.timed_out += 1,
                DismissReason::Dismissed => self.dismissed += 1,
                DismissReason::Evicted => self.evicted += 1,
                DismissReason::Action => self.actioned += 1,
            },
            ToastEvent::Removed { .. } => self.removed += 1,
        }
    }
}

/// Renders a frame for every registry change
pub struct ToastBoard {
    toaster: Toaster,
    theme: Theme,
    stats: BoardStats,
}

impl ToastBoard {
    pub fn new(toaster: Toaster, theme: Theme) -> Self {
        Self {
            toaster,
            theme,
            stats: BoardStats::default(),
        }
    }

    pub fn stats(&self) -> &BoardStats {
        &self.stats
    }

    /// Account for `event` and render the current buckets
    pub fn apply(&mut self, event: &ToastEvent) -> toastkit_core::Result<String> {
        self.stats.record(event);
        let buckets = self.toaster.buckets()?;
        Ok(render_board(&buckets, &self.theme))
    }

    /// Consume the change feed until the provider shuts down.
    pub async fn run<W: Write>(
        mut self,
        mut rx: broadcast::Receiver<ToastEvent>,
        mut out: W,
    ) -> anyhow::Result<BoardStats> {
        loop {
            let event = match rx.recv().await {
                Ok(event) => event,
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Toast board lagged, skipped {} events", skipped);
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            debug!("Toast event: {:?}", event);
            if !self.toaster.is_open() {
                break;
            }
            let frame = match self.apply(&event) {
                Ok(frame) => frame,
                // Provider went away between the event and the render
                Err(toastkit_core::Error::Toast(_)) => break,
                Err(e) => return Err(e.into()),
            };
            writeln!(out, "-- {} {}", event_label(&event), event.id())?;
            write!(out, "{}", frame)?;
            out.flush()?;
        }

        Ok(self.stats)
    }
}

fn event_label(event: &ToastEvent) -> &'static str {
    match event {
        ToastEvent::Shown { .. } => "shown",
        ToastEvent::Paused { .. } => "paused",
        ToastEvent::Resumed { .. } => "resumed",
        ToastEvent::Exiting { .. } => "exiting",
        ToastEvent::Removed { .. } => "removed",
    }
}
