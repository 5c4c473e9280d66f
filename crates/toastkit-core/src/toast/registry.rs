//! Ordered toast store

use super::scheduler::Countdown;
use crate::config::ToasterConfig;
use crate::types::*;
use tokio::task::AbortHandle;

/// A record plus the timer state owned by it
#[derive(Debug)]
pub(crate) struct Entry {
    pub record: ToastRecord,
    pub countdown: Countdown,
    /// The single outstanding timer task: countdown while active, grace
    /// removal once exiting.
    pub timer: Option<AbortHandle>,
}

impl Entry {
    pub fn new(record: ToastRecord) -> Self {
        let countdown = Countdown::new(record.duration, record.pause_on_hover);
        Self {
            record,
            countdown,
            timer: None,
        }
    }

    /// Abort the outstanding timer task, if any
    pub fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Live toasts in insertion order
#[derive(Debug, Default)]
pub(crate) struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn get(&self, id: &ToastId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.record.id == id)
    }

    pub fn get_mut(&mut self, id: &ToastId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| &e.record.id == id)
    }

    pub fn remove(&mut self, id: &ToastId) -> Option<Entry> {
        let pos = self.entries.iter().position(|e| &e.record.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| e.record.is_active()).count()
    }

    /// First-inserted record still in the active state
    pub fn oldest_active(&self) -> Option<ToastId> {
        self.entries
            .iter()
            .find(|e| e.record.is_active())
            .map(|e| e.record.id.clone())
    }

    pub fn active_ids(&self) -> Vec<ToastId> {
        self.entries
            .iter()
            .filter(|e| e.record.is_active())
            .map(|e| e.record.id.clone())
            .collect()
    }

    pub fn records(&self) -> impl Iterator<Item = &ToastRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Remove everything, aborting outstanding timers
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        for entry in &mut self.entries {
            entry.cancel_timer();
        }
        self.entries.clear();
        count
    }
}

impl ToastRecord {
    /// Merge per-call options over the provider defaults.
    pub fn from_options(
        id: ToastId,
        content: ToastContent,
        options: ToastOptions,
        config: &ToasterConfig,
    ) -> Self {
        Self {
            id,
            content,
            variant: options.variant.unwrap_or_default(),
            position: options.position.unwrap_or(config.default_position),
            duration: options.duration.unwrap_or(config.default_duration),
            action: options.action,
            pause_on_hover: options.pause_on_hover.unwrap_or(true),
            title: options.title,
            description: options.description,
            icon: options.icon,
            show_icon: options.show_icon.unwrap_or(true),
            show_close_button: options.show_close_button.unwrap_or(true),
            class_name: options.class_name,
            created_at: chrono::Utc::now(),
            lifecycle: LifecycleState::Active,
        }
    }
}
