//! Toast provider and its handle
//!
//! The provider owns the registry, the change-event channel and every timer
//! task. Callers hold a [`Toaster`], a cheap handle that fails with
//! [`ToastError::ProviderClosed`] once the provider is gone.

use super::grouper::{group_by_position, PositionBuckets};
use super::registry::{Entry, Registry};
use super::scheduler::Arm;
use crate::config::ToasterConfig;
use crate::error::{Error, Result, ToastError};
use crate::types::*;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::task::AbortHandle;
use tokio::time::Instant;
use tracing::{debug, info};

struct Shared {
    config: ToasterConfig,
    runtime: Handle,
    registry: Mutex<Registry>,
    events: broadcast::Sender<ToastEvent>,
}

impl Shared {
    fn publish(&self, event: ToastEvent) {
        // Nobody listening is not an error
        let _ = self.events.send(event);
    }

    fn show(self: &Arc<Self>, content: ToastContent, options: ToastOptions) -> ToastId {
        let id = ToastId::generate();
        let record = ToastRecord::from_options(id.clone(), content, options, &self.config);
        let position = record.position;

        let mut registry = self.registry.lock();

        while registry.active_count() >= self.config.max_toasts {
            let Some(oldest) = registry.oldest_active() else {
                break;
            };
            debug!("Evicting toast {} to admit {}", oldest, id);
            self.begin_exit(&mut registry, &oldest, DismissReason::Evicted);
        }

        let mut entry = Entry::new(record);
        if let Some(arm) = entry.countdown.arm(Instant::now()) {
            entry.timer = Some(self.spawn_countdown(id.clone(), arm));
        }
        registry.insert(entry);

        debug!("Showing toast {} at {}", id, position);
        self.publish(ToastEvent::Shown {
            id: id.clone(),
            position,
        });
        id
    }

    /// Move an active record to exiting and start its grace timer.
    fn begin_exit(
        self: &Arc<Self>,
        registry: &mut Registry,
        id: &ToastId,
        reason: DismissReason,
    ) -> bool {
        let Some(entry) = registry.get_mut(id) else {
            return false;
        };
        if !entry.record.is_active() {
            return false;
        }

        entry.countdown.stop();
        entry.cancel_timer();
        entry.record.lifecycle = LifecycleState::Exiting;
        entry.timer = Some(self.spawn_removal(id.clone()));

        debug!("Toast {} exiting ({:?})", id, reason);
        self.publish(ToastEvent::Exiting {
            id: id.clone(),
            reason,
        });
        true
    }

    fn dismiss(self: &Arc<Self>, id: &ToastId, reason: DismissReason) -> bool {
        let mut registry = self.registry.lock();
        self.begin_exit(&mut registry, id, reason)
    }

    fn dismiss_all(self: &Arc<Self>) -> usize {
        let mut registry = self.registry.lock();
        let ids = registry.active_ids();
        ids.iter()
            .filter(|id| self.begin_exit(&mut registry, id, DismissReason::Dismissed))
            .count()
    }

    fn pause(&self, id: &ToastId) -> bool {
        let mut registry = self.registry.lock();
        let Some(entry) = registry.get_mut(id) else {
            return false;
        };
        if !entry.record.is_active() {
            return false;
        }
        let Some(remaining) = entry.countdown.pause(Instant::now()) else {
            return false;
        };
        entry.cancel_timer();

        self.publish(ToastEvent::Paused {
            id: id.clone(),
            remaining,
        });
        true
    }

    fn resume(self: &Arc<Self>, id: &ToastId) -> bool {
        let mut registry = self.registry.lock();
        let Some(entry) = registry.get_mut(id) else {
            return false;
        };
        if !entry.record.is_active() {
            return false;
        }
        let Some(arm) = entry.countdown.resume(Instant::now()) else {
            return false;
        };
        entry.timer = Some(self.spawn_countdown(id.clone(), arm));

        self.publish(ToastEvent::Resumed {
            id: id.clone(),
            remaining: arm.delay,
        });
        true
    }

    /// Countdown fired. Stale generations (paused or dismissed since the
    /// timer was armed) are ignored.
    fn expire(self: &Arc<Self>, id: &ToastId, generation: u64) {
        let mut registry = self.registry.lock();
        let Some(entry) = registry.get_mut(id) else {
            return;
        };
        if !entry.countdown.is_current(generation) {
            return;
        }
        // The calling task is this timer; drop the handle instead of aborting it
        entry.timer = None;
        self.begin_exit(&mut registry, id, DismissReason::Timeout);
    }

    fn remove(&self, id: &ToastId) {
        let mut registry = self.registry.lock();
        let exiting = registry.get(id).is_some_and(|e| e.record.is_exiting());
        if exiting {
            registry.remove(id);
            debug!("Removed toast {}", id);
            self.publish(ToastEvent::Removed { id: id.clone() });
        }
    }

    fn action_for(&self, id: &ToastId) -> Option<ToastAction> {
        let registry = self.registry.lock();
        registry
            .get(id)
            .filter(|e| e.record.is_active())
            .and_then(|e| e.record.action.clone())
    }

    fn spawn_countdown(self: &Arc<Self>, id: ToastId, arm: Arm) -> AbortHandle {
        let shared = Arc::downgrade(self);
        self.runtime
            .spawn(async move {
                tokio::time::sleep(arm.delay).await;
                if let Some(shared) = shared.upgrade() {
                    shared.expire(&id, arm.generation);
                }
            })
            .abort_handle()
    }

    fn spawn_removal(self: &Arc<Self>, id: ToastId) -> AbortHandle {
        let shared = Arc::downgrade(self);
        let delay = self.config.exit_duration;
        self.runtime
            .spawn(async move {
                tokio::time::sleep(delay).await;
                if let Some(shared) = shared.upgrade() {
                    shared.remove(&id);
                }
            })
            .abort_handle()
    }
}

/// Owner of the toast registry.
///
/// Start one at application startup, inside a tokio runtime, and hand
/// [`Toaster`] handles to the code that raises notifications. Dropping the
/// provider (or calling [`shutdown`](Self::shutdown)) cancels every pending
/// timer and discards all toasts.
pub struct ToastProvider {
    shared: Arc<Shared>,
}

impl ToastProvider {
    pub fn start(config: ToasterConfig) -> Result<Self> {
        config.validate()?;
        let runtime = Handle::try_current().map_err(|_| Error::Toast(ToastError::NoRuntime))?;
        let (events, _) = broadcast::channel(config.event_capacity);

        info!(
            "Toast provider started (position: {}, duration: {:?}, max: {})",
            config.default_position, config.default_duration, config.max_toasts
        );

        Ok(Self {
            shared: Arc::new(Shared {
                config,
                runtime,
                registry: Mutex::new(Registry::new()),
                events,
            }),
        })
    }

    /// A new handle onto this provider
    pub fn toaster(&self) -> Toaster {
        Toaster {
            shared: Arc::downgrade(&self.shared),
        }
    }

    pub fn config(&self) -> &ToasterConfig {
        &self.shared.config
    }

    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for ToastProvider {
    fn drop(&mut self) {
        let discarded = self.shared.registry.lock().clear();
        info!("Toast provider shut down ({} toasts discarded)", discarded);
    }
}

/// Handle for raising and controlling toasts
#[derive(Debug, Clone)]
pub struct Toaster {
    shared: Weak<Shared>,
}

impl Toaster {
    fn shared(&self) -> Result<Arc<Shared>> {
        self.shared
            .upgrade()
            .ok_or(Error::Toast(ToastError::ProviderClosed))
    }

    /// Whether the provider behind this handle is still running
    pub fn is_open(&self) -> bool {
        self.shared.strong_count() > 0
    }

    /// Show a toast, evicting the oldest active one when at capacity.
    pub fn show(&self, content: impl Into<ToastContent>, options: ToastOptions) -> Result<ToastId> {
        Ok(self.shared()?.show(content.into(), options))
    }

    pub fn success(&self, content: impl Into<ToastContent>, options: ToastOptions) -> Result<ToastId> {
        self.show(content, options.variant(Variant::Success))
    }

    pub fn info(&self, content: impl Into<ToastContent>, options: ToastOptions) -> Result<ToastId> {
        self.show(content, options.variant(Variant::Info))
    }

    pub fn warning(&self, content: impl Into<ToastContent>, options: ToastOptions) -> Result<ToastId> {
        self.show(content, options.variant(Variant::Warning))
    }

    pub fn danger(&self, content: impl Into<ToastContent>, options: ToastOptions) -> Result<ToastId> {
        self.show(content, options.variant(Variant::Danger))
    }

    /// Alias for [`danger`](Self::danger)
    pub fn error(&self, content: impl Into<ToastContent>, options: ToastOptions) -> Result<ToastId> {
        self.danger(content, options)
    }

    /// Show rich content the renderer interprets on its own
    pub fn custom(&self, content: serde_json::Value, options: ToastOptions) -> Result<ToastId> {
        self.show(ToastContent::Custom(content), options)
    }

    /// Start the exit of an active toast. Unknown or exiting ids are ignored.
    pub fn dismiss(&self, id: &ToastId) -> Result<()> {
        self.shared()?.dismiss(id, DismissReason::Dismissed);
        Ok(())
    }

    pub fn dismiss_all(&self) -> Result<()> {
        let dismissed = self.shared()?.dismiss_all();
        debug!("Dismissed {} toasts", dismissed);
        Ok(())
    }

    /// Freeze the countdown, e.g. on pointer enter.
    pub fn pause(&self, id: &ToastId) -> Result<()> {
        self.shared()?.pause(id);
        Ok(())
    }

    /// Continue a paused countdown, e.g. on pointer leave.
    pub fn resume(&self, id: &ToastId) -> Result<()> {
        self.shared()?.resume(id);
        Ok(())
    }

    /// Run the toast's action callback, then dismiss it.
    ///
    /// Returns `false` when the toast is gone, exiting or has no action.
    pub fn activate_action(&self, id: &ToastId) -> Result<bool> {
        let shared = self.shared()?;
        // The registry lock is released here; callbacks may call back into us
        let Some(action) = shared.action_for(id) else {
            return Ok(false);
        };
        action.invoke(id);
        shared.dismiss(id, DismissReason::Action);
        Ok(true)
    }

    pub fn get(&self, id: &ToastId) -> Result<Option<ToastRecord>> {
        let shared = self.shared()?;
        let registry = shared.registry.lock();
        Ok(registry.get(id).map(|e| e.record.clone()))
    }

    /// All live records in insertion order
    pub fn snapshot(&self) -> Result<Vec<ToastRecord>> {
        let shared = self.shared()?;
        let registry = shared.registry.lock();
        Ok(registry.records().cloned().collect())
    }

    pub fn buckets(&self) -> Result<PositionBuckets> {
        let shared = self.shared()?;
        let registry = shared.registry.lock();
        Ok(group_by_position(registry.records()))
    }

    pub fn active_count(&self) -> Result<usize> {
        Ok(self.shared()?.registry.lock().active_count())
    }

    /// Active plus exiting
    pub fn len(&self) -> Result<usize> {
        Ok(self.shared()?.registry.lock().len())
    }

    /// Subscribe to registry changes
    pub fn subscribe(&self) -> Result<broadcast::Receiver<ToastEvent>> {
        Ok(self.shared()?.events.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::sleep_until;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn lifecycle(toaster: &Toaster, id: &ToastId) -> Option<LifecycleState> {
        toaster.get(id).unwrap().map(|r| r.lifecycle)
    }

    fn drain(rx: &mut broadcast::Receiver<ToastEvent>) -> Vec<ToastEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_start_outside_runtime_fails() {
        let result = ToastProvider::start(ToasterConfig::default());
        assert!(matches!(result, Err(Error::Toast(ToastError::NoRuntime))));
    }

    #[tokio::test]
    async fn test_start_rejects_invalid_config() {
        let result = ToastProvider::start(ToasterConfig::default().with_max_toasts(0));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_handle_fails_after_shutdown() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();
        toaster.show("before", ToastOptions::new()).unwrap();
        assert!(toaster.is_open());

        provider.shutdown();

        assert!(!toaster.is_open());
        let result = toaster.show("after", ToastOptions::new());
        assert!(matches!(result, Err(Error::Toast(ToastError::ProviderClosed))));
        assert!(toaster.dismiss_all().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_toast_expires_then_is_removed() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();
        let start = Instant::now();

        let id = toaster.show("Hello", ToastOptions::new()).unwrap();

        sleep_until(start + ms(4990)).await;
        assert_eq!(lifecycle(&toaster, &id), Some(LifecycleState::Active));

        sleep_until(start + ms(5010)).await;
        assert_eq!(lifecycle(&toaster, &id), Some(LifecycleState::Exiting));

        sleep_until(start + ms(5290)).await;
        assert_eq!(lifecycle(&toaster, &id), Some(LifecycleState::Exiting));

        sleep_until(start + ms(5310)).await;
        assert_eq!(lifecycle(&toaster, &id), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_capacity_evicts_oldest() {
        let provider =
            ToastProvider::start(ToasterConfig::default().with_max_toasts(3)).unwrap();
        let toaster = provider.toaster();
        let mut rx = toaster.subscribe().unwrap();

        let ids: Vec<ToastId> = (0..4)
            .map(|i| toaster.show(format!("toast {i}"), ToastOptions::new()).unwrap())
            .collect();

        assert_eq!(toaster.active_count().unwrap(), 3);
        assert_eq!(toaster.len().unwrap(), 4);
        assert_eq!(lifecycle(&toaster, &ids[0]), Some(LifecycleState::Exiting));
        for id in &ids[1..] {
            assert_eq!(lifecycle(&toaster, id), Some(LifecycleState::Active));
        }

        let evicted: Vec<ToastEvent> = drain(&mut rx)
            .into_iter()
            .filter(|e| matches!(e, ToastEvent::Exiting { .. }))
            .collect();
        assert_eq!(
            evicted,
            vec![ToastEvent::Exiting {
                id: ids[0].clone(),
                reason: DismissReason::Evicted
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_active_count_never_exceeds_capacity() {
        let provider =
            ToastProvider::start(ToasterConfig::default().with_max_toasts(2)).unwrap();
        let toaster = provider.toaster();
        let mut seen = HashSet::new();

        for i in 0..20 {
            let id = toaster.show(format!("t{i}"), ToastOptions::new()).unwrap();
            assert!(seen.insert(id.clone()), "duplicate id {id}");
            if i % 3 == 0 {
                toaster.dismiss(&id).unwrap();
            }
            assert!(toaster.active_count().unwrap() <= 2);
            tokio::time::sleep(ms(50)).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_resume_defers_expiry() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();
        let start = Instant::now();

        let id = toaster
            .show("X", ToastOptions::new().duration_ms(3000).pause_on_hover(true))
            .unwrap();

        sleep_until(start + ms(1000)).await;
        toaster.pause(&id).unwrap();

        sleep_until(start + ms(6000)).await;
        assert_eq!(lifecycle(&toaster, &id), Some(LifecycleState::Active));
        toaster.resume(&id).unwrap();

        sleep_until(start + ms(7990)).await;
        assert_eq!(lifecycle(&toaster, &id), Some(LifecycleState::Active));

        sleep_until(start + ms(8010)).await;
        assert_eq!(lifecycle(&toaster, &id), Some(LifecycleState::Exiting));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_ignored_without_pause_on_hover() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();
        let mut rx = toaster.subscribe().unwrap();
        let start = Instant::now();

        let id = toaster
            .show("no hover", ToastOptions::new().duration_ms(1000).pause_on_hover(false))
            .unwrap();

        sleep_until(start + ms(500)).await;
        toaster.pause(&id).unwrap();

        sleep_until(start + ms(1010)).await;
        assert_eq!(lifecycle(&toaster, &id), Some(LifecycleState::Exiting));
        assert!(!drain(&mut rx)
            .iter()
            .any(|e| matches!(e, ToastEvent::Paused { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_persistent_toast_waits_for_dismiss() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();

        let id = toaster.show("Y", ToastOptions::new().persistent()).unwrap();

        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert_eq!(lifecycle(&toaster, &id), Some(LifecycleState::Active));

        // Hover is inert too
        toaster.pause(&id).unwrap();
        toaster.resume(&id).unwrap();

        toaster.dismiss(&id).unwrap();
        assert_eq!(lifecycle(&toaster, &id), Some(LifecycleState::Exiting));

        tokio::time::sleep(ms(310)).await;
        assert_eq!(lifecycle(&toaster, &id), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_all_then_removed_after_grace() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();

        for message in ["one", "two", "three"] {
            toaster.info(message, ToastOptions::new()).unwrap();
        }

        toaster.dismiss_all().unwrap();
        let records = toaster.snapshot().unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(ToastRecord::is_exiting));

        tokio::time::sleep(ms(310)).await;
        assert!(toaster.snapshot().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_is_idempotent() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();
        let mut rx = toaster.subscribe().unwrap();
        let start = Instant::now();

        let id = toaster.show("twice", ToastOptions::new()).unwrap();
        toaster.dismiss(&id).unwrap();

        sleep_until(start + ms(200)).await;
        toaster.dismiss(&id).unwrap();

        // The grace timer started by the first dismiss is not restarted
        sleep_until(start + ms(310)).await;
        assert_eq!(lifecycle(&toaster, &id), None);

        // Unknown ids are fine as well
        toaster.dismiss(&ToastId::from("toast-unknown")).unwrap();

        assert_eq!(
            drain(&mut rx),
            vec![
                ToastEvent::Shown {
                    id: id.clone(),
                    position: Position::TopRight
                },
                ToastEvent::Exiting {
                    id: id.clone(),
                    reason: DismissReason::Dismissed
                },
                ToastEvent::Removed { id },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_exiting_toast_ignores_hover() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();
        let mut rx = toaster.subscribe().unwrap();

        let id = toaster.show("bye", ToastOptions::new()).unwrap();
        toaster.dismiss(&id).unwrap();
        toaster.pause(&id).unwrap();
        toaster.resume(&id).unwrap();

        let events = drain(&mut rx);
        assert!(!events
            .iter()
            .any(|e| matches!(e, ToastEvent::Paused { .. } | ToastEvent::Resumed { .. })));
        assert_eq!(lifecycle(&toaster, &id), Some(LifecycleState::Exiting));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_and_resume_events_report_remaining() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();
        let start = Instant::now();

        let id = toaster.show("hover me", ToastOptions::new()).unwrap();
        let mut rx = toaster.subscribe().unwrap();

        sleep_until(start + ms(1500)).await;
        let expected = ms(5000) - start.elapsed();
        toaster.pause(&id).unwrap();
        toaster.pause(&id).unwrap();
        sleep_until(start + ms(4000)).await;
        toaster.resume(&id).unwrap();
        toaster.resume(&id).unwrap();

        assert_eq!(
            drain(&mut rx),
            vec![
                ToastEvent::Paused {
                    id: id.clone(),
                    remaining: expected
                },
                ToastEvent::Resumed {
                    id,
                    remaining: expected
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_activate_action_runs_callback_and_dismisses() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let id = toaster
            .success(
                "Deleted",
                ToastOptions::new().action(ToastAction::new("Undo", move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                })),
            )
            .unwrap();
        let plain = toaster.show("plain", ToastOptions::new()).unwrap();

        assert!(toaster.activate_action(&id).unwrap());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(lifecycle(&toaster, &id), Some(LifecycleState::Exiting));

        // Already exiting, or no action at all
        assert!(!toaster.activate_action(&id).unwrap());
        assert!(!toaster.activate_action(&plain).unwrap());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_action_callback_may_use_toaster() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();
        let inner = toaster.clone();

        let id = toaster
            .show(
                "Archived",
                ToastOptions::new().action(ToastAction::new("Undo", move |_| {
                    inner.info("Restored", ToastOptions::new()).unwrap();
                })),
            )
            .unwrap();

        assert!(toaster.activate_action(&id).unwrap());
        assert_eq!(toaster.active_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_variant_wrappers() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();
        let options = ToastOptions::new;

        let cases = [
            (toaster.success("s", options()).unwrap(), Variant::Success),
            (toaster.info("i", options()).unwrap(), Variant::Info),
            (toaster.warning("w", options()).unwrap(), Variant::Warning),
            (toaster.danger("d", options()).unwrap(), Variant::Danger),
            (toaster.error("e", options()).unwrap(), Variant::Danger),
            (toaster.show("plain", options()).unwrap(), Variant::Default),
        ];

        for (id, variant) in cases {
            assert_eq!(toaster.get(&id).unwrap().unwrap().variant, variant);
        }
    }

    #[tokio::test]
    async fn test_custom_content_is_opaque() {
        let provider = ToastProvider::start(ToasterConfig::default()).unwrap();
        let toaster = provider.toaster();
        let payload = serde_json::json!({ "component": "UploadProgress", "percent": 40 });

        let id = toaster.custom(payload.clone(), ToastOptions::new()).unwrap();
        let record = toaster.get(&id).unwrap().unwrap();

        assert_eq!(record.content, ToastContent::Custom(payload));
        assert!(record.content.as_text().is_none());
    }

    #[tokio::test]
    async fn test_buckets_follow_positions() {
        let provider = ToastProvider::start(
            ToasterConfig::default().with_default_position(Position::BottomRight),
        )
        .unwrap();
        let toaster = provider.toaster();

        let a = toaster.show("a", ToastOptions::new()).unwrap();
        let b = toaster
            .show("b", ToastOptions::new().position(Position::TopLeft))
            .unwrap();
        let c = toaster.show("c", ToastOptions::new()).unwrap();
        toaster.dismiss(&c).unwrap();

        let buckets = toaster.buckets().unwrap();
        let bottom: Vec<ToastId> = buckets
            .get(Position::BottomRight)
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(bottom, vec![a, c]);
        assert_eq!(buckets.get(Position::TopLeft)[0].id, b);
        assert_eq!(buckets.total(), 3);
    }
}
