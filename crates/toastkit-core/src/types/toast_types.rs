//! Toast record and option types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Unique toast identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
    /// Generate a fresh id from the wall clock and a process-wide sequence.
    ///
    /// The sequence alone guarantees uniqueness; the timestamp only makes ids
    /// readable in logs.
    pub fn generate() -> Self {
        let seq = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!(
            "toast-{}-{}",
            chrono::Utc::now().timestamp_millis(),
            seq
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Visual variant of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Success,
    Info,
    Warning,
    /// Elevated urgency, announced as an alert
    Danger,
}

impl Default for Variant {
    fn default() -> Self {
        Self::Default
    }
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// How assistive technology should announce a toast of this variant
    pub fn announcement(&self) -> Announcement {
        match self {
            Self::Danger => Announcement::Alert,
            _ => Announcement::Status,
        }
    }
}

/// Accessibility announcement priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    /// Interrupts the user (`role="alert"`, `aria-live="assertive"`)
    Alert,
    /// Announced when idle (`role="status"`, `aria-live="polite"`)
    Status,
}

impl Announcement {
    pub fn role(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Status => "status",
        }
    }

    pub fn aria_live(&self) -> &'static str {
        match self {
            Self::Alert => "assertive",
            Self::Status => "polite",
        }
    }
}

/// Screen anchor point for a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Default for Position {
    fn default() -> Self {
        Self::TopRight
    }
}

impl Position {
    /// All anchors in bucket order
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn is_top(&self) -> bool {
        matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a toast record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    /// Visible and eligible for auto-dismiss
    Active,
    /// Dismissed; waiting out the exit animation before removal
    Exiting,
}

/// Toast display payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ToastContent {
    Text(String),
    /// Rich content, passed through untouched to the renderer
    Custom(serde_json::Value),
}

impl ToastContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Custom(_) => None,
        }
    }
}

impl From<&str> for ToastContent {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ToastContent {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Single action button attached to a toast
#[derive(Clone)]
pub struct ToastAction {
    pub label: String,
    callback: Arc<dyn Fn(&ToastId) + Send + Sync>,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, callback: impl Fn(&ToastId) + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            callback: Arc::new(callback),
        }
    }

    pub fn invoke(&self, id: &ToastId) {
        (self.callback)(id)
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Per-call overrides; anything left unset falls back to the provider config
/// or the field's default.
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    pub position: Option<Position>,
    pub duration: Option<Duration>,
    pub variant: Option<Variant>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub show_icon: Option<bool>,
    pub action: Option<ToastAction>,
    pub show_close_button: Option<bool>,
    pub class_name: Option<String>,
    pub pause_on_hover: Option<bool>,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Auto-dismiss delay; `Duration::ZERO` keeps the toast until dismissed
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn duration_ms(self, millis: u64) -> Self {
        self.duration(Duration::from_millis(millis))
    }

    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn show_icon(mut self, show: bool) -> Self {
        self.show_icon = Some(show);
        self
    }

    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = Some(show);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn pause_on_hover(mut self, pause: bool) -> Self {
        self.pause_on_hover = Some(pause);
        self
    }
}

/// One live notification
#[derive(Debug, Clone)]
pub struct ToastRecord {
    pub id: ToastId,
    pub content: ToastContent,
    pub variant: Variant,
    pub position: Position,
    pub duration: Duration,
    pub action: Option<ToastAction>,
    pub pause_on_hover: bool,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub show_icon: bool,
    pub show_close_button: bool,
    pub class_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub lifecycle: LifecycleState,
}

impl ToastRecord {
    pub fn is_active(&self) -> bool {
        self.lifecycle == LifecycleState::Active
    }

    pub fn is_exiting(&self) -> bool {
        self.lifecycle == LifecycleState::Exiting
    }

    /// Whether a countdown is ever armed for this toast
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }

    pub fn announcement(&self) -> Announcement {
        self.variant.announcement()
    }
}

/// Why a toast left the active state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// Countdown elapsed
    Timeout,
    /// Explicit `dismiss` / `dismiss_all`
    Dismissed,
    /// Pushed out by a newer toast when at capacity
    Evicted,
    /// The toast's action was activated
    Action,
}

/// Registry change notification, published to subscribers
#[derive(Debug, Clone, PartialEq)]
pub enum ToastEvent {
    Shown { id: ToastId, position: Position },
    Paused { id: ToastId, remaining: Duration },
    Resumed { id: ToastId, remaining: Duration },
    Exiting { id: ToastId, reason: DismissReason },
    Removed { id: ToastId },
}

impl ToastEvent {
    pub fn id(&self) -> &ToastId {
        match self {
            Self::Shown { id, .. }
            | Self::Paused { id, .. }
            | Self::Resumed { id, .. }
            | Self::Exiting { id, .. }
            | Self::Removed { id } => id,
        }
    }
}
