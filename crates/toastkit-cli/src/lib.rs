//! Toastkit terminal front end
//!
//! Renders the toast provider's position buckets as text, the way a UI layer
//! would lay them out on screen:
//!
//! ```text
//! [top-right]
//!   ✖ Connection lost (Retrying in 30s) [x] role=alert aria-live=assertive
//!   ✔ Saved: Document saved [x] role=status aria-live=polite
//! [bottom-right]
//!   ℹ 3 new comments [x] role=status aria-live=polite
//! ```

pub mod demo;
pub mod render;
pub mod settings;
pub mod state;
pub mod theme;

// Re-exports
pub use render::{render_board, render_toast};
pub use state::{BoardStats, ToastBoard};
pub use theme::{Rgba, Theme, ToastColors};
