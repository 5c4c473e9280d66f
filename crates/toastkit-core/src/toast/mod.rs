//! Toast lifecycle management
//!
//! This module handles:
//! - Toast registry (creation, capacity eviction, removal)
//! - Dismiss countdowns, pausable on hover
//! - Grouping live toasts by screen position
//! - The provider that ties them to tokio timers

mod grouper;
mod provider;
mod registry;
mod scheduler;

pub use grouper::{group_by_position, PositionBuckets};
pub use provider::{ToastProvider, Toaster};
pub use scheduler::{Arm, Countdown};
