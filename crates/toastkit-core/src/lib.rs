//! Toastkit Core Library
//!
//! This crate provides the state core behind toast notifications:
//! - An ordered registry of live toasts with a capacity limit
//! - Per-toast dismiss countdowns that pause while hovered
//! - A grace period between dismissal and removal for exit animations
//! - Grouping of toasts by screen anchor for rendering
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     toastkit-core                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  toast/        - Provider, registry, countdowns, grouping   │
//! │  types/        - Toast records, options, events             │
//! │  config.rs     - Provider configuration                     │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use toastkit_core::{ToastOptions, ToastProvider, ToasterConfig};
//!
//! # async fn demo() -> toastkit_core::Result<()> {
//! let provider = ToastProvider::start(ToasterConfig::default())?;
//! let toaster = provider.toaster();
//!
//! let id = toaster.success("Saved", ToastOptions::new())?;
//! toaster.pause(&id)?;
//! toaster.resume(&id)?;
//! toaster.dismiss(&id)?;
//!
//! provider.shutdown();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod toast;
pub mod types;

// Re-export commonly used types
pub use config::ToasterConfig;
pub use error::{Error, Result};
pub use types::*;

pub use toast::{group_by_position, PositionBuckets, ToastProvider, Toaster};
