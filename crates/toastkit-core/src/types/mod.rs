//! Core type definitions for Toastkit
//!
//! This module contains the shared types used across the crate: toast
//! records, per-call options, variants, anchor positions and change events.

mod toast_types;

pub use toast_types::*;
