//! Graft Binder
//!
//! The binding engine. A [`Binder`] scans a document subtree for elements
//! carrying the configured marker attribute, resolves each declared name
//! to a constructor (exact registry lookup first, policy fallback second),
//! and mounts at most one component instance per element.
//!
//! Responsibilities:
//! - Validated construction from a configuration surface
//! - Resolution: registry exact match, then first-match-wins policies
//! - Idempotent mounting keyed on element identity
//! - Instance bookkeeping and the synchronous post-mount hook

mod binder;
mod config;
mod tracker;

pub use binder::{Binder, MountHook};
pub use config::{BinderBuilder, ConfigError, ConfigResult};
pub use tracker::MountTracker;
