//! Graft Core Types
//!
//! This crate provides the foundational types used throughout the graft
//! binding engine:
//! - Identity types (ElementId)
//! - The Document collaborator trait (element queries and attribute reads)
//! - The Construct capability trait with the Constructor and Instance aliases

mod component;
mod dom;
mod id;

pub use component::*;
pub use dom::*;
pub use id::*;
