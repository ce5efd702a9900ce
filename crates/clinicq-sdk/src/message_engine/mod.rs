//! MessageEngine - Main API for resolving queue messages
//!
//! # Architecture
//!
//! The module is organized into:
//! - `types`: output types (MessagePreview)
//! - `engine`: Core MessageEngine implementation
//! - `tests`: Unit tests (test-only)

mod engine;
mod types;

pub use engine::MessageEngine;
pub use types::MessagePreview;

#[cfg(test)]
mod tests;
