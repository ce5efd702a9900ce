//! Observability module
//!
//! The resolver never logs directly. It reports what happened to an injected
//! [`ResolutionObserver`], so resolution itself stays side-effect free.
//!
//! This module includes:
//! - The observer capability and its no-op, tracing and composite forms
//! - Counter/histogram metrics and an observer that feeds them

pub mod metrics;
pub mod observer;

pub use metrics::{Counter, Histogram, Metrics, MetricsCollector, MetricsObserver};
pub use observer::{
    CompositeObserver, NoopObserver, ResolutionObserver, SkipReason, TracingObserver,
};
