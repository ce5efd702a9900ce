//! ClinicQ Runtime - Message condition resolution engine
//!
//! Given a queue's current serving position and its prioritized message
//! conditions, this crate decides which template (if any) applies to each
//! patient, renders it, and separately detects conflicting condition
//! definitions.
//!
//! Components, leaf-first:
//! - `offset`: signed distance from the currently served position
//! - `renderer`: placeholder substitution and ETR formatting
//! - `matcher`: evaluates one condition against one offset
//! - `resolver`: picks exactly one outcome per patient
//! - `conflict`: advisory overlap / duplicate-DEFAULT detection
//!
//! Everything here is synchronous and side-effect free apart from the
//! injected `ResolutionObserver`.

pub mod conflict;
pub mod matcher;
pub mod observability;
pub mod offset;
pub mod options;
pub mod renderer;
pub mod resolver;

// Re-export main types
pub use conflict::ConflictDetector;
pub use matcher::ConditionMatcher;
pub use observability::{
    CompositeObserver, Counter, Histogram, Metrics, MetricsCollector, MetricsObserver,
    NoopObserver, ResolutionObserver, SkipReason, TracingObserver,
};
pub use offset::{OffsetCalculator, QueueStanding};
pub use options::{ResolveOptions, DEFAULT_ESTIMATED_MINUTES_PER_SESSION};
pub use renderer::{PlaceholderContext, PlaceholderRenderer};
pub use resolver::PriorityResolver;
