//! Message conditions
//!
//! A message condition attaches a template to a numeric criterion on the
//! patient's offset from the currently served queue position.
//!
//! # Operators
//!
//! | operator | criterion |
//! |---|---|
//! | `EQUAL` | `offset == value` |
//! | `GREATER` | `offset > value` |
//! | `LESS` | `offset < value` |
//! | `RANGE` | `minValue <= offset <= maxValue` |
//! | `DEFAULT` | none, per-queue fallback |
//! | `UNCONDITIONED` | none, last-resort fallback |
//!
//! # Example
//!
//! ```yaml
//! - id: near
//!   operator: RANGE
//!   minValue: 1
//!   maxValue: 5
//!   priority: 1
//!   template: "قريب: {PQP}"
//! ```

mod operator;
mod types;

pub use operator::ConditionOperator;
pub use types::{FieldFault, MessageCondition};
