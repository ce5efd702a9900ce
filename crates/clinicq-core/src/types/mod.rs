//! Loosely-typed values carried by condition configuration

pub mod value;

pub use value::Value;
