//! Application wiring (builder + top-level controller).

pub mod builder;

pub use self::builder::{BuildError, TaskApp, TaskAppBuilder};
