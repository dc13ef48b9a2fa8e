//! Shared utilities for the agora election engine.

pub mod logging;

pub use logging::init_tracing;
