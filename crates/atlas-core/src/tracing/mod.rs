//! Observability for the atlas engine.
//! `tracing` crate with `EnvFilter`, per-stage spans.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
