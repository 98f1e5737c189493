//! Tracing subscriber setup.

mod setup;

pub use setup::{build_filter, init_tracing};
