//! Sink implementations

pub mod console;

pub use console::ConsoleSink;

pub use crate::core::Sink;
