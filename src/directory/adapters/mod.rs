//! Adapter implementations for the directory context.

pub mod memory;
