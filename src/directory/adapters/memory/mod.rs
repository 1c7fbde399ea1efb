//! In-memory adapters for the directory context.

mod roster;

pub use roster::InMemoryUserDirectory;
