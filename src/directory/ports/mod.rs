//! Port contracts for the directory context.

mod roster;

pub use roster::{UserDirectory, UserDirectoryError, UserDirectoryResult};
