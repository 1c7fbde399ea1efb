//! Step definitions for board workflow BDD scenarios.

pub mod world;

mod given;
mod then;
mod when;
