//! Step definitions for taxonomy administration BDD scenarios.

pub mod world;

mod given;
mod then;
mod when;
