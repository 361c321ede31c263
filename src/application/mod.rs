//! Application layer: loading a machine's inventory and driving the machine.
//!
//! `loader` turns an injected seed document into a typed inventory, and
//! `service` serializes access to a machine shared across tasks.

pub mod loader;
pub mod service;
