//! A vending machine simulator.
//!
//! A machine is seeded once from a JSON inventory document (see
//! [`application::loader`]) and then driven through deposits and vends,
//! either directly through [`domain::machine::VendingMachine`] or through the
//! lock-guarded [`application::service::VendingService`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod observability;
