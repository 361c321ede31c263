//! Core vending types: selections, items, money and the machine itself.

pub mod command;
pub mod item;
pub mod machine;
pub mod money;
pub mod ports;
pub mod selection;
