//! CSV command scripts in, inventory reports out.

pub mod command_reader;
pub mod inventory_writer;
