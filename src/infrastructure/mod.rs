pub mod file_source;
pub mod in_memory;
