/// Outbound adapters for the console, the filesystem and output formats
pub mod console;
pub mod filesystem;
pub mod formatters;
