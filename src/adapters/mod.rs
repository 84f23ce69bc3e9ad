/// Adapters layer - file, console and format implementations of the ports
///
/// Nothing outside this layer touches the filesystem or the terminal.
pub mod outbound;
