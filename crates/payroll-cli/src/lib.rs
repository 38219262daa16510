//! Library side of the `boletas` command-line tool.

pub mod logging;
pub mod pipeline;
pub mod types;
