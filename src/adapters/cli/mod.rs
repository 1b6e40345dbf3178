//! CLI Adapter

mod commands;

pub use commands::{CliApp, Command, ConvertCmd, ScanCmd};
