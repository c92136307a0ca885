// CLI module - Command line interface
pub mod args;
pub mod commands;
pub mod output;

pub use args::{Action, Args, OutputFormat};
pub use commands::{execute_command, report_error};
pub use output::{ConsoleWriter, OutputWriter};
