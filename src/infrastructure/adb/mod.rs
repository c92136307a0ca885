// adb module - External bridge tool invocation
pub mod bridge;
pub mod runner;

pub use bridge::Bridge;
pub use runner::{locate_tool, CommandRunner, ProcessRunner};
