// Infrastructure module - External dependencies and adapters
pub mod adb;
pub mod config;
pub mod logging;
