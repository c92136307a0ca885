use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::PathBuf;

/// Command line arguments for liberate
#[derive(Parser, Debug)]
#[command(
    name = "liberate",
    about = "Liberate your Android devices from USB cables",
    long_about = "Lists the devices attached to adb and switches a chosen device to a wireless adb connection.",
    override_usage = "liberate <options>",
    disable_version_flag = true,
    disable_help_flag = true
)]
pub struct Args {
    /// list connected devices
    #[arg(short = 'l', long)]
    pub list: bool,

    /// liberate a specific device
    #[arg(short = 'd', long, value_name = "KEY")]
    pub device: Option<String>,

    /// disconnect the specified device from WiFi
    #[arg(short = 'x', long, value_name = "KEY")]
    pub disconnect: Option<String>,

    /// show version number
    #[arg(short = 'v', long)]
    pub version: bool,

    /// show this message
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for the device list
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// What one invocation does. Only one action runs; when several action
/// flags are given, the one appearing first on the command line wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Liberate(String),
    Disconnect(String),
    Version,
    Help,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Aligned columns
    Text,
    /// JSON output
    Json,
    /// Boxed table output
    Table,
    /// CSV output
    Csv,
}

impl Args {
    /// Parse arguments and pick the action to run
    pub fn try_parse_action_from<I, T>(itr: I) -> Result<(Self, Action), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(itr)?;
        let args = Self::from_arg_matches(&matches)?;
        let action = Action::from_matches(&matches);
        Ok((args, action))
    }
}

impl Action {
    fn from_matches(matches: &ArgMatches) -> Self {
        let mut given: Vec<(usize, Action)> = Vec::new();

        if let Some(index) = command_line_index(matches, "list") {
            given.push((index, Action::List));
        }
        if let Some(index) = command_line_index(matches, "device") {
            if let Some(key) = matches.get_one::<String>("device") {
                given.push((index, Action::Liberate(key.clone())));
            }
        }
        if let Some(index) = command_line_index(matches, "disconnect") {
            if let Some(key) = matches.get_one::<String>("disconnect") {
                given.push((index, Action::Disconnect(key.clone())));
            }
        }
        if let Some(index) = command_line_index(matches, "version") {
            given.push((index, Action::Version));
        }
        if let Some(index) = command_line_index(matches, "help") {
            given.push((index, Action::Help));
        }

        given
            .into_iter()
            .min_by_key(|(index, _)| *index)
            .map(|(_, action)| action)
            .unwrap_or(Action::Help)
    }
}

fn command_line_index(matches: &ArgMatches, id: &str) -> Option<usize> {
    if matches.value_source(id) != Some(ValueSource::CommandLine) {
        return None;
    }
    matches.index_of(id)
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
