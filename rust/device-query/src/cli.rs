use crate::query::{QueryOptions, DEFAULT_COMMAND};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const DEFAULT_TESTBED_FILE: &str = "devnet_sbx_testbed.yml";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "device-query",
    version,
    about = "Run a show command on the devices of a testbed and print the parsed result",
    after_help = "Usage: 'device-query -t devnet_sbx_testbed_secure.yml -s'"
)]
pub struct Args {
    /// Show command to execute on each device
    #[arg(short, long, default_value = DEFAULT_COMMAND)]
    pub command: String,

    /// Save the results payload to <device>.json in the current directory
    #[arg(short, long)]
    pub save: bool,

    /// Testbed file to use
    #[arg(short, long = "testbed_file", env = "TESTBED_FILE", default_value = DEFAULT_TESTBED_FILE)]
    pub testbed_file: PathBuf,

    /// Turn off the device session output on standard out
    #[arg(short, long = "log_to_stdout", action = ArgAction::SetFalse)]
    pub log_to_stdout: bool,
}

impl Args {
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            command: self.command.clone(),
            save: self.save,
            log_stdout: self.log_to_stdout,
            ..Default::default()
        }
    }
}
