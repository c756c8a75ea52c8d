use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

pub const DEFAULT_VERIFY_URL: &str =
    "https://api-explorer-verify.testnet.abs.xyz/contract_verification";
pub const DEFAULT_EXPLORER_URL: &str = "https://explorer.testnet.abs.xyz";
pub const DEFAULT_BUILD_INFO_DIR: &str = "artifacts-zk/build-info";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 15;
/// Used when no contract metadata carries a `zk_version` marker.
pub const DEFAULT_ZKSOLC_VERSION: &str = "v1.5.10";

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
pub enum LoggingFormat {
    #[default]
    Text,
    Json,
}

/// Command line configuration. Every flag has a compiled-in default, so a
/// bare `claw-verify` invocation verifies the Abstract testnet deployment.
#[derive(Clone, Debug, Parser)]
pub struct Config {
    #[clap(
        long,
        default_value = DEFAULT_VERIFY_URL,
        help = "Submission endpoint of the explorer verification API."
    )]
    pub verify_url: String,

    #[clap(
        long,
        default_value = DEFAULT_EXPLORER_URL,
        help = "Explorer base URL, used for the links in the final report."
    )]
    pub explorer_url: String,

    #[clap(
        long,
        default_value = DEFAULT_BUILD_INFO_DIR,
        help = "Directory holding the hardhat-zksync build-info file."
    )]
    pub build_info_dir: PathBuf,

    #[clap(
        long,
        default_value = "3",
        value_parser = parsing::parse_seconds,
        help = "Seconds between status polls."
    )]
    pub poll_interval: Duration,

    #[clap(
        long,
        default_value_t = DEFAULT_MAX_POLL_ATTEMPTS,
        help = "Status polls per contract before giving up."
    )]
    pub max_poll_attempts: u32,

    #[clap(
        long,
        value_enum,
        default_value_t = LoggingFormat::default(),
        help = "Logging output format."
    )]
    pub logging_format: LoggingFormat,
}

mod parsing {
    use std::time::Duration;

    pub fn parse_seconds(string: &str) -> anyhow::Result<Duration> {
        Ok(Duration::from_secs(string.parse::<u64>()?))
    }
}
