use std::{env, io, process::ExitCode};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use claw_verify::{
    build_info::BuildInfo,
    config::{Config, LoggingFormat, DEFAULT_ZKSOLC_VERSION},
    registry::contract_registry,
    verify::{verify_contracts, CompilerVersions, PollPolicy},
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use verifier_client::VerifierApi;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let config = Config::parse();
    init_logging(config.logging_format)?;

    info!("Claw Domains direct contract verification");

    let build_info = BuildInfo::load_from_dir(&config.build_info_dir)
        .context("Loading the build-info file failed")?;
    let compilers = CompilerVersions {
        solc: build_info.solc_version.clone(),
        zksolc: build_info
            .zksolc_version()
            .unwrap_or_else(|| DEFAULT_ZKSOLC_VERSION.to_string()),
    };
    info!(
        solc = %compilers.solc,
        zksolc = %compilers.zksolc,
        "Resolved compiler versions"
    );

    let api = VerifierApi::try_new(config.verify_url.as_str())?;
    let policy = PollPolicy {
        interval: config.poll_interval,
        max_attempts: config.max_poll_attempts,
    };

    let report = verify_contracts(
        &api,
        &contract_registry(),
        &build_info.input,
        &compilers,
        policy,
    )
    .await;

    println!("{}", report.render(&config.explorer_url));

    Ok(if report.all_verified() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging(format: LoggingFormat) -> Result<()> {
    const LOG_CONFIGURATION_ENVVAR: &str = "RUST_LOG";

    let filter = EnvFilter::new(
        env::var(LOG_CONFIGURATION_ENVVAR)
            .as_deref()
            .unwrap_or("info"),
    );

    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stdout)
        .with_target(true)
        .with_env_filter(filter);

    match format {
        LoggingFormat::Json => subscriber.json().try_init(),
        LoggingFormat::Text => subscriber.try_init(),
    }
    .map_err(|err| anyhow!(err))
}
