use std::process::ExitCode;

use claimer::claim_for_all;
use config::Config;
use humanity::HumanityApi;
use reqwest::Client;

use logger::init_default_logger;

mod account;
mod claimer;
mod config;
mod constants;
mod countdown;
mod errors;
mod http;
mod humanity;
mod logger;
mod utils;

#[cfg(test)]
mod test_utils;

#[tokio::main]
async fn main() -> ExitCode {
    let _guard = init_default_logger();

    exit_code(run().await)
}

/// Fatal errors are reported once, through the logger.
fn exit_code(result: eyre::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> eyre::Result<()> {
    let config = Config::read_default().await?;
    let api = HumanityApi::new(Client::new());

    claim_for_all(config, api).await
}
