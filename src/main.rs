use std::{env, fs::File};

use teller::{
    BankAccount, config::Config, dlq::StdErrDLQ, engine::Engine, ingestion::CsvReader,
    output::CsvOutput,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = Config::from_args(env::args().skip(1))?;
    let file = File::open(&config.script)?;

    let account = BankAccount::with_balance(
        config.account_number,
        config.owner_name,
        config.initial_balance,
    );
    let mut engine = Engine::new(CsvReader::new(file), account, StdErrDLQ::default());

    engine.process().await?;
    info!(rejected = engine.dlq().rejected(), "replay complete");

    let mut output = CsvOutput::new(std::io::stdout());
    engine.flush(&mut output)?;

    Ok(())
}
