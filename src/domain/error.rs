use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Illegal state: {0}")]
    IllegalState(String),

    #[error("Cannot withdraw {requested}. Current balance: {balance}")]
    InsufficientFunds { requested: Decimal, balance: Decimal },
}
