#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] actionrepo_core::validate::ValidationError),

    #[error("Failed to write log entry: {0}")]
    LogWrite(#[source] std::io::Error),
}
