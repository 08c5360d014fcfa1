use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
