use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlossError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Invalid flexcode [no number]: {0}")]
    InvalidFlexcode(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Server error: {0}")]
    Server(String),
    #[error("Usage: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, GlossError>;

// Helper conversions
impl From<config::ConfigError> for GlossError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<std::io::Error> for GlossError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}
