use thiserror::Error;

#[derive(Error, Debug)]
pub enum LuhnError {
    #[error("Invalid digit sequence {0:?}: only 0-9 are allowed")]
    InvalidDigits(String),
    #[error("Prefix of {prefix_len} digits leaves no room for a check digit in {target_length}")]
    PrefixTooLong {
        prefix_len: usize,
        target_length: usize,
    },
    #[error("Target length {0} is too short, at least 2 digits are required")]
    TargetTooShort(usize),
    #[error("Cannot compute a check digit without payload digits")]
    EmptyPayload,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LuhnError>;
