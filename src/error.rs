use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("no keysym named {0:?}")]
    UnknownKeysym(String),

    #[error("HOME is not set")]
    HomeNotSet,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
