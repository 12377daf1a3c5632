use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tree error: {0}")]
    Tree(String),

    #[error("Dispatch error: {0}")]
    Dispatch(String),

    #[error("Launch error: {0}")]
    Launch(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialize error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub type BotResult<T> = Result<T, BotError>;
