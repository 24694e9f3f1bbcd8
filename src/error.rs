//! 应用错误类型

use thiserror::Error;

/// 使用本模块 Error 的 Result 别名
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse preferences: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to serialize preferences: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Unsupported language code: {code}")]
    UnknownLanguage { code: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }
}
