use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphWalkError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl GraphWalkError {
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        GraphWalkError::InvalidInput(msg.into())
    }

    pub fn parse<T: Into<String>>(msg: T) -> Self {
        GraphWalkError::Parse(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        GraphWalkError::Io(msg.into())
    }

    pub fn unknown_algorithm<T: Into<String>>(tag: T) -> Self {
        GraphWalkError::UnknownAlgorithm(tag.into())
    }
}
