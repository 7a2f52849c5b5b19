use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RadixError {
    #[error(
        "parameter name conflict in '{pattern}': edge is bound as ':{existing}', pattern requests ':{requested}'"
    )]
    ParamNameConflict {
        pattern: String,
        existing: String,
        requested: String,
    },
    #[error(
        "wildcard name conflict in '{pattern}': edge is bound as '{existing}', pattern requests '{requested}'"
    )]
    WildcardNameConflict {
        pattern: String,
        existing: String,
        requested: String,
    },
    #[error("node arena is full at {nodes} nodes")]
    NodeLimit { nodes: usize },
}

pub type RadixResult<T> = Result<T, RadixError>;
