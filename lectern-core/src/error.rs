use thiserror::Error;

#[derive(Error, Debug)]
pub enum LecternError {
    #[error("Invalid talk time '{input}': {source}")]
    InvalidTime {
        input: String,
        #[source]
        source: chrono::format::ParseError,
    },

    #[error("Conference field '{field}' was never assigned")]
    UninitializedField { field: &'static str },
}

pub type LecternResult<T> = Result<T, LecternError>;
