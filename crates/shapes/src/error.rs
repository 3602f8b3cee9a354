use std::io;

/// Why a shape could not be read from its input.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("'{token}' is not a number")]
    InvalidNumber { token: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    #[error("index {index} out of range for {len} shapes")]
    IndexOutOfRange { index: usize, len: usize },
}
