use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// End of stream reached while a record was still being accumulated.
    /// `offset` is the synthetic offset the truncated record would have
    /// carried.
    UnterminatedRecord { offset: u64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "io error: {err}"),
            Error::UnterminatedRecord { offset } => {
                write!(f, "unterminated record at offset {offset}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
