//! Crate-wide error type, a thin wrapper around anyhow.

use std::fmt;

/// Wrapper around [`anyhow::Error`].
///
/// Any error that can be converted into `anyhow::Error` converts directly
/// into this type, so `?` works on io, figment and tera errors alike.
///
/// [`anyhow::Error`]: https://docs.rs/anyhow/1.0/anyhow/struct.Error.html
#[derive(Debug)]
pub struct Error {
    pub error: anyhow::Error,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl<E> From<E> for Error
where
    E: Into<anyhow::Error>,
{
    fn from(error: E) -> Self {
        Error {
            error: error.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.error)
    }
}
