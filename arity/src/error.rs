use std::{fmt, io};
use thiserror::Error;

/// The error returned when writing a rendering to an [`io::Write`] sink fails.
///
/// Rendering into a [`fmt::Write`] sink reports failure as a plain [`fmt::Error`]; only the
/// [`io`](crate::io) adapters produce this type, because only they have an underlying error worth
/// keeping.
#[derive(Debug, Error)]
pub enum Error {
    /// The sink itself failed.
    #[error("failed to write rendering to the output sink")]
    Io(#[from] io::Error),
    /// An element's [`Render`](crate::render::Render) impl failed without the sink failing.
    #[error("an element failed to render")]
    Format,
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::Format
    }
}
