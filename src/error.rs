mod error_kind;

use anyhow::anyhow;
use std::fmt::{Debug, Display, Formatter};

pub use error_kind::ErrorKind;

/// Voicemail bridge native error type.
#[derive(thiserror::Error)]
pub struct Error {
    root_cause: anyhow::Error,
    kind: ErrorKind,
}

impl Error {
    /// Creates a "resource not found" error instance with the given message.
    #[cfg(test)]
    pub fn resource_not_found<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::ResourceNotFound,
        }
    }

    /// Creates a "resource not found" error instance with the given root cause.
    pub fn resource_not_found_with_root_cause(root_cause: anyhow::Error) -> Self {
        Self {
            root_cause,
            kind: ErrorKind::ResourceNotFound,
        }
    }

    /// Creates a "user not found" error instance with the given message.
    pub fn user_not_found<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::UserNotFound,
        }
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the kind of the native error wrapped into the specified error, or
    /// `ErrorKind::Unknown` if the chain doesn't contain one.
    pub fn kind_of(err: &anyhow::Error) -> ErrorKind {
        err.downcast_ref::<Error>()
            .map(Error::kind)
            .unwrap_or(ErrorKind::Unknown)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#}", self.root_cause)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        err.downcast::<Error>().unwrap_or_else(|root_cause| Error {
            root_cause,
            kind: ErrorKind::Unknown,
        })
    }
}
