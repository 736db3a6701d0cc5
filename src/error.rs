use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use winit::error::{EventLoopError, OsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => write!(f, "reading"),
            Access::Write => write!(f, "writing"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("No file provided.")]
    MissingArgument,

    #[error("Can't open file \"{}\" for {access}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        access: Access,
        #[source]
        source: io::Error,
    },

    /// Not a single face line could be read from the file.
    #[error("Can't read polygon data from file \"{}\".", .path.display())]
    EmptyOrUnparsable { path: PathBuf },

    #[error(transparent)]
    EventLoop(#[from] EventLoopError),

    #[error(transparent)]
    Os(#[from] OsError),
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        return Error::FileOpen {
            path: path.into(),
            access: Access::Read,
            source,
        };
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        return Error::FileOpen {
            path: path.into(),
            access: Access::Write,
            source,
        };
    }
}

pub type Result<T> = std::result::Result<T, Error>;
