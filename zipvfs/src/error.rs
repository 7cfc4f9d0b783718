pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NotExist,
    NotDirectory,
    NotRegularFile,
    CorruptArchive(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotExist => write!(f, "file does not exist"),
            Error::NotDirectory => write!(f, "not a directory"),
            Error::NotRegularFile => write!(f, "not a regular file"),
            Error::CorruptArchive(ref msg) => write!(f, "corrupt archive: {msg}"),
            Error::IoError(ref err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::IoError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::IoError(error)
    }
}

impl std::convert::From<zip::result::ZipError> for Error {
    fn from(error: zip::result::ZipError) -> Error {
        match error {
            zip::result::ZipError::Io(err) => Error::IoError(err),
            other => Error::CorruptArchive(other.to_string()),
        }
    }
}

impl std::convert::From<base64::DecodeError> for Error {
    fn from(error: base64::DecodeError) -> Error {
        Error::CorruptArchive(error.to_string())
    }
}

impl std::convert::From<Error> for std::io::Error {
    fn from(error: Error) -> std::io::Error {
        match error {
            Error::IoError(err) => err,
            Error::NotExist => std::io::Error::new(std::io::ErrorKind::NotFound, Error::NotExist),
            other => std::io::Error::new(std::io::ErrorKind::Other, other),
        }
    }
}
