use std::{error, fmt, io};

#[derive(Clone, Debug)]
pub enum Error {
    ImageFetchError(String),
    ImageDecodeError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ImageFetchError(err) => write!(f, "failed to fetch image: {}", err),
            Self::ImageDecodeError(err) => write!(f, "failed to decode image: {}", err),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        Self::ImageFetchError(err.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::ImageFetchError(err.to_string())
    }
}
