use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

#[derive(Debug)]
pub enum Error {
    /// The output surface could not be written to.
    SurfaceUnavailable(io::Error),
    Highlight(syntect::Error),
    /// hoedown handed back a buffer that is not utf-8.
    Markdown(Utf8Error),
    Config(toml::de::Error),
    ConfigFile(PathBuf, io::Error),
    InvalidHeadingLevel(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::SurfaceUnavailable(ref e) => write!(f, "output surface unavailable: {}", e),
            Error::Highlight(ref e) => write!(f, "syntax highlighting failed: {}", e),
            Error::Markdown(ref e) => write!(f, "markdown rendering failed: {}", e),
            Error::Config(ref e) => write!(f, "invalid configuration: {}", e),
            Error::ConfigFile(ref path, ref e) => {
                write!(f, "cannot read {}: {}", path.display(), e)
            }
            Error::InvalidHeadingLevel(l) => {
                write!(f, "heading level {} out of range (1 to 3)", l)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::SurfaceUnavailable(ref e) => Some(e),
            Error::Highlight(ref e) => Some(e),
            Error::Markdown(ref e) => Some(e),
            Error::Config(ref e) => Some(e),
            Error::ConfigFile(_, ref e) => Some(e),
            Error::InvalidHeadingLevel(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::SurfaceUnavailable(e)
    }
}

impl From<syntect::Error> for Error {
    fn from(e: syntect::Error) -> Error {
        Error::Highlight(e)
    }
}

impl From<Utf8Error> for Error {
    fn from(e: Utf8Error) -> Error {
        Error::Markdown(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Error {
        Error::Config(e)
    }
}
