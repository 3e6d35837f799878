use std::fmt;
use std::path::PathBuf;

use url::Url;

mod file;
mod http;
mod mapping;

pub use file::FileSource;
pub use http::HttpSource;
pub use mapping::decode_dataset;

/// Where the quiz dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    File(PathBuf),
    Url(Url),
}

impl DataLocation {
    /// Interpret a configured location: `http(s)` URLs are fetched remotely,
    /// everything else is treated as a filesystem path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DataLocation::Url(url),
            _ => DataLocation::File(PathBuf::from(trimmed)),
        }
    }
}

impl fmt::Display for DataLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLocation::File(path) => write!(f, "{}", path.display()),
            DataLocation::Url(url) => write!(f, "{url}"),
        }
    }
}
