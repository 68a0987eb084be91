//! Where a catalog comes from.

use std::{fmt, path::PathBuf, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// `http://` or `https://` URL serving a JSON array.
    Url(String),
    /// Local JSON file.
    File(PathBuf),
    /// JSON piped on standard input (`-`).
    Stdin,
}

impl CatalogSource {
    /// Classify a user-supplied source string. Never fails: anything that is
    /// neither `-` nor an HTTP(S) URL is treated as a file path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == "-" {
            CatalogSource::Stdin
        } else if raw.starts_with("http://") || raw.starts_with("https://") {
            CatalogSource::Url(raw.to_string())
        } else {
            CatalogSource::File(PathBuf::from(raw))
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, CatalogSource::Stdin)
    }
}

impl FromStr for CatalogSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Url(url) => write!(f, "{url}"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Stdin => write!(f, "stdin"),
        }
    }
}
