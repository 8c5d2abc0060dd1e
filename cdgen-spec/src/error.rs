use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for specification-boundary operations (boxed to keep the
/// error off the happy path's stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the path of a parsed specification document (JSON)"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse specification document '{path}'")]
    #[diagnostic(
        code(cdgen::parse_error),
        help("the document must be the parser's JSON output, not raw YAML")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("path placeholder '{{{placeholder}}}' has no matching parameter")]
    #[diagnostic(
        code(cdgen::unmatched_placeholder),
        help(
            "declare a parameter named '{placeholder}' with \"in\": \"path\" on {method} {path}"
        )
    )]
    UnmatchedPlaceholder {
        path: String,
        method: String,
        placeholder: String,
    },
}

impl Error {
    /// Create a read error for the given document path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error for the given document path
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Box<Self> {
        Box::new(Error::Parse {
            path: path.into(),
            source,
        })
    }

    /// Create an unmatched-placeholder error
    pub fn unmatched_placeholder(
        path: impl Into<String>,
        method: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::UnmatchedPlaceholder {
            path: path.into(),
            method: method.into(),
            placeholder: placeholder.into(),
        })
    }
}
