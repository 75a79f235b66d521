use std::path::PathBuf;
use thiserror::Error;

/// Defines errors found while reading configuration data
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required key is absent
    #[error("missing required key '{path}'")]
    MissingKey { path: String },

    /// A key is present but holds a value of another type
    #[error("key '{path}' must be {expected}")]
    WrongType { path: String, expected: &'static str },

    /// The type tag does not name the model being created
    #[error("'{path}' is '{found}' but '{expected}' was expected")]
    TagMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    /// The type tag does not name any available model
    #[error("'{path}' names an unknown model type '{found}'")]
    UnknownModelType { path: String, found: String },

    /// Some keys were never read by the factory
    #[error("unused keys in '{path}': {}", .keys.join(", "))]
    UnusedKeys { path: String, keys: Vec<String> },

    /// The node is not a key/value object
    #[error("'{path}' must be an object")]
    NotAnObject { path: String },

    /// The space dimension is neither 2 nor 3
    #[error("space dimension must be 2 or 3, got {ndim}")]
    UnsupportedDimension { ndim: usize },

    /// Malformed JSON
    #[error("cannot parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input file cannot be read
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Defines the errors returned by the parameter registry and the model factories
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration data is missing, has the wrong type, or names the wrong model
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The parameter named by a configuration key is not in the registry
    #[error("parameter '{name}' (requested by key '{key}') does not exist")]
    ParameterNotFound { key: String, name: String },

    /// The parameter exists but has a different number of components
    #[error("parameter '{name}' (requested by key '{key}') has {actual} components but {expected} are required")]
    ParameterCardinality {
        key: String,
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Two parameters with the same name were added to the registry
    #[error("parameter '{name}' is defined more than once")]
    DuplicateParameter { name: String },

    /// The parameter definition is inconsistent
    #[error("parameter '{name}' is invalid: {reason}")]
    InvalidParameter { name: String, reason: &'static str },
}

/// Classifies errors into the categories callers usually branch on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or mistyped configuration entries (includes tag mismatches)
    Configuration,

    /// A named parameter does not exist
    ParameterNotFound,

    /// A named parameter has the wrong number of components
    ParameterCardinality,

    /// The parameter registry itself is inconsistent
    Parameter,
}

impl Error {
    /// Returns the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration(..) => ErrorKind::Configuration,
            Error::ParameterNotFound { .. } => ErrorKind::ParameterNotFound,
            Error::ParameterCardinality { .. } => ErrorKind::ParameterCardinality,
            Error::DuplicateParameter { .. } | Error::InvalidParameter { .. } => ErrorKind::Parameter,
        }
    }
}

/// Result type for the parameter registry and the model factories
pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
