use thiserror::Error;

use crate::api::{InvalidCapture, ValidationError};
use crate::model::ValueKind;

/// Format a failure into the uniform, single line error message.
///
/// An empty `category` omits the parenthetical.
///
/// ### Example
/// ```
/// # use clipp_builder as clipp;
/// use clipp::format_error_message;
///
/// assert_eq!(
///     format_error_message("unknown_option", "Unknown option: --nope"),
///     "Error (unknown_option): Unknown option: --nope. Please check the usage and try again."
/// );
/// assert_eq!(
///     format_error_message("", "Something broke"),
///     "Error: Something broke. Please check the usage and try again."
/// );
/// ```
pub fn format_error_message(category: &str, details: &str) -> String {
    let mut message = "Error".to_string();

    if !category.is_empty() {
        message.push_str(&format!(" ({category})"));
    }

    message.push_str(&format!(
        ": {details}. Please check the usage and try again."
    ));
    message
}

/// The parser was configured incorrectly (ex: a repeated option name in strict mode).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub(crate) struct ConfigError(pub(crate) String);

/// The first failure encountered while parsing the command line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A scanned token is empty or too long.
    #[error("{0}")]
    InvalidArgument(ValidationError),

    /// A token looks like an option, but no option is registered by that name.
    #[error("Unknown option: {token}")]
    UnknownOption {
        /// The offending token, as given.
        token: String,
    },

    /// A matched option could not take its value.
    #[error("Error parsing {name}: {cause}")]
    Parsing {
        /// The canonical name of the option.
        name: String,
        /// Why the value was rejected.
        cause: InvalidCapture,
    },

    /// A required option never appeared (only when enforcement is enabled).
    #[error("Missing required option: {name}")]
    MissingRequired {
        /// The name of the option.
        name: String,
    },

    /// The parser configuration was invalid.
    #[error("{reason}")]
    Config {
        /// What was wrong with the configuration.
        reason: String,
    },
}

impl From<ConfigError> for ParseError {
    fn from(error: ConfigError) -> Self {
        ParseError::Config { reason: error.0 }
    }
}

impl ParseError {
    /// The category shown in the formatted error message.
    pub fn category(&self) -> &'static str {
        match self {
            ParseError::InvalidArgument(_) => "invalid_argument",
            ParseError::UnknownOption { .. } => "unknown_option",
            ParseError::Parsing { .. } => "parsing",
            ParseError::MissingRequired { .. } => "missing_required",
            ParseError::Config { .. } => "config",
        }
    }

    /// The formatted error message, see [`format_error_message`].
    pub fn message(&self) -> String {
        format_error_message(self.category(), &self.to_string())
    }
}

/// The outcome of a single [`ArgumentParser::parse`](crate::ArgumentParser::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// Whether the whole argument list was parsed.
    pub success: bool,
    /// The formatted error message; empty on success.
    pub error_message: String,
    /// The structured failure, if any.
    pub error: Option<ParseError>,
}

impl ParseResult {
    pub(crate) fn complete() -> Self {
        Self {
            success: true,
            error_message: String::default(),
            error: None,
        }
    }

    pub(crate) fn failed(error: ParseError) -> Self {
        Self {
            success: false,
            error_message: error.message(),
            error: Some(error),
        }
    }
}

impl From<Result<(), ParseError>> for ParseResult {
    fn from(result: Result<(), ParseError>) -> Self {
        match result {
            Ok(()) => ParseResult::complete(),
            Err(error) => ParseResult::failed(error),
        }
    }
}

/// A typed value could not be retrieved from the parser.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RetrievalError {
    /// No option is registered by that name.
    #[error("Unknown argument: {name}")]
    UnknownArgument {
        /// The requested name.
        name: String,
    },

    /// The option holds a different type than the one requested.
    #[error("Type mismatch for argument: {name} (declared {declared}, requested {requested})")]
    TypeMismatch {
        /// The requested name.
        name: String,
        /// The kind the option was registered with.
        declared: ValueKind,
        /// The kind that was requested.
        requested: ValueKind,
    },
}
