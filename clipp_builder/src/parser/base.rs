use std::collections::HashMap;

use crate::api::{validate_argument, validate_index, Convertible};
use crate::constant::{LONG_PREFIX, SHORT_PREFIX};
use crate::parser::entry::OptionEntry;
use crate::parser::error::{ConfigError, ParseError, RetrievalError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A stable reference to an option in the parser's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct OptionHandle(usize);

/// How a single scanned token is read.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// `--name`.
    Long(&'t str),
    /// `-name`; clusters such as `-abc` are a single name.
    Short(&'t str),
    /// Anything else, including a lone `-`.
    Positional,
}

impl<'t> Token<'t> {
    pub(crate) fn read(token: &'t str) -> Self {
        if token.len() > 1 && token.starts_with(SHORT_PREFIX) {
            if token.starts_with(LONG_PREFIX) {
                Token::Long(token)
            } else {
                Token::Short(token)
            }
        } else {
            Token::Positional
        }
    }

    /// The lookup key: `--name` or `-x`.
    pub(crate) fn canonical(&self) -> Option<&'t str> {
        match *self {
            Token::Long(name) | Token::Short(name) => Some(name),
            Token::Positional => None,
        }
    }
}

/// Owns every registered option, and runs the scan over the argument list.
pub(crate) struct Parser {
    entries: Vec<OptionEntry>,
    index: HashMap<String, OptionHandle>,
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("entries", &self.entries)
            .finish()
    }
}

impl Parser {
    pub(crate) fn empty() -> Self {
        Self {
            entries: Vec::default(),
            index: HashMap::default(),
        }
    }

    /// Add the option to the arena and index its names.
    ///
    /// A name that is already indexed is re-pointed to the new option, unless `strict`, in which case nothing is registered.
    pub(crate) fn register(
        &mut self,
        entry: OptionEntry,
        strict: bool,
    ) -> Result<OptionHandle, ConfigError> {
        if entry.names().next().is_none() {
            return Err(ConfigError(format!(
                "option '{}' must have a short or long name",
                entry.description()
            )));
        }

        if strict {
            if let Some(name) = entry.short_name().filter(|name| Some(*name) == entry.long_name()) {
                return Err(ConfigError(format!(
                    "option name '{name}' is given as both the short and long name"
                )));
            }

            if let Some(name) = entry.names().find(|name| self.index.contains_key(*name)) {
                return Err(ConfigError(format!(
                    "option name '{name}' is already registered"
                )));
            }
        }

        let handle = OptionHandle(self.entries.len());

        for name in entry.names() {
            if self.index.insert(name.to_string(), handle).is_some() {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Option name '{name}' re-registered, overwriting the previous option.");
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registered {entry:?} as {handle:?}.");
        }

        self.entries.push(entry);
        Ok(handle)
    }

    pub(crate) fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    fn lookup(&self, name: &str) -> Option<&OptionEntry> {
        self.index
            .get(name)
            .map(|OptionHandle(offset)| &self.entries[*offset])
    }

    /// Scan the tokens left to right, skipping the program name at position 0.
    ///
    /// Each matched option consumes precisely the next token as its value.
    /// The first failure aborts the scan; values captured before it remain set.
    pub(crate) fn consume(&mut self, tokens: &[String]) -> Result<(), ParseError> {
        let count = tokens.len();
        let mut i = 1;

        while i < count {
            let token = tokens[i].as_str();
            validate_argument(token).map_err(ParseError::InvalidArgument)?;

            match Token::read(token).canonical() {
                Some(name) => {
                    let OptionHandle(offset) =
                        *self
                            .index
                            .get(name)
                            .ok_or_else(|| ParseError::UnknownOption {
                                token: token.to_string(),
                            })?;
                    i += 1;
                    validate_index(i, count).map_err(|error| ParseError::Parsing {
                        name: name.to_string(),
                        cause: error.into(),
                    })?;
                    self.entries[offset]
                        .set_value(&tokens[i])
                        .map_err(|cause| ParseError::Parsing {
                            name: name.to_string(),
                            cause,
                        })?;

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Matched '{name}' with value '{}'.", tokens[i]);
                    }
                }
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Skipping positional token '{token}'.");
                    }
                }
            }

            i += 1;
        }

        Ok(())
    }

    /// The first required option, in registration order, which has not been parsed.
    pub(crate) fn missing_required(&self) -> Option<&OptionEntry> {
        self.entries
            .iter()
            .find(|entry| entry.required() && !entry.parsed())
    }

    pub(crate) fn get<T: Convertible>(&self, name: &str) -> Result<T, RetrievalError> {
        let entry = self
            .lookup(name)
            .ok_or_else(|| RetrievalError::UnknownArgument {
                name: name.to_string(),
            })?;

        entry
            .value::<T>()
            .cloned()
            .ok_or_else(|| RetrievalError::TypeMismatch {
                name: name.to_string(),
                declared: entry.kind(),
                requested: T::KIND,
            })
    }
}
