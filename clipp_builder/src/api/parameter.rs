use crate::api::capture::TypedCapture;
use crate::api::convert::Convertible;
use crate::parser::OptionEntry;

/// An option declaration, consumed by [`ArgumentParser::add`](crate::ArgumentParser::add).
///
/// Names are given in their command line form (ex: `-f` and `--file`); an empty name is treated as absent.
///
/// ### Example
/// ```
/// # use clipp_builder as clipp;
/// use clipp::{ArgumentParser, Parameter};
///
/// let mut parser = ArgumentParser::new("program");
/// parser.add(
///     Parameter::<i32>::new("-n", "--count")
///         .description("Number of items")
///         .default(10),
/// );
///
/// let result = parser.parse(vec!["program", "-n", "3"]);
/// assert!(result.success);
/// assert_eq!(parser.get::<i32>("--count").unwrap(), 3);
/// ```
pub struct Parameter<T: Convertible> {
    short_name: Option<String>,
    long_name: Option<String>,
    description: String,
    required: bool,
    default: Option<T>,
}

fn non_empty(name: String) -> Option<String> {
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

impl<T: Convertible> Parameter<T> {
    /// Declare an option by its short and/or long name.
    pub fn new(short_name: impl Into<String>, long_name: impl Into<String>) -> Self {
        Self {
            short_name: non_empty(short_name.into()),
            long_name: non_empty(long_name.into()),
            description: String::default(),
            required: false,
            default: None,
        }
    }

    /// Document the option for the usage text.
    /// If repeated, only the final description will apply.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the option as required.
    ///
    /// Presence is only checked when the parser is configured with
    /// [`ArgumentParser::enforce_required`](crate::ArgumentParser::enforce_required).
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the value held when the option does not appear on the command line.
    pub fn default(mut self, value: T) -> Self {
        self.default.replace(value);
        self
    }

    pub(crate) fn into_entry(self) -> OptionEntry {
        let Parameter {
            short_name,
            long_name,
            description,
            required,
            default,
        } = self;

        OptionEntry::new(
            short_name,
            long_name,
            description,
            required,
            Box::new(TypedCapture::new(default)),
        )
    }
}
