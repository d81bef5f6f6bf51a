use std::env;

use crate::api::{Convertible, Parameter};
use crate::parser::{
    ConfigError, ConsoleInterface, ParseError, ParseResult, Parser, Printer, RetrievalError,
    UserInterface,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line option parser.
///
/// Use proceeds in three phases: register options, parse the argument list, then retrieve typed values.
///
/// ### Example
/// ```
/// # use clipp_builder as clipp;
/// use clipp::ArgumentParser;
///
/// let mut parser = ArgumentParser::new("program").about("My program that does awesome stuff.");
/// parser
///     .add_option::<String>("-f", "--file", "Input file path", true, None)
///     .add_option("-n", "--count", "Number of items", false, Some(10))
///     .add_option::<Vec<i32>>("-v", "--values", "List of values", false, None);
///
/// let result = parser.parse(vec!["program", "-f", "input.txt", "-v", "1,2,3"]);
/// assert!(result.success, "{}", result.error_message);
///
/// assert_eq!(parser.get::<String>("--file").unwrap(), "input.txt");
/// assert_eq!(parser.get::<i32>("--count").unwrap(), 10);
/// assert_eq!(parser.get::<Vec<i32>>("-v").unwrap(), vec![1, 2, 3]);
/// ```
pub struct ArgumentParser {
    program: String,
    about: Option<String>,
    strict: bool,
    enforce_required: bool,
    parser: Parser,
    args: Vec<String>,
    deferred_error: Option<ConfigError>,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for ArgumentParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentParser")
            .field("program", &self.program)
            .field("parser", &self.parser)
            .field("args", &self.args)
            .finish()
    }
}

impl ArgumentParser {
    /// Create a parser for the named program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            strict: false,
            enforce_required: false,
            parser: Parser::empty(),
            args: Vec::default(),
            deferred_error: None,
            user_interface: Box::new(ConsoleInterface::default()),
        }
    }

    /// Create a parser for the named program, documented by `description`.
    pub fn with_description(program: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(program).about(description)
    }

    /// Document the program for the usage text.
    /// If repeated, only the final description will apply; an empty description is not shown.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        let description = description.into();

        if description.is_empty() {
            self.about = None;
        } else {
            self.about.replace(description);
        }

        self
    }

    /// Reject options whose short or long name is already registered.
    ///
    /// Applies to options added after this call.
    /// When off (the default), a repeated name silently re-points to the newest option.
    /// Rejections are reported by the next [`ArgumentParser::parse`], with the category `config`.
    ///
    /// ### Example
    /// ```
    /// # use clipp_builder as clipp;
    /// use clipp::ArgumentParser;
    ///
    /// let mut parser = ArgumentParser::new("program").strict(true);
    /// parser
    ///     .add_option::<i32>("-n", "--count", "", false, None)
    ///     .add_option::<String>("-n", "--name", "", false, None);
    ///
    /// let result = parser.parse(vec!["program"]);
    /// assert!(!result.success);
    /// assert!(result.error_message.starts_with("Error (config)"));
    /// ```
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Fail the parse when an option marked required never appears.
    ///
    /// Off by default: a missing required option keeps its default.
    ///
    /// ### Example
    /// ```
    /// # use clipp_builder as clipp;
    /// use clipp::ArgumentParser;
    ///
    /// let mut parser = ArgumentParser::new("program").enforce_required(true);
    /// parser.add_option::<String>("-f", "--file", "Input file path", true, None);
    ///
    /// let result = parser.parse(vec!["program"]);
    /// assert!(!result.success);
    /// assert!(result.error_message.contains("--file"));
    /// ```
    pub fn enforce_required(mut self, enforce: bool) -> Self {
        self.enforce_required = enforce;
        self
    }

    /// Register an option.
    ///
    /// Options are shown in the usage text in the order they are added.
    pub fn add<T: Convertible>(&mut self, parameter: Parameter<T>) -> &mut Self {
        if let Err(error) = self.parser.register(parameter.into_entry(), self.strict) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Deferring configuration failure: {error}.");
            }

            self.deferred_error.get_or_insert(error);
        }

        self
    }

    /// Register an option of type `T`.
    ///
    /// Names are given in command line form (ex: `-f`, `--file`); pass an empty name to omit it.
    /// Equivalent to [`ArgumentParser::add`] with a [`Parameter`].
    pub fn add_option<T: Convertible>(
        &mut self,
        short_name: &str,
        long_name: &str,
        description: &str,
        required: bool,
        default: Option<T>,
    ) -> &mut Self {
        let mut parameter =
            Parameter::<T>::new(short_name, long_name).description(description);

        if required {
            parameter = parameter.required();
        }

        if let Some(value) = default {
            parameter = parameter.default(value);
        }

        self.add(parameter)
    }

    /// Run the parser against the argument list.
    ///
    /// The first argument is the program name; it is recorded but not scanned.
    /// Every recognised option consumes precisely the next argument as its value.
    /// Other arguments are skipped, and may be read back via [`ArgumentParser::get_args`].
    ///
    /// Parsing stops at the first failure, which is reported in the returned [`ParseResult`].
    pub fn parse<I, S>(&mut self, args: I) -> ParseResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect();
        let result = self.consume();

        #[cfg(feature = "tracing_debug")]
        {
            if let Err(error) = &result {
                debug!("Parse of {:?} failed: {error}.", self.args);
            }
        }

        ParseResult::from(result)
    }

    /// Run the parser against the Cli [`env::args`].
    pub fn parse_env(&mut self) -> ParseResult {
        self.parse(env::args())
    }

    fn consume(&mut self) -> Result<(), ParseError> {
        if let Some(error) = &self.deferred_error {
            return Err(error.clone().into());
        }

        self.parser.consume(&self.args)?;

        if self.enforce_required {
            if let Some(entry) = self.parser.missing_required() {
                return Err(ParseError::MissingRequired {
                    name: entry.display_name().to_string(),
                });
            }
        }

        Ok(())
    }

    /// Get the value of the option registered under `name` (ex: `--count` or `-n`).
    ///
    /// An option which did not appear holds its default, or `T::default()` when no default was given.
    pub fn get<T: Convertible>(&self, name: &str) -> Result<T, RetrievalError> {
        self.parser.get(name)
    }

    /// The full argument list of the most recent parse, including the program name.
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// The program name given at construction.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The usage text, with one line per option in registration order.
    pub fn usage(&self) -> String {
        Printer::new(
            &self.program,
            self.about.as_deref(),
            self.parser.entries(),
            None,
        )
        .render()
        .join("\n")
    }

    /// Print the usage text, wrapped to the width of the terminal.
    pub fn print_usage(&self) {
        Printer::terminal(&self.program, self.about.as_deref(), self.parser.entries())
            .print_usage(&*self.user_interface);
    }

    #[cfg(test)]
    pub(crate) fn with_interface(mut self, user_interface: impl UserInterface + 'static) -> Self {
        self.user_interface = Box::new(user_interface);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScalarKind, ValueKind};
    use crate::parser::util::InMemoryInterface;
    use crate::test::assert_contains;
    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn scenario() -> ArgumentParser {
        let mut parser = ArgumentParser::with_description("prog", "Demonstrates parsing");
        parser
            .add_option::<String>("-f", "--file", "Input file path", true, None)
            .add_option("-n", "--count", "Number of items", false, Some(10))
            .add_option::<Vec<i32>>("-v", "--values", "List of values", false, None);
        parser
    }

    #[test]
    fn end_to_end() {
        let mut parser = scenario();
        let result = parser.parse(vec!["prog", "-f", "input.txt", "-v", "1,2,3"]);
        assert_eq!(result, ParseResult::complete());
        assert_eq!(parser.get::<String>("--file").unwrap(), "input.txt");
        assert_eq!(parser.get::<i32>("--count").unwrap(), 10);
        assert_eq!(parser.get::<Vec<i32>>("--values").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn default_retained() {
        let mut parser = scenario();
        assert!(parser.parse(vec!["prog"]).success);
        assert_eq!(parser.get::<i32>("--count").unwrap(), 10);
        // Not enforced by default.
        assert_eq!(parser.get::<String>("--file").unwrap(), "");
        assert_eq!(parser.get::<Vec<i32>>("--values").unwrap(), Vec::<i32>::default());
    }

    #[test]
    fn parse_empty() {
        let mut parser = scenario();
        let tokens: &[&str] = empty::slice();
        assert!(parser.parse(tokens).success);
        assert!(parser.get_args().is_empty());
    }

    #[test]
    fn unknown_option() {
        let mut parser = scenario();
        let result = parser.parse(vec!["prog", "--nope", "x"]);
        assert!(!result.success);
        assert_contains!(result.error_message, "--nope");
        assert_contains!(result.error_message, "(unknown_option)");
        assert_eq!(result.error.unwrap().category(), "unknown_option");
    }

    #[test]
    fn missing_value() {
        let mut parser = scenario();
        let result = parser.parse(vec!["prog", "--file"]);
        assert!(!result.success);
        assert_contains!(result.error_message, "Error (parsing): Error parsing --file");
        assert_matches!(result.error, Some(ParseError::Parsing { .. }));
    }

    #[test]
    fn float_out_of_range() {
        let mut parser = ArgumentParser::new("prog");
        parser.add_option::<f32>("-r", "--rate", "Learning rate", false, Some(0.5));
        let result = parser.parse(vec!["prog", "-r", "1e50"]);
        assert!(!result.success);
        assert_contains!(result.error_message, "cannot convert '1e50' to float");
        assert_matches!(result.error, Some(ParseError::Parsing { ref name, .. }) if name == "-r");
        assert_eq!(parser.get::<f32>("-r").unwrap(), 0.5);
    }

    #[test]
    fn empty_list_value() {
        let mut parser = scenario();
        let result = parser.parse(vec!["prog", "--values", ""]);
        assert!(!result.success);
        assert_contains!(result.error_message, "--values");
    }

    #[rstest]
    #[case(vec!["prog", "-n", "ten"], "cannot convert 'ten' to int")]
    #[case(vec!["prog", "-v", "1,2,x"], "cannot convert 'x' to int")]
    #[case(vec!["prog", ""], "argument cannot be empty")]
    fn failure_message(#[case] args: Vec<&str>, #[case] expected: &str) {
        let mut parser = scenario();
        let result = parser.parse(args);
        assert!(!result.success);
        assert_contains!(result.error_message, expected);
        assert!(result
            .error_message
            .ends_with(". Please check the usage and try again."));
    }

    #[test]
    fn raw_args_fidelity() {
        for _ in 0..20 {
            let mut parser = ArgumentParser::new("prog");
            let args: Vec<String> = (0..thread_rng().gen_range(0..10))
                .map(|_| {
                    let length = thread_rng().gen_range(1..12);
                    thread_rng()
                        .sample_iter(&Alphanumeric)
                        .take(length)
                        .map(char::from)
                        .collect()
                })
                .collect();
            assert!(parser.parse(&args).success);
            assert_eq!(parser.get_args(), args.as_slice());
        }
    }

    #[test]
    fn raw_args_on_failure() {
        let mut parser = scenario();
        let args = vec!["prog", "positional", "--nope", "x", "-f", "input.txt"];
        assert!(!parser.parse(&args).success);
        assert_eq!(parser.get_args(), args.as_slice());
    }

    #[test]
    fn reparse() {
        let mut parser = scenario();
        assert!(parser.parse(vec!["prog", "-n", "3"]).success);
        assert!(parser.parse(vec!["other", "-f", "a"]).success);
        assert_eq!(parser.get_args(), vec!["other", "-f", "a"]);
        // Values from the earlier parse remain.
        assert_eq!(parser.get::<i32>("-n").unwrap(), 3);
        assert_eq!(parser.get::<String>("-f").unwrap(), "a");
    }

    #[test]
    fn type_mismatch() {
        let mut parser = scenario();
        assert!(parser.parse(vec!["prog"]).success);
        assert_eq!(
            parser.get::<String>("--count").unwrap_err(),
            RetrievalError::TypeMismatch {
                name: "--count".to_string(),
                declared: ValueKind::Scalar(ScalarKind::Int),
                requested: ValueKind::Scalar(ScalarKind::String),
            }
        );
        assert_matches!(
            parser.get::<i32>("--nope"),
            Err(RetrievalError::UnknownArgument { .. })
        );
    }

    #[test]
    fn every_kind() {
        let mut parser = ArgumentParser::new("prog");
        parser
            .add_option("-r", "--rate", "", false, Some(1.0f32))
            .add_option("-t", "--threshold", "", false, Some(0.5f64))
            .add_option("-b", "--verbose", "", false, Some(false))
            .add_option::<Vec<String>>("-s", "--strings", "", false, None)
            .add_option::<Vec<f64>>("", "--doubles", "", false, None)
            .add_option::<Vec<f32>>("", "--floats", "", false, None)
            .add_option::<Vec<bool>>("", "--flags", "", false, None);
        let result = parser.parse(vec![
            "prog",
            "-r",
            "2.5",
            "--verbose",
            "1",
            "-s",
            "hello,world",
            "--doubles",
            "0.25,1e2",
            "--floats",
            "3",
            "--flags",
            "true,no",
        ]);
        assert!(result.success, "{}", result.error_message);
        assert_eq!(parser.get::<f32>("--rate").unwrap(), 2.5);
        assert_eq!(parser.get::<f64>("-t").unwrap(), 0.5);
        assert!(parser.get::<bool>("-b").unwrap());
        assert_eq!(
            parser.get::<Vec<String>>("--strings").unwrap(),
            vec!["hello".to_string(), "world".to_string()]
        );
        assert_eq!(parser.get::<Vec<f64>>("--doubles").unwrap(), vec![0.25, 100.0]);
        assert_eq!(parser.get::<Vec<f32>>("--floats").unwrap(), vec![3.0]);
        assert_eq!(parser.get::<Vec<bool>>("--flags").unwrap(), vec![true, false]);
    }

    #[test]
    fn builder_parameter() {
        let mut parser = ArgumentParser::new("prog");
        parser.add(
            Parameter::<String>::new("", "--mode")
                .description("Mode")
                .default("fast".to_string()),
        );
        assert!(parser.parse(vec!["prog"]).success);
        assert_eq!(parser.get::<String>("--mode").unwrap(), "fast");
        assert!(parser.parse(vec!["prog", "--mode", "slow"]).success);
        assert_eq!(parser.get::<String>("--mode").unwrap(), "slow");
    }

    #[test]
    fn duplicate_overwrites() {
        let mut parser = ArgumentParser::new("prog");
        parser
            .add_option::<i32>("-n", "--count", "", false, None)
            .add_option::<String>("-n", "--name", "", false, None);
        assert!(parser.parse(vec!["prog", "-n", "abc", "--count", "2"]).success);
        assert_eq!(parser.get::<String>("-n").unwrap(), "abc");
        assert_eq!(parser.get::<i32>("--count").unwrap(), 2);
    }

    #[test]
    fn duplicate_strict() {
        let mut parser = ArgumentParser::new("prog").strict(true);
        parser
            .add_option::<i32>("-n", "--count", "", false, None)
            .add_option::<String>("-n", "--name", "", false, None)
            .add_option::<String>("-x", "--count", "", false, None);
        let result = parser.parse(vec!["prog", "-n", "1"]);
        assert!(!result.success);
        assert_eq!(
            result.error,
            Some(ParseError::Config {
                reason: "option name '-n' is already registered".to_string()
            })
        );
        // The rejected option was never registered.
        assert_matches!(
            parser.get::<String>("--name"),
            Err(RetrievalError::UnknownArgument { .. })
        );
        assert_eq!(parser.get_args(), vec!["prog", "-n", "1"]);
    }

    #[test]
    fn nameless_option() {
        let mut parser = ArgumentParser::new("prog");
        parser.add_option::<i32>("", "", "Orphan", false, None);
        let result = parser.parse(vec!["prog"]);
        assert_eq!(result.error.unwrap().category(), "config");
        assert_contains!(result.error_message, "'Orphan' must have a short or long name");
    }

    #[rstest]
    #[case(vec!["prog"], Some("--file"))]
    #[case(vec!["prog", "-n", "1"], Some("--file"))]
    #[case(vec!["prog", "-f", "input.txt"], None)]
    fn enforce_required(#[case] args: Vec<&str>, #[case] missing: Option<&str>) {
        let mut parser = ArgumentParser::new("prog").enforce_required(true);
        parser
            .add_option::<String>("-f", "--file", "", true, None)
            .add_option::<i32>("-n", "--count", "", false, None)
            .add_option::<String>("", "--output", "", true, Some("out".to_string()));
        let result = parser.parse(args);

        match missing {
            Some(name) => {
                assert_eq!(
                    result.error,
                    Some(ParseError::MissingRequired {
                        name: name.to_string()
                    })
                );
                assert_contains!(result.error_message, "Error (missing_required)");
            }
            None => {
                // '--output' is still missing; its default does not count as parsed.
                assert_eq!(
                    result.error,
                    Some(ParseError::MissingRequired {
                        name: "--output".to_string()
                    })
                );
            }
        }
    }

    #[test]
    fn usage() {
        let parser = scenario();
        assert_eq!(
            parser.usage(),
            [
                "Usage:",
                "  prog [options]",
                "",
                "Demonstrates parsing",
                "",
                "Options:",
                "  -f, --file <value>    Input file path (required)",
                "  -n, --count <value>   Number of items [default: 10]",
                "  -v, --values <value>  List of values",
            ]
            .join("\n")
        );
    }

    #[test]
    fn usage_without_about() {
        let parser = ArgumentParser::new("prog").about("dropped").about("");
        assert_eq!(parser.usage(), "Usage:\n  prog [options]\n\nOptions:");
        assert_eq!(parser.program(), "prog");
    }

    #[test]
    fn print_usage() {
        let interface = InMemoryInterface::default();
        let parser = scenario().with_interface(interface.clone());
        parser.print_usage();
        let message = interface.consume_message();
        assert_contains!(message, "Usage:\n  prog [options]");
        assert_contains!(message, "-n, --count <value>");
        assert_contains!(message, "(required)");
    }
}
