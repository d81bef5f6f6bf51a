use crate::parser::error::ParseResult;

/// The output sinks used by the parser.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, message: String);
}

pub(crate) struct ConsoleInterface {}

impl Default for ConsoleInterface {
    fn default() -> Self {
        Self {}
    }
}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}

/// Print the error message of a failed result to stderr.
/// Does nothing for a successful result.
pub fn print_error(result: &ParseResult) {
    report(result, &ConsoleInterface::default());
}

pub(crate) fn report(result: &ParseResult, user_interface: &(impl UserInterface + ?Sized)) {
    if !result.success {
        user_interface.print_error(result.error_message.clone());
    }
}
