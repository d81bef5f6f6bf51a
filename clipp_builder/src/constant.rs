/// The longest raw token (in bytes) accepted on the command line.
pub const MAX_ARGUMENT_LENGTH: usize = 1024;

pub(crate) const LIST_DELIMITER: char = ',';
pub(crate) const VALUE_PLACEHOLDER: &str = "<value>";
pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";
