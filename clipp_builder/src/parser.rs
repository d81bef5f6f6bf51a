mod base;
mod entry;
mod error;
mod interface;
mod printer;

pub(crate) use base::*;
pub(crate) use entry::*;
pub use error::*;
pub use interface::print_error;
pub(crate) use interface::{ConsoleInterface, UserInterface};
#[cfg(test)]
pub(crate) use interface::util;
pub(crate) use printer::*;
