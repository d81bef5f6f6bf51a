//! Builder module for `clipp`.
//! See the `clipp` crate root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use constant::MAX_ARGUMENT_LENGTH;
pub use model::*;
pub use parser::{format_error_message, print_error, ParseError, ParseResult, RetrievalError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
