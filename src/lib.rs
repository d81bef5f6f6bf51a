//! `clipp` is a small, typed command line option parser.
//!
//! Register options with a type, optional default, and required flag; parse the argument list; then read back typed values by name.
//! `clipp` prioritizes a narrow set of concerns:
//! * *Typed options*:
//! Each option is bound to one of a closed set of types when registered, and retrieving it as any other type is an error.
//! * *Predictable scanning*:
//! A single left to right pass, where every option consumes precisely the next token as its value.
//! * *Single, descriptive failures*:
//! Parsing stops at the first problem, which is reported as one formatted message.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/basic.rs")]
//! ```
//!
//! ```console
//! $ basic -f input.txt -v 1,2,3
//! File: input.txt
//! Count: 10
//! Values: [1, 2, 3]
//!
//! $ basic -f input.txt --nope
//! Error (unknown_option): Unknown option: --nope. Please check the usage and try again.
//! Usage:
//!   basic [options]
//!
//! Demonstrates basic CLI parsing
//!
//! Options:
//!   -f, --file <value>    Input file path (required)
//!   -n, --count <value>   Number of items [default: 10]
//!   -v, --values <value>  List of values
//! ```
//!
//! # Types
//! Options may hold any of:
//! * `i32`: base 10, leading whitespace tolerated, trailing characters rejected.
//! * `f32` & `f64`: decimal or scientific notation.
//! A literal which overflows to infinity or underflows to zero is rejected (ex: `1e50` for `f32`), while `inf` is accepted.
//! * `String`: the token, verbatim.
//! * `bool`: `true` and `1` are true, *anything* else is false.
//! * `Vec<T>` of any of the above: a single comma separated token (ex: `1,2,3`).
//! Items are not trimmed, and an empty token is a list of one empty item (so it fails for `Vec<i32>`).
//! Likewise a trailing comma adds a trailing empty item: `1,2,` fails for `Vec<i32>`, and is `["1", "2", ""]` for `Vec<String>`.
//!
//! An option which does not appear on the command line holds its default, or `T::default()` when no default was given.
//!
//! # Cli Semantics
//! * The first token is the program name, and is never scanned.
//! * A token starting with `--` is a long option, and one starting with a single `-` is a short option.
//! The whole token is the name: `-abc` is the single option `-abc`, not three combined options.
//! * Every option consumes the next token as its value, even when that token looks like an option.
//! There is no flag form for `bool` options; write `--verbose true`.
//! * Any other token (including a lone `-`) is skipped, but is still available from [`ArgumentParser::get_args`].
//! * Empty tokens, and tokens longer than [`MAX_ARGUMENT_LENGTH`] bytes, are rejected.
//!
//! # Errors
//! A failed [`ParseResult`] carries a message of the form `Error (<category>): <details>. Please check the usage and try again.`
//! The categories are `invalid_argument`, `unknown_option`, `parsing`, `missing_required` and `config`.
//!
//! By default, neither required options nor repeated names are checked.
//! Opt in with [`ArgumentParser::enforce_required`] and [`ArgumentParser::strict`].
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while registering and parsing.
pub use clipp_builder::*;
