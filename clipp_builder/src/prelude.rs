//! Traits which, typically, may be imported without concern: `use clipp::prelude::*`.

pub use crate::api::{Convertible, ScalarConvertible};
