mod capture;
mod convert;
mod core;
mod parameter;
mod validation;

pub(crate) use self::capture::{AnonymousCapturable, TypedCapture};
pub use self::capture::InvalidCapture;
pub use self::convert::*;
pub use self::core::*;
pub use self::parameter::*;
pub use self::validation::*;
