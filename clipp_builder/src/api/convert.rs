use std::str::FromStr;
use thiserror::Error;

use crate::constant::LIST_DELIMITER;
use crate::model::{ScalarKind, ValueKind};

/// A raw token could not be converted into the requested type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {kind}")]
pub struct ConversionError {
    token: String,
    kind: ValueKind,
}

impl ConversionError {
    pub(crate) fn new(token: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            token: token.into(),
            kind,
        }
    }

    /// The token which failed to convert.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The kind the token was being converted into.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
    impl Sealed for bool {}
    impl<T: super::ScalarConvertible> Sealed for Vec<T> {}
}

/// Behaviour to convert a raw command line token into a typed value.
///
/// The set of implementations is closed: `i32`, `f32`, `f64`, `String`, `bool`, and `Vec` of any of those.
pub trait Convertible: sealed::Sealed + Clone + Default + 'static {
    /// The kind recorded on an option holding this type.
    const KIND: ValueKind;

    /// Convert the raw token.
    fn convert(token: &str) -> Result<Self, ConversionError>;

    /// Render the value back into token form.
    fn render(&self) -> String;
}

/// A `Convertible` which may also be the item type of a list.
pub trait ScalarConvertible: Convertible {
    /// The scalar kind of this type.
    const SCALAR: ScalarKind;
}

/// Convert a raw token into `T`.
///
/// ### Example
/// ```
/// # use clipp_builder as clipp;
/// use clipp::convert;
///
/// assert_eq!(convert::<i32>("42").unwrap(), 42);
/// assert_eq!(convert::<Vec<i32>>("1,2,3").unwrap(), vec![1, 2, 3]);
/// assert!(convert::<bool>("1").unwrap());
/// assert!(convert::<f64>("1.5x").is_err());
/// ```
pub fn convert<T: Convertible>(token: &str) -> Result<T, ConversionError> {
    T::convert(token)
}

// Leading whitespace is tolerated, trailing garbage is not.
fn convert_numeric<T: FromStr>(token: &str, kind: ScalarKind) -> Result<T, ConversionError> {
    T::from_str(token.trim_start())
        .map_err(|_| ConversionError::new(token, ValueKind::Scalar(kind)))
}

// A literal which overflows to infinity, or underflows to zero, is out of range.
fn convert_float<T>(token: &str, kind: ScalarKind) -> Result<T, ConversionError>
where
    T: FromStr + Into<f64> + Copy,
{
    let value: T = convert_numeric(token, kind)?;
    let wide: f64 = value.into();
    let literal = token.trim_start().trim_start_matches(|c: char| c == '+' || c == '-');
    let overflow = wide.is_infinite() && !literal.to_ascii_lowercase().starts_with("inf");
    let underflow = wide == 0.0
        && literal
            .split(|c: char| c == 'e' || c == 'E')
            .next()
            .map_or(false, |mantissa| mantissa.chars().any(|c| matches!(c, '1'..='9')));

    if overflow || underflow {
        Err(ConversionError::new(token, ValueKind::Scalar(kind)))
    } else {
        Ok(value)
    }
}

impl Convertible for i32 {
    const KIND: ValueKind = ValueKind::Scalar(ScalarKind::Int);

    fn convert(token: &str) -> Result<Self, ConversionError> {
        convert_numeric(token, ScalarKind::Int)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl ScalarConvertible for i32 {
    const SCALAR: ScalarKind = ScalarKind::Int;
}

impl Convertible for f32 {
    const KIND: ValueKind = ValueKind::Scalar(ScalarKind::Float);

    fn convert(token: &str) -> Result<Self, ConversionError> {
        convert_float(token, ScalarKind::Float)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl ScalarConvertible for f32 {
    const SCALAR: ScalarKind = ScalarKind::Float;
}

impl Convertible for f64 {
    const KIND: ValueKind = ValueKind::Scalar(ScalarKind::Double);

    fn convert(token: &str) -> Result<Self, ConversionError> {
        convert_float(token, ScalarKind::Double)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl ScalarConvertible for f64 {
    const SCALAR: ScalarKind = ScalarKind::Double;
}

impl Convertible for String {
    const KIND: ValueKind = ValueKind::Scalar(ScalarKind::String);

    fn convert(token: &str) -> Result<Self, ConversionError> {
        Ok(token.to_string())
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl ScalarConvertible for String {
    const SCALAR: ScalarKind = ScalarKind::String;
}

impl Convertible for bool {
    const KIND: ValueKind = ValueKind::Scalar(ScalarKind::Bool);

    fn convert(token: &str) -> Result<Self, ConversionError> {
        Ok(token == "true" || token == "1")
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl ScalarConvertible for bool {
    const SCALAR: ScalarKind = ScalarKind::Bool;
}

impl<T: ScalarConvertible> Convertible for Vec<T> {
    const KIND: ValueKind = ValueKind::List(T::SCALAR);

    fn convert(token: &str) -> Result<Self, ConversionError> {
        // An empty token splits into a single empty item, never an empty list.
        token.split(LIST_DELIMITER).map(T::convert).collect()
    }

    fn render(&self) -> String {
        self.iter()
            .map(Convertible::render)
            .collect::<Vec<String>>()
            .join(&LIST_DELIMITER.to_string())
    }
}
