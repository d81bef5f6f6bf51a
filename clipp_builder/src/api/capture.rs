use std::any::Any;
use thiserror::Error;

use crate::api::convert::{ConversionError, Convertible};
use crate::api::validation::ValidationError;
use crate::model::ValueKind;

/// A value token was rejected by an option.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidCapture {
    /// The value token is missing, empty, or too long.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The value token does not convert to the option's type.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Behaviour to capture an implicit generic type T from an input `&str`.
///
/// We use this in the parser's option arena so that options of different types may all live in a single collection.
pub(crate) trait AnonymousCapturable {
    /// Capture a value anonymously for this option.
    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture>;

    /// The kind of value held.
    fn kind(&self) -> ValueKind;

    /// The rendered default, if one was declared.
    fn default_display(&self) -> Option<String>;

    fn as_any(&self) -> &dyn Any;
}

/// The typed storage at the bottom of the object graph, so the compiler maintains each option's type.
pub(crate) struct TypedCapture<T> {
    value: T,
    default: Option<T>,
}

impl<T: Convertible> TypedCapture<T> {
    pub(crate) fn new(default: Option<T>) -> Self {
        let value = default.clone().unwrap_or_default();
        Self { value, default }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Convertible> AnonymousCapturable for TypedCapture<T> {
    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        self.value = T::convert(token)?;
        Ok(())
    }

    fn kind(&self) -> ValueKind {
        T::KIND
    }

    fn default_display(&self) -> Option<String> {
        self.default.as_ref().map(Convertible::render)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
