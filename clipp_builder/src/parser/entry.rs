use crate::api::{validate_argument, AnonymousCapturable, InvalidCapture, TypedCapture};
use crate::api::Convertible;
use crate::model::ValueKind;

/// One registered option: its names, documentation, and typed storage.
pub(crate) struct OptionEntry {
    short_name: Option<String>,
    long_name: Option<String>,
    description: String,
    required: bool,
    parsed: bool,
    capture: Box<dyn AnonymousCapturable>,
}

impl std::fmt::Debug for OptionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionEntry")
            .field("short_name", &self.short_name)
            .field("long_name", &self.long_name)
            .field("kind", &self.capture.kind())
            .field("parsed", &self.parsed)
            .finish()
    }
}

impl OptionEntry {
    pub(crate) fn new(
        short_name: Option<String>,
        long_name: Option<String>,
        description: String,
        required: bool,
        capture: Box<dyn AnonymousCapturable>,
    ) -> Self {
        Self {
            short_name,
            long_name,
            description,
            required,
            parsed: false,
            capture,
        }
    }

    pub(crate) fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    pub(crate) fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    /// The non-empty names, short first.
    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.short_name().into_iter().chain(self.long_name())
    }

    /// The name used when reporting on this option, preferring the long form.
    pub(crate) fn display_name(&self) -> &str {
        self.long_name().or(self.short_name()).unwrap_or_default()
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn required(&self) -> bool {
        self.required
    }

    pub(crate) fn parsed(&self) -> bool {
        self.parsed
    }

    pub(crate) fn kind(&self) -> ValueKind {
        self.capture.kind()
    }

    pub(crate) fn default_display(&self) -> Option<String> {
        self.capture.default_display()
    }

    /// Validate and convert the value token, marking the option as parsed on success.
    pub(crate) fn set_value(&mut self, token: &str) -> Result<(), InvalidCapture> {
        validate_argument(token)?;
        self.capture.capture(token)?;
        self.parsed = true;
        Ok(())
    }

    /// The current value, if this option holds a `T`.
    pub(crate) fn value<T: Convertible>(&self) -> Option<&T> {
        self.capture
            .as_any()
            .downcast_ref::<TypedCapture<T>>()
            .map(TypedCapture::value)
    }
}
