use terminal_size::{terminal_size, Width};

use crate::constant::VALUE_PLACEHOLDER;
use crate::parser::entry::OptionEntry;
use crate::parser::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const INDENT: &str = "  ";
const PADDING_WIDTH: usize = 2;
// We'll target 95% of the total width, to ensure the printer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;
// Allows at least 3 average length words per line.
const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

#[derive(Debug, PartialEq, Eq)]
struct OptionLine {
    flags: String,
    description: String,
}

impl From<&OptionEntry> for OptionLine {
    fn from(entry: &OptionEntry) -> Self {
        let flags = format!(
            "{} {VALUE_PLACEHOLDER}",
            entry.names().collect::<Vec<&str>>().join(", ")
        );
        let mut parts = Vec::default();

        if !entry.description().is_empty() {
            parts.push(entry.description().to_string());
        }

        if let Some(default) = entry.default_display() {
            parts.push(format!("[default: {default}]"));
        }

        if entry.required() {
            parts.push("(required)".to_string());
        }

        Self {
            flags,
            description: parts.join(" "),
        }
    }
}

/// Renders the usage text, with options in registration order.
pub(crate) struct Printer {
    program: String,
    about: Option<String>,
    options: Vec<OptionLine>,
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal(program: &str, about: Option<&str>, entries: &[OptionEntry]) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(program, about, entries, terminal_width)
    }

    pub(crate) fn new(
        program: &str,
        about: Option<&str>,
        entries: &[OptionEntry],
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            program: program.to_string(),
            about: about.map(str::to_string),
            options: entries.iter().map(OptionLine::from).collect(),
            terminal_width,
        }
    }

    pub(crate) fn render(&self) -> Vec<String> {
        let mut out = vec![
            "Usage:".to_string(),
            format!("{INDENT}{} [options]", self.program),
            "".to_string(),
        ];

        if let Some(about) = &self.about {
            out.push(about.clone());
            out.push("".to_string());
        }

        out.push("Options:".to_string());
        let left_width = self
            .options
            .iter()
            .map(|option| option.flags.len())
            .max()
            .unwrap_or_default();
        let description_width = self.description_width(left_width);
        let padding = " ".repeat(PADDING_WIDTH);

        for OptionLine { flags, description } in &self.options {
            let parts = match description_width {
                Some(width) => chunk(description, width),
                None if description.is_empty() => Vec::default(),
                None => vec![description.clone()],
            };

            if parts.is_empty() {
                out.push(format!("{INDENT}{flags}"));
            }

            for (i, part) in parts.iter().enumerate() {
                let left = if i == 0 { flags.as_str() } else { "" };
                out.push(format!("{INDENT}{left:left_width$}{padding}{part}"));
            }
        }

        out
    }

    pub(crate) fn print_usage(&self, user_interface: &(impl UserInterface + ?Sized)) {
        for line in self.render() {
            user_interface.print(line);
        }
    }

    fn description_width(&self, left_width: usize) -> Option<usize> {
        let total_width = self.terminal_width?;
        let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;
        let non_description = INDENT.len() + left_width + PADDING_WIDTH;
        let width = std::cmp::max(
            target_total_width.saturating_sub(non_description),
            MINIMUM_DESCRIPTION_WIDTH,
        );

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Terminal width {total_width}, selecting description width: {width}.");
        }

        Some(width)
    }
}

/// Break the paragraph into lines of at most `width`, splitting only on spaces.
/// A word longer than `width` is given a line of its own.
fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + word.len() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
