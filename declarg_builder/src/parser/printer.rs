use crate::api::{Definition, Parameter};
use crate::constant::*;
use crate::parser::interface::{chunk, MINIMUM_WRAP_WIDTH};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Renders the help text of a definition.
pub(crate) struct Printer<'a> {
    definition: &'a Definition,
}

impl<'a> Printer<'a> {
    pub(crate) fn new(definition: &'a Definition) -> Self {
        Self { definition }
    }

    /// Render the help text.
    /// With a `width`, the description and hint paragraphs are wrapped to that many columns.
    pub(crate) fn render(&self, name: Option<&str>, width: Option<usize>) -> String {
        let mut lines = vec![self.usage(name)];

        for paragraph in [self.definition.get_description(), self.definition.get_hint()]
            .into_iter()
            .flatten()
            .filter(|paragraph| !paragraph.is_empty())
        {
            lines.push(String::default());

            match width {
                Some(width) => {
                    lines.extend(chunk(paragraph, std::cmp::max(width, MINIMUM_WRAP_WIDTH)))
                }
                None => lines.push(paragraph.to_string()),
            }
        }

        let positionals = self.definition.positionals();
        if !positionals.is_empty() {
            lines.push(String::default());
            lines.push("Positionals:".to_string());

            for parameter in positionals {
                lines.push(format!(
                    "  {name}{help}",
                    name = parameter.name(),
                    help = help_suffix(parameter)
                ));
            }
        }

        let flags = self.definition.flags();
        if !flags.is_empty() {
            lines.push(String::default());
            lines.push("Options:".to_string());

            for parameter in flags {
                let aliases: Vec<String> = self
                    .definition
                    .aliases_of(parameter.name())
                    .map(|alias| format!("-{alias}"))
                    .collect();
                let aliases = if aliases.is_empty() {
                    String::default()
                } else {
                    format!(" ({})", aliases.join(", "))
                };
                let default = match parameter.field().default_value() {
                    Some(value) => format!(" (default {value})"),
                    None => String::default(),
                };

                lines.push(format!(
                    "  --{name}{aliases}{help}{default}",
                    name = parameter.name(),
                    help = help_suffix(parameter)
                ));
            }
        }

        let examples = self.definition.examples();
        if !examples.is_empty() {
            lines.push(String::default());
            lines.push("Examples:".to_string());

            for example in examples {
                lines.push(format!("  {example}"));
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Rendered {} help lines.", lines.len());
        }

        lines.join("\n")
    }

    fn usage(&self, name: Option<&str>) -> String {
        let mut parts: Vec<String> = Vec::default();

        if let Some(prefix) = self.definition.get_usage_prefix() {
            parts.push(prefix.to_string());
        }

        parts.push(name.unwrap_or(UNNAMED_SCRIPT).to_string());

        // Optional and defaulted positionals look the same as required ones.
        for parameter in self.definition.positionals() {
            parts.push(format!("<{}>", parameter.name()));
        }

        parts.push(OPTIONS_PLACEHOLDER.to_string());
        parts.join(" ")
    }
}

fn help_suffix(parameter: &Parameter) -> String {
    match parameter.help_message() {
        Some(help) => format!(" - {help}"),
        None => String::default(),
    }
}
