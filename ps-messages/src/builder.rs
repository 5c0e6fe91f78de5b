//! `{name}` placeholder substitution for message templates.

use std::fmt::Display;
use tracing::warn;

/// Fills the `{name}` placeholders of one template.
///
/// Substitution is a single left-to-right pass, so braces inside a
/// substituted value (a path, a user-entered URL) are never expanded again.
/// Placeholders without a value are kept verbatim and logged.
pub struct MessageBuilder {
    template: &'static str,
    vars: Vec<(&'static str, String)>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: Vec::new(),
        }
    }

    pub fn var(mut self, name: &'static str, value: impl Display) -> Self {
        self.vars.push((name, value.to_string()));
        self
    }

    pub fn build(self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                rest = &rest[open..];
                break;
            };

            let name = &after[..close];
            match self.lookup(name) {
                Some(value) => out.push_str(value),
                None => {
                    warn!(
                        placeholder = name,
                        template = self.template,
                        "message placeholder left unfilled"
                    );
                    out.push_str(&rest[open..open + close + 2]);
                }
            }
            rest = &after[close + 1..];
        }

        out.push_str(rest);
        out
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(var, _)| *var == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_every_occurrence() {
        let out = MessageBuilder::new("{name} and {name} at {path}")
            .var("name", "twitch")
            .var("path", "/tmp")
            .build();
        assert_eq!(out, "twitch and twitch at /tmp");
    }

    #[test]
    fn test_values_are_not_expanded_again() {
        let out = MessageBuilder::new("Could not update {file}: {error}")
            .var("file", "/home/u/{error}/.env")
            .var("error", "denied")
            .build();
        assert_eq!(out, "Could not update /home/u/{error}/.env: denied");
    }

    #[test]
    fn test_unknown_placeholders_are_left_alone() {
        assert_eq!(MessageBuilder::new("{missing}").build(), "{missing}");
        assert_eq!(
            MessageBuilder::new("count {n} and {").var("n", 7).build(),
            "count 7 and {"
        );
    }
}
