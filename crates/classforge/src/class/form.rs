//! Inbound "create class" payload
//!
//! The UI collects a class name plus two free-text areas, one descriptor
//! per line. Nothing here is validated: empty names and blank lines are
//! carried through to the generated code as-is.

use super::command::Command;

/// Split newline-delimited form text into descriptors
///
/// Empty text yields no descriptors. Otherwise every line becomes one
/// descriptor, blank lines included; only a CRLF `'\r'` is stripped.
pub fn split_descriptors(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Contents of the "add class" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassForm {
    pub name: String,
    pub attributes_text: String,
    pub methods_text: String,
}

impl ClassForm {
    pub fn new(
        name: impl Into<String>,
        attributes_text: impl Into<String>,
        methods_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes_text: attributes_text.into(),
            methods_text: methods_text.into(),
        }
    }

    pub fn attributes(&self) -> Vec<String> {
        split_descriptors(&self.attributes_text)
    }

    pub fn methods(&self) -> Vec<String> {
        split_descriptors(&self.methods_text)
    }

    pub fn into_command(self) -> Command {
        Command::AddClass {
            attributes: self.attributes(),
            methods: self.methods(),
            name: self.name,
        }
    }
}
