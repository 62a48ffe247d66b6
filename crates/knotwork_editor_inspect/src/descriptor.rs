// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property descriptors - per-property metadata for the panel.

use crate::value::PropertyValue;

/// Metadata and current value for one inspectable property
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    /// Property name (`snake_case`, as declared on the owner)
    pub name: String,
    /// Current value, read from the owner
    pub value: PropertyValue,
    /// Whether this property is excluded from the panel
    pub excluded: bool,
    /// Whether a text property renders as a multi-line area
    pub multiline: bool,
    /// Section header text to emit before the control
    pub header: Option<String>,
}

impl PropertyDescriptor {
    /// Create a descriptor with no flags set
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
            excluded: false,
            multiline: false,
            header: None,
        }
    }

    /// Exclude this property from the panel
    pub fn excluded(mut self) -> Self {
        self.excluded = true;
        self
    }

    /// Render a text property as a multi-line area
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Emit a section header label before the control
    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    /// Display label for the control, prettified from the field name
    pub fn pretty_name(&self) -> String {
        pretty_name(&self.name)
    }
}

/// Prettify a `snake_case` field name for display: `spawn_count` becomes
/// `Spawn Count`.
pub fn pretty_name(name: &str) -> String {
    let mut pretty = String::with_capacity(name.len());
    for word in name.split('_').filter(|w| !w.is_empty()) {
        if !pretty.is_empty() {
            pretty.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            pretty.extend(first.to_uppercase());
            pretty.push_str(chars.as_str());
        }
    }
    pretty
}
