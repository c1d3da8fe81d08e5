//! Form field descriptions and the value map they populate

use std::collections::BTreeMap;

/// Input kind of a field, standing in for the HTML input type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    /// Calendar date entered as `YYYY-MM-DD`, never earlier than today
    Date,
    /// One of a fixed list of `(value, label)` options
    Select(&'static [SelectOption]),
    Multiline,
}

/// A single entry of a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    /// Option whose submitted value and visible label are the same text
    pub const fn same(text: &'static str) -> Self {
        Self {
            value: text,
            label: text,
        }
    }
}

/// Static configuration of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: "",
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline)
    }

    pub fn options(&self) -> &'static [SelectOption] {
        match self.kind {
            FieldKind::Select(options) => options,
            _ => &[],
        }
    }

    /// Label with the required marker, as shown above the input
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }

    /// Text to render for `value`. Select fields show the option label.
    pub fn display_value(&self, value: &str) -> String {
        match self.kind {
            FieldKind::Select(options) => {
                if value.is_empty() {
                    return String::new();
                }
                options
                    .iter()
                    .find(|o| o.value == value)
                    .map(|o| o.label.to_string())
                    .unwrap_or_else(|| value.to_string())
            }
            _ => value.to_string(),
        }
    }

    /// Option value after `current`, wrapping. An empty value selects the first option.
    pub fn next_option(&self, current: &str) -> Option<&'static str> {
        let options = self.options();
        if options.is_empty() {
            return None;
        }
        let next = match options.iter().position(|o| o.value == current) {
            Some(i) => (i + 1) % options.len(),
            None => 0,
        };
        Some(options[next].value)
    }

    /// Option value before `current`, wrapping. An empty value selects the last option.
    pub fn prev_option(&self, current: &str) -> Option<&'static str> {
        let options = self.options();
        if options.is_empty() {
            return None;
        }
        let prev = match options.iter().position(|o| o.value == current) {
            Some(0) | None => options.len() - 1,
            Some(i) => i - 1,
        };
        Some(options[prev].value)
    }
}

/// Field name to value mapping for one form instance.
///
/// Ordered so submissions encode fields in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    /// One empty entry per field
    pub fn empty(fields: &[FieldSpec]) -> Self {
        Self(
            fields
                .iter()
                .map(|f| (f.name.to_string(), String::new()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    /// Overwrite an existing entry. Returns false if the field is not part of the form.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        match self.0.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Reset every entry to the empty string, keeping the keys
    pub fn clear(&mut self) {
        for value in self.0.values_mut() {
            value.clear();
        }
    }

    pub fn is_all_empty(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// `(name, value)` pairs suitable for a form-urlencoded body
    pub fn as_pairs(&self) -> Vec<(String, String)> {
        self.0.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
