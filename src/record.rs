//! Validator diagnostic records
//!
//! A [`Record`] is one error or warning reported by the markup validator: an
//! ordered set of named string fields. Field names are normalized through an
//! explicit table so callers see one schema regardless of the wire variant.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field holding the source line of a diagnostic
pub const LINE: &str = "line";
/// Field holding the source column of a diagnostic
pub const COLUMN: &str = "column";
/// Field holding the human-readable diagnostic text
pub const MESSAGE: &str = "message";

/// Wire tag names that are renamed when captured. Every other tag maps to itself.
const FIELD_ALIASES: &[(&str, &str)] = &[("col", COLUMN)];

/// Map a wire tag name to its record field name
pub fn normalize_field(tag: &str) -> &str {
    FIELD_ALIASES
        .iter()
        .find(|(wire, _)| *wire == tag)
        .map(|(_, field)| *field)
        .unwrap_or(tag)
}

/// Which flat list of a URI entry a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Errors,
    Warnings,
}

impl Section {
    /// Wire name of the list container (`errorlist` / `warninglist`)
    pub fn list_tag(self) -> &'static str {
        match self {
            Section::Errors => "errorlist",
            Section::Warnings => "warninglist",
        }
    }

    /// Wire name of a single item (`error` / `warning`)
    pub fn item_tag(self) -> &'static str {
        match self {
            Section::Errors => "error",
            Section::Warnings => "warning",
        }
    }
}

/// One diagnostic: field name to trimmed string value, in capture order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing an earlier value in place or appending it
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Append an empty value for `name` unless the field is already present
    pub fn ensure(&mut self, name: &str) {
        if !self.contains(name) {
            self.fields.push((name.to_string(), String::new()));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Raw `line` value, empty when the validator did not report one
    pub fn line(&self) -> &str {
        self.get(LINE).unwrap_or_default()
    }

    /// `column` value; `None` for fault records, which carry no column
    pub fn column(&self) -> Option<&str> {
        self.get(COLUMN)
    }

    pub fn message(&self) -> &str {
        self.get(MESSAGE).unwrap_or_default()
    }

    /// The `line` field parsed for line indexing. The stored value stays a string.
    pub fn line_number(&self) -> Option<u32> {
        self.line().trim().parse().ok()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_field() {
        assert_eq!(normalize_field("col"), "column");
        assert_eq!(normalize_field("line"), "line");
        assert_eq!(normalize_field("message"), "message");
        assert_eq!(normalize_field("messageid"), "messageid");
        // Tag names are case-sensitive
        assert_eq!(normalize_field("Col"), "Col");
    }

    #[test]
    fn test_insert_preserves_order_and_replaces() {
        let mut record = Record::new();
        record.insert("line", "3");
        record.insert("column", "7");
        record.insert("message", "first");
        record.insert("line", "4");

        let names: Vec<&str> = record.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["line", "column", "message"]);
        assert_eq!(record.line(), "4");
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_ensure_only_fills_missing() {
        let mut record = Record::new();
        record.insert("line", "12");
        record.ensure(LINE);
        record.ensure(COLUMN);

        assert_eq!(record.line(), "12");
        assert_eq!(record.column(), Some(""));
    }

    #[test]
    fn test_line_number() {
        let mut record = Record::new();
        assert_eq!(record.line_number(), None);

        record.insert(LINE, "217");
        assert_eq!(record.line_number(), Some(217));
        assert_eq!(record.line(), "217");

        record.insert(LINE, "");
        assert_eq!(record.line_number(), None);

        record.insert(LINE, "twelve");
        assert_eq!(record.line_number(), None);
    }

    #[test]
    fn test_missing_fields() {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.line(), "");
        assert_eq!(record.message(), "");
        assert_eq!(record.column(), None);
    }

    #[test]
    fn test_section_tags() {
        assert_eq!(Section::Errors.list_tag(), "errorlist");
        assert_eq!(Section::Errors.item_tag(), "error");
        assert_eq!(Section::Warnings.list_tag(), "warninglist");
        assert_eq!(Section::Warnings.item_tag(), "warning");
    }

    #[test]
    fn test_serialize_as_ordered_object() {
        let mut record = Record::new();
        record.insert("message", "bad");
        record.insert("line", "1");

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"message":"bad","line":"1"}"#);
    }
}
