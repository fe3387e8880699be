//! Record extraction
//!
//! Turns a classified response into flat [`Record`]s. Everything for one
//! payload is collected into an [`Extraction`] before the index is touched, so
//! a payload either lands completely or not at all.

use regex::Regex;
use roxmltree::{Document, Node};
use std::sync::OnceLock;

use crate::classifier::{ResponseKind, child_elements, classify, element_text};
use crate::error::{ParseError, Result};
use crate::record::{COLUMN, LINE, MESSAGE, Record, Section, normalize_field};

/// Cached regex for the "line NNN" reference inside fault text
static FAULT_LINE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_fault_line_regex() -> &'static Regex {
    FAULT_LINE_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\bline\s+([0-9]+)").expect("Failed to compile fault line regex")
    })
}

/// Records parsed from one response, ready to be indexed under `uri`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub uri: String,
    pub errors: Vec<Record>,
    pub warnings: Vec<Record>,
}

impl Extraction {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn records(&self, section: Section) -> &[Record] {
        match section {
            Section::Errors => &self.errors,
            Section::Warnings => &self.warnings,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Classify `raw` and extract its records. Faults are keyed to `fault_uri`.
pub fn extract(raw: &str, fault_uri: &str) -> Result<Extraction> {
    let doc = Document::parse(raw)?;

    match classify(&doc)? {
        ResponseKind::Validation { uri, response } => Ok(extract_validation(uri, response)),
        ResponseKind::Fault { text } => extract_fault(&text, fault_uri),
    }
}

/// Collect every `errorlist/error` and `warninglist/warning` beneath
/// `response`, in document order. Repeated lists are merged.
pub fn extract_validation(uri: String, response: Node) -> Extraction {
    let mut extraction = Extraction::new(uri);
    extraction.errors = section_records(response, Section::Errors);
    extraction.warnings = section_records(response, Section::Warnings);
    extraction
}

fn section_records(response: Node, section: Section) -> Vec<Record> {
    response
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == section.list_tag())
        .flat_map(child_elements)
        .filter(|n| n.tag_name().name() == section.item_tag())
        .map(item_record)
        .collect()
}

/// Build a record from the immediate element children of one `error`/`warning`
fn item_record(item: Node) -> Record {
    let mut record = Record::new();
    for child in child_elements(item) {
        // First occurrence of a repeated tag wins
        let name = normalize_field(child.tag_name().name());
        if !record.contains(name) {
            record.insert(name, element_text(child));
        }
    }

    // Partial validator output still yields a usable record
    record.ensure(LINE);
    record.ensure(COLUMN);
    record.ensure(MESSAGE);
    record
}

/// Build the single record for a SOAP fault.
///
/// The fault text must mention "line NNN" with an ASCII line number that fits
/// a `u32`; a fault without a usable position is rejected rather than defaulted.
pub fn extract_fault(text: &str, fault_uri: &str) -> Result<Extraction> {
    let line = get_fault_line_regex()
        .captures(text)
        .map(|caps| caps[1].to_string())
        .filter(|line| line.parse::<u32>().is_ok())
        .ok_or_else(|| ParseError::FaultWithoutLine {
            fault: text.to_string(),
        })?;

    let mut record = Record::new();
    record.insert(LINE, line);
    record.insert(MESSAGE, text);

    let mut extraction = Extraction::new(fault_uri);
    extraction.errors.push(record);
    Ok(extraction)
}
