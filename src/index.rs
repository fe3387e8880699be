//! Result Index
//!
//! Accumulates parsed diagnostics keyed by document URI and, within a URI, by
//! source line. Successive [`ResultIndex::parse`] calls add to what is already
//! indexed; only [`ResultIndex::clear`] removes anything.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::error::Result;
use crate::extractor::{Extraction, extract};
use crate::record::{Record, Section};

/// URI under which SOAP faults are indexed
pub const FAULT_URI: &str = "Fault";

/// Errors and warnings reported at one source line of one URI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineBucket {
    pub errors: Vec<Record>,
    pub warnings: Vec<Record>,
}

impl LineBucket {
    pub fn records(&self, section: Section) -> &[Record] {
        match section {
            Section::Errors => &self.errors,
            Section::Warnings => &self.warnings,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    fn push(&mut self, section: Section, record: Record) {
        match section {
            Section::Errors => self.errors.push(record),
            Section::Warnings => self.warnings.push(record),
        }
    }
}

/// Everything indexed for one validated document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UriEntry {
    pub errors: Vec<Record>,
    pub warnings: Vec<Record>,
    pub lines: BTreeMap<u32, LineBucket>,
}

impl UriEntry {
    pub fn records(&self, section: Section) -> &[Record] {
        match section {
            Section::Errors => &self.errors,
            Section::Warnings => &self.warnings,
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn line(&self, line: u32) -> Option<&LineBucket> {
        self.lines.get(&line)
    }

    /// Get the bucket for `line`, creating an empty one on first use
    pub fn bucket_mut(&mut self, line: u32) -> &mut LineBucket {
        self.lines.entry(line).or_default()
    }

    /// Append to the flat list and, when the line is numeric, to its bucket
    fn push(&mut self, section: Section, record: Record) {
        match record.line_number() {
            Some(line) => self.bucket_mut(line).push(section, record.clone()),
            None => tracing::trace!(
                line = record.line(),
                "Record has no numeric line, not indexed by line"
            ),
        }
        match section {
            Section::Errors => self.errors.push(record),
            Section::Warnings => self.warnings.push(record),
        }
    }
}

/// Diagnostics from every parsed response, by URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultIndex {
    #[serde(flatten)]
    entries: HashMap<String, UriEntry>,
    #[serde(skip)]
    fault_uri: String,
}

impl Default for ResultIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultIndex {
    /// Create an empty index that keys faults to [`FAULT_URI`]
    pub fn new() -> Self {
        Self::with_fault_uri(FAULT_URI)
    }

    /// Create an empty index that keys faults to `fault_uri`
    pub fn with_fault_uri(fault_uri: impl Into<String>) -> Self {
        Self {
            entries: HashMap::new(),
            fault_uri: fault_uri.into(),
        }
    }

    pub fn fault_uri(&self) -> &str {
        &self.fault_uri
    }

    /// Parse one validator response and add its records.
    ///
    /// On error nothing from `raw` is indexed.
    pub fn parse(&mut self, raw: &str) -> Result<()> {
        let extraction = extract(raw, &self.fault_uri)?;
        self.insert(extraction);
        Ok(())
    }

    /// Like [`ResultIndex::parse`] for a byte buffer, which must be UTF-8
    pub fn parse_bytes(&mut self, raw: &[u8]) -> Result<()> {
        self.parse(std::str::from_utf8(raw)?)
    }

    /// Add an already extracted response
    pub fn insert(&mut self, extraction: Extraction) {
        let Extraction {
            uri,
            errors,
            warnings,
        } = extraction;

        if uri == self.fault_uri {
            tracing::warn!(uri = %uri, "Indexing SOAP fault response");
        }
        tracing::debug!(
            uri = %uri,
            errors = errors.len(),
            warnings = warnings.len(),
            "Indexing validator response"
        );

        if errors.is_empty() && warnings.is_empty() {
            return;
        }

        let entry = self.entry_mut(&uri);
        for record in errors {
            entry.push(Section::Errors, record);
        }
        for record in warnings {
            entry.push(Section::Warnings, record);
        }
    }

    /// Get the entry for `uri`, creating an empty one on first use
    pub fn entry_mut(&mut self, uri: &str) -> &mut UriEntry {
        self.entries.entry(uri.to_string()).or_default()
    }

    /// Remove every URI, entry and line bucket
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// URIs currently indexed, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn lookup(&self, uri: &str) -> Option<&UriEntry> {
        self.entries.get(uri)
    }

    pub fn lookup_line(&self, uri: &str, line: u32) -> Option<&LineBucket> {
        self.lookup(uri).and_then(|entry| entry.line(line))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UriEntry)> {
        self.entries.iter().map(|(uri, entry)| (uri.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
