//! Result serialization for the command line tool
//!
//! Writes an index, one URI entry or one line bucket either as JSON or as a
//! count summary. No message formatting happens here.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::index::ResultIndex;

/// Part of the index to print
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub uri: Option<String>,
    pub line: Option<u32>,
}

/// Serializer for parsed results
pub struct Output {
    format: OutputFormat,
    pretty: bool,
}

impl Output {
    pub fn new(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }

    pub fn format_results(
        &self,
        index: &ResultIndex,
        selection: &Selection,
    ) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(index, selection),
            OutputFormat::Summary => Ok(format_summary(index, selection)),
        }
    }

    fn format_json(&self, index: &ResultIndex, selection: &Selection) -> serde_json::Result<String> {
        match (&selection.uri, selection.line) {
            (None, _) => self.to_json(index),
            (Some(uri), None) => self.to_json(&index.lookup(uri)),
            (Some(uri), Some(line)) => self.to_json(&index.lookup_line(uri, line)),
        }
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

fn format_summary(index: &ResultIndex, selection: &Selection) -> String {
    let mut uris: Vec<&str> = match &selection.uri {
        Some(uri) => vec![uri.as_str()],
        None => index.keys().collect(),
    };
    uris.sort_unstable();

    let mut output = String::new();
    for uri in uris {
        let counts = match selection.line {
            Some(line) => index
                .lookup_line(uri, line)
                .map(|bucket| (bucket.errors.len(), bucket.warnings.len())),
            None => index
                .lookup(uri)
                .map(|entry| (entry.error_count(), entry.warning_count())),
        };
        let (errors, warnings) = counts.unwrap_or_default();

        output.push_str(uri);
        if let Some(line) = selection.line {
            output.push_str(&format!(" line {}", line));
        }
        output.push_str(&format!(
            ": {} error{}, {} warning{}\n",
            errors,
            plural(errors),
            warnings,
            plural(warnings)
        ));
    }
    output
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
