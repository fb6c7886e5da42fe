//! Ingestor — parses delimited seed text into header-keyed [`Row`]s.
//!
//! The dialect is deliberately small: `,` separates fields and a field that
//! starts with `"` is quoted. Inside quotes a doubled `""` is a literal quote
//! and `\` stops the following character from closing the field; the
//! backslash itself stays in the value. Outside quotes both characters are
//! plain text. Records never span lines.
//!
//! Structural problems (missing headers, short rows) are fatal; value-level
//! problems are left to the normaliser, which degrades to defaults.

use std::collections::HashMap;

/// Headers every seed file must carry, checked in this order.
pub const REQUIRED_HEADERS: [&str; 5] = ["title", "excerpt", "views", "published", "author"];

/// One data line of the input, keyed by header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Raw (untrimmed) field values. Extra headers beyond the required set are
    /// kept as well.
    pub fields: HashMap<String, String>,
}

impl Row {
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields.get(header).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("empty input")]
    EmptyInput,
    #[error("missing required header: {header}")]
    MissingHeader { header: String },
    #[error("incomplete row at line {line}: expected {expected} fields, found {found}")]
    IncompleteRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Parse `text` into rows.
///
/// The first non-blank line is the header. Blank lines are skipped wherever
/// they appear; line numbers still count them.
pub fn parse(text: &str) -> Result<Vec<Row>, IngestError> {
    if text.trim().is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let mut lines = text
        .split('\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((header_line, raw_header)) = lines.next() else {
        return Err(IngestError::EmptyInput);
    };

    let headers: Vec<String> = split_fields(raw_header)
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();
    check_headers(&headers)?;
    tracing::debug!(line = header_line, columns = headers.len(), "parsed seed header");

    let mut rows = Vec::new();
    for (line, raw) in lines {
        let values = split_fields(raw);
        if values.len() < headers.len() {
            return Err(IngestError::IncompleteRow {
                line,
                expected: headers.len(),
                found: values.len(),
            });
        }
        let fields = headers.iter().cloned().zip(values).collect();
        rows.push(Row { line, fields });
    }

    tracing::debug!(rows = rows.len(), "ingested seed rows");
    Ok(rows)
}

fn check_headers(headers: &[String]) -> Result<(), IngestError> {
    for required in REQUIRED_HEADERS {
        if !headers.iter().any(|h| h == required) {
            return Err(IngestError::MissingHeader {
                header: required.to_string(),
            });
        }
    }
    Ok(())
}

/// Split one physical line into field values.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        let mut current = String::new();
        if chars.peek() == Some(&'"') {
            chars.next();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        current.push('\\');
                        if let Some(next) = chars.next() {
                            current.push(next);
                        }
                    }
                    '"' if chars.peek() == Some(&'"') => {
                        chars.next();
                        current.push('"');
                    }
                    '"' => break,
                    other => current.push(other),
                }
            }
        }
        // Unquoted text, or anything trailing a closing quote, is literal.
        while let Some(c) = chars.next_if(|&c| c != ',') {
            current.push(c);
        }
        fields.push(current);
        if chars.next().is_none() {
            return fields;
        }
    }
}
