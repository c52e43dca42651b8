//! CSV header parsing and normalization.

use std::collections::BTreeSet;

/// Header row as it appeared in the file.
#[derive(Debug, Clone)]
pub struct SourceHeaders {
    /// Raw header fields, unquoted but otherwise untouched.
    pub raw: Vec<String>,
}

impl SourceHeaders {
    pub fn new(raw: Vec<String>) -> Self {
        Self { raw }
    }

    /// Number of header fields, duplicates included.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of distinct raw header names.
    pub fn distinct_len(&self) -> usize {
        self.raw.iter().map(String::as_str).collect::<BTreeSet<_>>().len()
    }

    /// Normalized names in file order, duplicates kept.
    pub fn normalized(&self) -> Vec<String> {
        self.raw.iter().map(|name| normalize_header(name)).collect()
    }
}

/// Trims a header and collapses internal whitespace runs to a single space.
pub fn normalize_header(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses a CSV line into raw fields, handling quoted values.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            '\r' if !in_quotes && chars.peek().is_none() => {}
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Unit   Price "), "Unit Price");
        assert_eq!(normalize_header("Name\tFirst"), "Name First");
        assert_eq!(normalize_header("plain"), "plain");
    }

    #[test]
    fn test_parse_csv_line_simple() {
        assert_eq!(parse_csv_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        let result = parse_csv_line("\"hello, world\",b,c");
        assert_eq!(result, vec!["hello, world", "b", "c"]);
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        let result = parse_csv_line("\"he said \"\"hello\"\"\",b");
        assert_eq!(result, vec!["he said \"hello\"", "b"]);
    }

    #[test]
    fn test_parse_csv_line_keeps_padding() {
        assert_eq!(parse_csv_line(" a , b\r"), vec![" a ", " b"]);
    }

    #[test]
    fn test_headers_counts() {
        let headers = SourceHeaders::new(parse_csv_line("id,Name,id, Name"));
        assert_eq!(headers.len(), 4);
        assert_eq!(headers.distinct_len(), 3);
        assert_eq!(headers.normalized(), vec!["id", "Name", "id", "Name"]);
    }
}
