//! Minimal CSV reader for transaction imports
//!
//! The first line is the header; its fields are trimmed and lower-cased and
//! become the keys of every row. Data fields may be wrapped in double quotes
//! to protect embedded commas. A quote only flips the in-quotes state and is
//! never kept, so `""` is not an escaped quote.

use std::collections::HashMap;

use crate::error::{ActualError, ActualResult};

/// One data line, keyed by lower-cased header name
pub type CsvRow = HashMap<String, String>;

/// Parse CSV text into rows
///
/// # Errors
///
/// Returns `ActualError::Format` unless there is a header line and at least
/// one data line.
pub fn parse_csv(content: &str) -> ActualResult<Vec<CsvRow>> {
    let lines: Vec<&str> = content.trim().split('\n').collect();
    if lines.len() < 2 {
        return Err(ActualError::Format(
            "CSV must have a header row and at least one data row".into(),
        ));
    }

    let headers: Vec<String> = lines[0]
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();

    let rows = lines[1..]
        .iter()
        .map(|line| {
            let values = split_fields(line);
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = values.get(i).cloned().unwrap_or_default();
                    (header.clone(), value)
                })
                .collect()
        })
        .collect();

    Ok(rows)
}

/// Split one data line on commas outside of double quotes
pub fn split_fields(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    values.push(current.trim().to_string());

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let rows = parse_csv("date,amount,payee\n2024-01-01,12.50,Store").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["date"], "2024-01-01");
        assert_eq!(rows[0]["amount"], "12.50");
        assert_eq!(rows[0]["payee"], "Store");
    }

    #[test]
    fn test_header_only_fails() {
        let err = parse_csv("date,amount,payee\n").unwrap_err();
        assert!(matches!(err, ActualError::Format(_)));

        assert!(parse_csv("").is_err());
        assert!(parse_csv("  \n\n  ").is_err());
    }

    #[test]
    fn test_quoted_comma() {
        assert_eq!(split_fields("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_doubled_quote_is_two_toggles() {
        assert_eq!(split_fields("\"say \"\"hi\"\"\",x"), vec!["say hi", "x"]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest() {
        assert_eq!(split_fields("a,\"b,c"), vec!["a", "b,c"]);
    }

    #[test]
    fn test_headers_normalized() {
        let rows = parse_csv(" Date , AMOUNT,Imported_ID\n2024-01-01,1,abc").unwrap();
        assert_eq!(rows[0]["date"], "2024-01-01");
        assert_eq!(rows[0]["amount"], "1");
        assert_eq!(rows[0]["imported_id"], "abc");
    }

    #[test]
    fn test_short_row_padded_long_row_truncated() {
        let rows = parse_csv("date,amount,payee\n2024-01-01\n2024-01-02,5,Shop,extra").unwrap();
        assert_eq!(rows[0]["amount"], "");
        assert_eq!(rows[0]["payee"], "");
        assert_eq!(rows[1]["payee"], "Shop");
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn test_crlf_and_whitespace_trimmed() {
        let rows = parse_csv("date,amount\r\n 2024-01-01 ,  -3.25 \r\n").unwrap();
        assert_eq!(rows[0]["date"], "2024-01-01");
        assert_eq!(rows[0]["amount"], "-3.25");
    }

    #[test]
    fn test_blank_line_yields_empty_row() {
        let rows = parse_csv("date,amount\n2024-01-01,1\n\n2024-01-03,3").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1]["date"], "");
    }

    #[test]
    fn test_row_order_preserved() {
        let rows = parse_csv("n\n1\n2\n3").unwrap();
        let order: Vec<&str> = rows.iter().map(|r| r["n"].as_str()).collect();
        assert_eq!(order, vec!["1", "2", "3"]);
    }
}
