//! Splitting a decoded input stream into records and joining them back.
//!
//! The separator is a single character. A space separator splits on
//! whitespace runs, so word-oriented input behaves the way a scanner
//! would; any other separator splits on exact occurrences.

/// Split `input` into records on `separator`.
///
/// Trailing newlines on the final record are trimmed, so a file's closing
/// newline never becomes part of a record. Empty input yields no records.
pub fn split(input: &str, separator: char) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut records: Vec<String> = if separator == ' ' {
        input.split_whitespace().map(str::to_string).collect()
    } else {
        input.split(separator).map(str::to_string).collect()
    };

    if let Some(last) = records.last_mut() {
        while last.ends_with('\n') {
            last.pop();
        }
    }

    records
}

/// Join `records` back into a single stream with `separator`.
pub fn join(records: &[String], separator: char) -> String {
    let sep = separator.to_string();
    records.join(&sep)
}
